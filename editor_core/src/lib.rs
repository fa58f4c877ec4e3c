// Copyright 2026 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Generic reactive core used by the `text_editor` crate.
//!
//! This crate knows nothing about text or fonts. It provides:
//!
//! - [`View`], the lightweight description of a retained element, driven by a host
//!   through [`build`](View::build), [`rebuild`](View::rebuild) and [`teardown`](View::teardown).
//! - [`ViewElement`], the element types views operate on.
//! - [`Environment`], type-keyed ambient values such as the current font, which a
//!   subtree can be given through [`provides`].
#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]
// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
extern crate alloc;

mod view;
pub use view::{View, ViewContext};

mod element;
pub use element::{Mut, ViewElement};

mod environment;
pub use environment::{Environment, Provides, Resource, provides};
