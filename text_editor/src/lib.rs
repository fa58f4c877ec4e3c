// Copyright 2026 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! A multiline text editor component for a declarative view tree.
//!
//! The editor shows the text of a [`Binding`] into your app state, in the ambient
//! [`Font`] adapted to the platform's [`Typography`].
//! Underneath, it is a thin adapter over an imperative [`NativeTextView`](widgets::NativeTextView),
//! built with the [`WidgetRepresentable`](representable::WidgetRepresentable) interface.
//!
//! ## Example
//!
//! ```rust
//! use text_editor::view::{EditorView, text_editor};
//! use text_editor::{Binding, Font, Host};
//!
//! #[derive(Default)]
//! struct Notes {
//!     draft: String,
//! }
//!
//! let mut host = Host::new(Notes::default(), |_: &mut Notes| {
//!     text_editor(Binding::new(|notes: &mut Notes| &mut notes.draft))
//!         .on_commit(|| println!("Done editing"))
//!         .font(Font::BODY)
//! });
//! host.state_mut().draft = "Shopping list".to_string();
//! host.rebuild();
//! assert_eq!(host.widget().text(), "Shopping list");
//! ```
//!
//! ## Two-way binding
//!
//! The editor reads its binding on every build and rebuild, overwriting whatever the
//! widget displays. It never writes to the binding: user edits are only reported
//! to [`on_editing_changed`](view::TextEditor::on_editing_changed).
//! Apps which want edits to be kept should store them from that callback, or
//! expect them to be replaced by the next rebuild.
//!
//! ## Logging
//!
//! This crate logs using [`tracing`]. [`try_init_tracing`] installs a suitable subscriber.
#![forbid(unsafe_code)]
// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET

pub use editor_core as core;
pub use kurbo;
pub use parley;
pub use peniko;

mod binding;
mod font;
mod host;
mod tracing_backend;
mod typography;
mod view_ctx;

pub mod representable;
pub mod view;
pub mod widgets;

pub use binding::Binding;
pub use font::{Font, TextStyle};
pub use host::Host;
pub use tracing_backend::{try_init_test_tracing, try_init_tracing};
pub use typography::{ContentSizeCategory, PlatformFont, PlatformTextStyle, Typography};
pub use view_ctx::{Pod, ViewCtx};
