// Copyright 2026 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Native widgets hosted by the view tree.

mod text_view;

pub use text_view::{DEFAULT_CONTENT_INSET, NativeTextView, TextViewDelegate};
