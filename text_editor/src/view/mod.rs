// Copyright 2026 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Views for the text editor component.

mod font;
pub use font::{EditorView, font};

mod text_editor;
pub use text_editor::{TextEditor, text_editor};
