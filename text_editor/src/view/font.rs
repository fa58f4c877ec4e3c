// Copyright 2026 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

use editor_core::{Provides, View, provides};

use crate::{Font, ViewCtx};

/// Use `font` as the ambient [`Font`] for `child` and everything beneath it.
///
/// This is the same as calling [`EditorView::font`] on `child`.
pub fn font<State, V>(font: Font, child: V) -> Provides<Font, V>
where
    V: View<State, ViewCtx>,
{
    provides(font, child)
}

/// Methods available on every view in this crate.
pub trait EditorView<State>: View<State, ViewCtx> + Sized {
    /// Use `font` as the ambient [`Font`] for this view and everything beneath it.
    ///
    /// See [`font`](fn@font).
    fn font(self, font: Font) -> Provides<Font, Self> {
        provides(font, self)
    }
}

impl<State, V> EditorView<State> for V where V: View<State, ViewCtx> {}
