// Copyright 2026 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Debug;
use std::ops::Range;
use std::rc::Weak;

use kurbo::Insets;
use peniko::Color;

use crate::{PlatformFont, PlatformTextStyle, Typography};

/// Receives notifications from a [`NativeTextView`] when the user interacts with it.
///
/// The text view only holds a [weak](Weak) reference to its delegate.
/// Whoever creates the delegate owns it, and once it is dropped, notifications
/// are silently discarded.
pub trait TextViewDelegate {
    /// The user changed the text of `text_view`.
    fn text_view_did_change(&self, text_view: &NativeTextView);

    /// The user finished editing `text_view`, e.g. by dismissing the keyboard.
    fn text_view_did_end_editing(&self, text_view: &NativeTextView) {
        let _ = text_view;
    }
}

/// The space between the edges of a new text view and its text.
pub const DEFAULT_CONTENT_INSET: Insets = Insets::new(0., 8., 0., 8.);

/// A native, scrollable, multiline text view.
///
/// This is an imperative widget: every property is set through a method call,
/// and user input arrives through [`insert_text`](Self::insert_text),
/// [`delete_backward`](Self::delete_backward) and [`end_editing`](Self::end_editing),
/// which the platform calls as input events are received.
pub struct NativeTextView {
    text: String,
    /// Byte range, always on char boundaries of `text`.
    selection: Range<usize>,
    font: PlatformFont,
    /// `None` draws nothing, letting whatever is behind the view show through.
    background_color: Option<Color>,
    content_inset: Insets,
    delegate: Option<Weak<dyn TextViewDelegate>>,
}

// --- MARK: BUILDERS
impl NativeTextView {
    /// Create an empty text view with the platform defaults.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            selection: 0..0,
            font: Typography::default().preferred_font(PlatformTextStyle::Body),
            background_color: Some(Color::WHITE),
            content_inset: DEFAULT_CONTENT_INSET,
            delegate: None,
        }
    }
}

impl Default for NativeTextView {
    fn default() -> Self {
        Self::new()
    }
}

// --- MARK: ACCESSORS
impl NativeTextView {
    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The selected byte range. An empty range is a caret.
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// The font the text is displayed in.
    pub fn font(&self) -> &PlatformFont {
        &self.font
    }

    /// The color drawn behind the text, if any.
    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    /// The space between the edges of the view and its text.
    pub fn content_inset(&self) -> Insets {
        self.content_inset
    }

    /// Whether a delegate is set and still alive.
    pub fn has_delegate(&self) -> bool {
        self.delegate().is_some()
    }

    fn delegate(&self) -> Option<std::rc::Rc<dyn TextViewDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }
}

// --- MARK: MUTATORS
impl NativeTextView {
    /// Replace the displayed text.
    ///
    /// The selection collapses to the end of the new text, even if the text is unchanged.
    /// This does not notify the delegate.
    pub fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.selection = self.text.len()..self.text.len();
    }

    /// Display the text in `font`.
    pub fn set_font(&mut self, font: PlatformFont) {
        tracing::trace!(?font, "Setting text view font");
        self.font = font;
    }

    /// Set the color drawn behind the text. `None` makes the view transparent.
    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    /// Set the space between the edges of the view and its text.
    pub fn set_content_inset(&mut self, inset: Insets) {
        self.content_inset = inset;
    }

    /// Select the given byte range.
    ///
    /// The range is clamped to the text, and each end is moved back to the nearest char boundary.
    pub fn select(&mut self, range: Range<usize>) {
        let end = floor_char_boundary(&self.text, range.end);
        let start = floor_char_boundary(&self.text, range.start.min(end));
        self.selection = start..end;
    }

    /// Set the object notified of user edits. Only a weak reference is kept.
    pub fn set_delegate(&mut self, delegate: Weak<dyn TextViewDelegate>) {
        self.delegate = Some(delegate);
    }

    /// Stop notifying the delegate.
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }
}

// --- MARK: USER INPUT
impl NativeTextView {
    /// Replace the selection with `text`, as if typed or pasted by the user.
    pub fn insert_text(&mut self, text: &str) {
        let Range { start, end } = self.selection.clone();
        self.text.replace_range(start..end, text);
        let caret = start + text.len();
        self.selection = caret..caret;
        self.notify_changed();
    }

    /// Delete the selection, or the character before the caret, as if the user pressed backspace.
    pub fn delete_backward(&mut self) {
        let Range { mut start, end } = self.selection.clone();
        if start == end {
            let Some((previous, _)) = self.text[..start].char_indices().next_back() else {
                return;
            };
            start = previous;
        }
        self.text.replace_range(start..end, "");
        self.selection = start..start;
        self.notify_changed();
    }

    /// The user finished editing.
    pub fn end_editing(&mut self) {
        if let Some(delegate) = self.delegate() {
            delegate.text_view_did_end_editing(self);
        }
    }

    fn notify_changed(&self) {
        if let Some(delegate) = self.delegate() {
            delegate.text_view_did_change(self);
        }
    }
}

impl Debug for NativeTextView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeTextView")
            .field("text", &self.text)
            .field("selection", &self.selection)
            .field("font", &self.font)
            .field("background_color", &self.background_color)
            .field("content_inset", &self.content_inset)
            .field("has_delegate", &self.has_delegate())
            .finish_non_exhaustive()
    }
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
