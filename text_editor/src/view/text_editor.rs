// Copyright 2026 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::rc::Rc;

use editor_core::{Mut, View};
use kurbo::Insets;

use crate::representable::{Representable, RepresentableContext, WidgetRepresentable, representable};
use crate::widgets::{NativeTextView, TextViewDelegate};
use crate::{Binding, Font, PlatformTextStyle, Pod, ViewCtx};

type ChangedCallback = Rc<dyn Fn(&str)>;
type CommitCallback = Rc<dyn Fn()>;

/// A multiline text editor showing the text of `text`.
///
/// The font is taken from the ambient [`Font`], set using [`font`](super::font).
///
/// The displayed text is overwritten from `text` on every rebuild.
/// Edits made by the user are reported to [`on_editing_changed`](TextEditor::on_editing_changed),
/// but are *not* written back into `text`.
///
/// # Examples
///
/// ```
/// use text_editor::view::{EditorView, text_editor};
/// use text_editor::{Binding, Font, Host};
///
/// struct Note {
///     body: String,
/// }
///
/// let host = Host::new(Note { body: "Hello".into() }, |_: &mut Note| {
///     text_editor(Binding::new(|note: &mut Note| &mut note.body)).font(Font::TITLE)
/// });
/// assert_eq!(host.widget().text(), "Hello");
/// ```
pub fn text_editor<State: 'static>(text: Binding<State, String>) -> TextEditor<State> {
    TextEditor {
        text,
        on_editing_changed: None,
        on_commit: None,
    }
}

/// The [`View`] created by [`text_editor`].
#[must_use = "View values do nothing unless provided to a host."]
pub struct TextEditor<State> {
    text: Binding<State, String>,
    on_editing_changed: Option<ChangedCallback>,
    on_commit: Option<CommitCallback>,
}

impl<State: 'static> TextEditor<State> {
    /// Set a callback which is run with the new text each time the user edits it.
    pub fn on_editing_changed<F>(mut self, on_editing_changed: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        self.on_editing_changed = Some(Rc::new(on_editing_changed));
        self
    }

    /// Set a callback which is run when the user finishes editing.
    pub fn on_commit<F>(mut self, on_commit: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_commit = Some(Rc::new(on_commit));
        self
    }

    fn body(&self) -> Representable<State, TextEditorWidget<State>> {
        representable(TextEditorWidget {
            text: self.text.clone(),
            callbacks: Callbacks {
                on_editing_changed: self.on_editing_changed.clone(),
                on_commit: self.on_commit.clone(),
            },
        })
    }
}

impl<State> std::fmt::Debug for TextEditor<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextEditor")
            .field("text", &self.text)
            .field("on_editing_changed", &self.on_editing_changed.is_some())
            .field("on_commit", &self.on_commit.is_some())
            .finish()
    }
}

impl<State: 'static> View<State, ViewCtx> for TextEditor<State> {
    type Element = Pod<NativeTextView>;
    type ViewState = Rc<Coordinator>;

    fn build(&self, ctx: &mut ViewCtx, app_state: &mut State) -> (Self::Element, Self::ViewState) {
        self.body().build(ctx, app_state)
    }

    fn rebuild(
        &self,
        prev: &Self,
        view_state: &mut Self::ViewState,
        ctx: &mut ViewCtx,
        element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) {
        self.body()
            .rebuild(&prev.body(), view_state, ctx, element, app_state);
    }

    fn teardown(
        &self,
        view_state: &mut Self::ViewState,
        ctx: &mut ViewCtx,
        element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) {
        self.body().teardown(view_state, ctx, element, app_state);
    }
}

#[derive(Clone)]
struct Callbacks {
    on_editing_changed: Option<ChangedCallback>,
    on_commit: Option<CommitCallback>,
}

/// Hosts a [`NativeTextView`] showing the text of a [`Binding`].
struct TextEditorWidget<State> {
    text: Binding<State, String>,
    callbacks: Callbacks,
}

impl<State: 'static> WidgetRepresentable<State> for TextEditorWidget<State> {
    type Widget = NativeTextView;
    type Coordinator = Coordinator;

    fn make_coordinator(&self) -> Coordinator {
        Coordinator {
            callbacks: RefCell::new(self.callbacks.clone()),
        }
    }

    fn make_widget(
        &self,
        ctx: &RepresentableContext<'_, Coordinator>,
        app_state: &mut State,
    ) -> NativeTextView {
        let mut text_view = NativeTextView::new();
        text_view.set_background_color(None);
        text_view.set_text(&self.text.get(app_state));
        let font = match ctx.environment::<Font>() {
            Some(font) => font.resolve(ctx.typography()),
            None => ctx.typography().preferred_font(PlatformTextStyle::Body),
        };
        text_view.set_font(font);
        text_view.set_content_inset(Insets::ZERO);

        let coordinator: Rc<dyn TextViewDelegate> = ctx.coordinator().clone();
        text_view.set_delegate(Rc::downgrade(&coordinator));
        text_view
    }

    fn update_widget(
        &self,
        text_view: &mut NativeTextView,
        ctx: &RepresentableContext<'_, Coordinator>,
        app_state: &mut State,
    ) {
        *ctx.coordinator().callbacks.borrow_mut() = self.callbacks.clone();

        if let Some(font) = ctx.environment::<Font>().map(|font| font.resolve(ctx.typography()))
            && font != *text_view.font()
        {
            text_view.set_font(font);
        }
        // Overwritten even when unchanged, which also resets the selection.
        text_view.set_text(&self.text.get(app_state));
    }

    fn dismantle_widget(text_view: &mut NativeTextView, _: &Rc<Coordinator>) {
        text_view.clear_delegate();
    }
}

/// Receives edits from the [`NativeTextView`] of a [`TextEditor`].
#[allow(unnameable_types, reason = "Implementation detail, public because of trait visibility rules")]
pub struct Coordinator {
    callbacks: RefCell<Callbacks>,
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator").finish_non_exhaustive()
    }
}

impl TextViewDelegate for Coordinator {
    fn text_view_did_change(&self, text_view: &NativeTextView) {
        tracing::debug!(text = text_view.text(), "Text editor changed");
        // The binding is left untouched; see `TextEditor`.
        let on_editing_changed = self.callbacks.borrow().on_editing_changed.clone();
        if let Some(on_editing_changed) = on_editing_changed {
            on_editing_changed(text_view.text());
        }
    }

    fn text_view_did_end_editing(&self, _: &NativeTextView) {
        tracing::debug!("Text editor finished editing");
        let on_commit = self.callbacks.borrow().on_commit.clone();
        if let Some(on_commit) = on_commit {
            on_commit();
        }
    }
}
