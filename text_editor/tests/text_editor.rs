// Copyright 2026 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Tests for the [`text_editor`] view, driven through a [`Host`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use float_cmp::assert_approx_eq;
use text_editor::core::View;
use text_editor::kurbo::Insets;
use text_editor::view::{EditorView, TextEditor, font, text_editor};
use text_editor::widgets::NativeTextView;
use text_editor::{
    Binding, ContentSizeCategory, Font, Host, PlatformTextStyle, Pod, Typography, ViewCtx,
    try_init_test_tracing,
};

struct AppState {
    text: String,
    font: Font,
}

impl AppState {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            font: Font::BODY,
        }
    }
}

fn editor() -> TextEditor<AppState> {
    text_editor(Binding::new(|state: &mut AppState| &mut state.text))
}

fn editor_with_ambient_font(
    state: &mut AppState,
) -> impl View<AppState, ViewCtx, Element = Pod<NativeTextView>> + use<> {
    editor().font(state.font.clone())
}

#[test]
fn build_shows_bound_text() {
    let _ = try_init_test_tracing();
    let host = Host::new(AppState::new("hello"), |_: &mut AppState| editor());
    let text_view = host.widget();

    assert_eq!(text_view.text(), "hello");
    assert_eq!(text_view.background_color(), None);
    assert_eq!(text_view.content_inset(), Insets::ZERO);
    assert!(text_view.has_delegate());
}

#[test]
fn without_ambient_font_uses_body() {
    let host = Host::new(AppState::new(""), |_: &mut AppState| editor());
    assert_eq!(
        *host.widget().font(),
        Typography::default().preferred_font(PlatformTextStyle::Body)
    );
}

#[test]
fn ambient_font_is_applied_on_build() {
    let mut state = AppState::new("");
    state.font = Font::LARGE_TITLE;
    let host = Host::new(state, editor_with_ambient_font);

    let font = host.widget().font();
    assert_eq!(font.text_style, PlatformTextStyle::LargeTitle);
    assert_approx_eq!(f32, font.size, 34.);
}

#[test]
fn rebuild_overwrites_text() {
    let mut host = Host::new(AppState::new("hello"), |_: &mut AppState| editor());
    host.state_mut().text = "world".to_string();
    host.rebuild();
    assert_eq!(host.widget().text(), "world");
}

#[test]
fn rebuild_with_same_text_resets_selection() {
    let mut host = Host::new(AppState::new("world"), |_: &mut AppState| editor());
    host.widget_mut().select(1..3);
    assert_eq!(host.widget().selection(), 1..3);

    host.rebuild();
    assert_eq!(host.widget().text(), "world");
    assert_eq!(
        host.widget().selection(),
        5..5,
        "the text is overwritten on every rebuild, moving the caret to the end"
    );
}

#[test]
fn user_edits_are_not_written_to_binding() {
    let mut host = Host::new(AppState::new("hello"), |_: &mut AppState| editor());
    host.widget_mut().insert_text(", world");

    assert_eq!(host.widget().text(), "hello, world");
    assert_eq!(
        host.state().text,
        "hello",
        "the binding is read-only from the editor's side"
    );

    // So the next rebuild discards the edit.
    host.rebuild();
    assert_eq!(host.widget().text(), "hello");
}

#[test]
fn user_edits_reach_callbacks() {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let commits = Rc::new(Cell::new(0));
    let logic = {
        let changes = changes.clone();
        let commits = commits.clone();
        move |_: &mut AppState| {
            let changes = changes.clone();
            let commits = commits.clone();
            editor()
                .on_editing_changed(move |text| changes.borrow_mut().push(text.to_string()))
                .on_commit(move || commits.set(commits.get() + 1))
        }
    };
    let mut host = Host::new(AppState::new("a"), logic);

    host.widget_mut().insert_text("b");
    host.rebuild();
    host.widget_mut().insert_text("c");
    host.widget_mut().end_editing();

    assert_eq!(*changes.borrow(), ["ab", "ac"]);
    assert_eq!(commits.get(), 1);
    assert_eq!(host.state().text, "a");
}

#[test]
fn changing_only_the_font_keeps_text() {
    let mut host = Host::new(AppState::new("hello"), editor_with_ambient_font);
    let body = host.widget().font().clone();

    host.state_mut().font = Font::HEADLINE;
    host.rebuild();

    assert_eq!(host.widget().text(), "hello");
    assert_ne!(*host.widget().font(), body);
    assert_eq!(host.widget().font().text_style, PlatformTextStyle::Headline);
}

#[test]
fn font_function_provides_ambient_font() {
    let mut host = Host::new(AppState::new("hello"), |state: &mut AppState| {
        font(state.font.clone(), editor())
    });
    assert_eq!(host.widget().font().text_style, PlatformTextStyle::Body);

    host.state_mut().font = Font::CAPTION;
    host.rebuild();

    let caption = host.widget().font();
    assert_eq!(caption.text_style, PlatformTextStyle::Caption1);
    assert_approx_eq!(f32, caption.size, 12.);
    assert_eq!(host.widget().text(), "hello");
}

#[test]
fn unrecognised_font_falls_back_to_body() {
    let mut state = AppState::new("");
    state.font = Font::custom("Fira Code", 12.);
    let host = Host::new(state, editor_with_ambient_font);
    assert_eq!(*host.widget().font(), Font::BODY.resolve(host.typography()));
}

#[test]
fn content_size_changes_apply_on_rebuild() {
    let mut host = Host::with_typography(
        AppState::new(""),
        editor_with_ambient_font,
        Typography::new(ContentSizeCategory::Large),
    );
    assert_approx_eq!(f32, host.widget().font().size, 17.);

    host.set_content_size_category(ContentSizeCategory::ExtraExtraExtraLarge);
    assert_approx_eq!(f32, host.widget().font().size, 17.);
    host.rebuild();
    assert_approx_eq!(f32, host.widget().font().size, 23.);
}

#[test]
fn binding_is_read_once_per_cycle() {
    let reads = Rc::new(Cell::new(0));
    let logic = {
        let reads = reads.clone();
        move |_: &mut AppState| {
            let reads = reads.clone();
            text_editor(Binding::new(move |state: &mut AppState| {
                reads.set(reads.get() + 1);
                &mut state.text
            }))
        }
    };
    let mut host = Host::new(AppState::new("hello"), logic);
    assert_eq!(reads.get(), 1);
    host.rebuild();
    host.rebuild();
    assert_eq!(reads.get(), 3);
}

#[test]
fn constant_binding_shows_value() {
    let host = Host::new((), |_: &mut ()| {
        text_editor(Binding::<(), _>::constant("Hello TextField".to_string())).font(Font::LARGE_TITLE)
    });
    assert_eq!(host.widget().text(), "Hello TextField");
}

#[test]
fn teardown_detaches_delegate() {
    let mut ctx = ViewCtx::default();
    let mut state = AppState::new("hello");
    let view = editor();
    let (mut pod, mut coordinator) = view.build(&mut ctx, &mut state);
    assert!(pod.widget.has_delegate());

    view.teardown(&mut coordinator, &mut ctx, &mut pod.widget, &mut state);
    assert!(!pod.widget.has_delegate());
    drop(coordinator);

    // Edits after teardown go nowhere.
    pod.widget.insert_text("!");
    assert_eq!(state.text, "hello");
}

#[test]
fn coordinator_lives_with_the_view_state() {
    let mut ctx = ViewCtx::default();
    let mut state = AppState::new("hello");
    let (pod, coordinator) = editor().build(&mut ctx, &mut state);
    assert!(pod.widget.has_delegate());

    drop(coordinator);
    assert!(
        !pod.widget.has_delegate(),
        "the widget must only hold a weak reference to its coordinator"
    );
}
