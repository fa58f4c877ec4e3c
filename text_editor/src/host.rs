// Copyright 2026 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

use editor_core::View;
use tracing::{debug_span, info_span};

use crate::{ContentSizeCategory, Pod, Typography, ViewCtx};

/// Drives the lifecycle of a view tree whose root element is a single native widget.
///
/// The host owns the app state and the call schedule: the view is built once in
/// [`new`](Self::new), rebuilt each time [`rebuild`](Self::rebuild) is called, and
/// torn down by [`teardown`](Self::teardown).
/// Native input events are delivered to the widget through [`widget_mut`](Self::widget_mut).
pub struct Host<State, Logic, V>
where
    V: View<State, ViewCtx>,
{
    state: State,
    logic: Logic,
    ctx: ViewCtx,
    current_view: V,
    view_state: V::ViewState,
    root: V::Element,
}

impl<State, Logic, V, W> Host<State, Logic, V>
where
    Logic: FnMut(&mut State) -> V,
    V: View<State, ViewCtx, Element = Pod<W>>,
    W: 'static,
{
    /// Build the view returned by `logic` with the default [`Typography`].
    pub fn new(state: State, logic: Logic) -> Self {
        Self::with_typography(state, logic, Typography::default())
    }

    /// Build the view returned by `logic`, resolving fonts with `typography`.
    pub fn with_typography(mut state: State, mut logic: Logic, typography: Typography) -> Self {
        let _span = info_span!("build").entered();
        let mut ctx = ViewCtx::new(typography);
        let current_view = logic(&mut state);
        let (root, view_state) = current_view.build(&mut ctx, &mut state);
        debug_assert!(
            ctx.environment.is_empty(),
            "views must restore the environment they were given"
        );
        Self {
            state,
            logic,
            ctx,
            current_view,
            view_state,
            root,
        }
    }

    /// Run the app logic again and bring the widget up to date with the new view.
    pub fn rebuild(&mut self) {
        let _span = debug_span!("rebuild").entered();
        let next_view = (self.logic)(&mut self.state);
        next_view.rebuild(
            &self.current_view,
            &mut self.view_state,
            &mut self.ctx,
            &mut self.root.widget,
            &mut self.state,
        );
        self.current_view = next_view;
    }

    /// Tear down the view and return the app state.
    ///
    /// The widget is dropped.
    pub fn teardown(self) -> State {
        let _span = info_span!("teardown").entered();
        let Self {
            mut state,
            mut ctx,
            current_view,
            mut view_state,
            mut root,
            ..
        } = self;
        current_view.teardown(&mut view_state, &mut ctx, &mut root.widget, &mut state);
        state
    }

    /// The app state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Mutable access to the app state.
    ///
    /// Changes are shown once [`rebuild`](Self::rebuild) is called.
    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// The root widget.
    pub fn widget(&self) -> &W {
        &self.root.widget
    }

    /// Mutable access to the root widget, used to deliver native input events.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.root.widget
    }

    /// The typography service fonts are currently resolved with.
    pub fn typography(&self) -> &Typography {
        self.ctx.typography()
    }

    /// Follow a change to the user's preferred text size.
    ///
    /// Like any other input, this is only applied to the widget by the next [`rebuild`](Self::rebuild).
    pub fn set_content_size_category(&mut self, content_size: ContentSizeCategory) {
        tracing::info!(?content_size, "Content size category changed");
        self.ctx.set_typography(Typography::new(content_size));
    }
}

impl<State, Logic, V> std::fmt::Debug for Host<State, Logic, V>
where
    V: View<State, ViewCtx>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host")
            .field("ctx", &self.ctx)
            .finish_non_exhaustive()
    }
}
