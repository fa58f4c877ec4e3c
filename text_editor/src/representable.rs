// Copyright 2026 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Hosting imperative native widgets in the view tree.

use std::marker::PhantomData;
use std::rc::Rc;

use editor_core::{Environment, Mut, Resource, View};

use crate::{Pod, Typography, ViewCtx};

/// An adapter which exposes an imperative native widget as a [`View`].
///
/// Implementors describe how to create the widget and how to bring it up to
/// date; wrapping them in [`Representable`] lets the host decide when that happens.
/// The host calls [`make_coordinator`](Self::make_coordinator) and then
/// [`make_widget`](Self::make_widget) exactly once, then
/// [`update_widget`](Self::update_widget) whenever the view's inputs may have changed,
/// and finally [`dismantle_widget`](Self::dismantle_widget).
///
/// The coordinator is the object which receives the widget's callbacks.
/// It is owned by the view tree, so widgets should only keep weak references to it.
pub trait WidgetRepresentable<State>: 'static {
    /// The native widget.
    type Widget: 'static;
    /// Receives callbacks from [`Widget`](Self::Widget).
    type Coordinator: 'static;

    /// Create the coordinator. This runs before [`make_widget`](Self::make_widget).
    fn make_coordinator(&self) -> Self::Coordinator;

    /// Create and configure the widget.
    fn make_widget(
        &self,
        ctx: &RepresentableContext<'_, Self::Coordinator>,
        app_state: &mut State,
    ) -> Self::Widget;

    /// Synchronise `widget` with `self` and the environment.
    fn update_widget(
        &self,
        widget: &mut Self::Widget,
        ctx: &RepresentableContext<'_, Self::Coordinator>,
        app_state: &mut State,
    );

    /// Clean up `widget` before it is removed.
    fn dismantle_widget(widget: &mut Self::Widget, coordinator: &Rc<Self::Coordinator>) {
        let _ = (widget, coordinator);
    }
}

/// What a [`WidgetRepresentable`] can see while creating or updating its widget.
#[derive(Debug)]
pub struct RepresentableContext<'a, C> {
    coordinator: &'a Rc<C>,
    environment: &'a Environment,
    typography: &'a Typography,
}

impl<'a, C> RepresentableContext<'a, C> {
    fn new(ctx: &'a ViewCtx, coordinator: &'a Rc<C>) -> Self {
        Self {
            coordinator,
            environment: &ctx.environment,
            typography: &ctx.typography,
        }
    }

    /// The coordinator created by [`WidgetRepresentable::make_coordinator`].
    pub fn coordinator(&self) -> &'a Rc<C> {
        self.coordinator
    }

    /// The ambient value of type `R`, if one is provided.
    pub fn environment<R: Resource>(&self) -> Option<&'a R> {
        self.environment.get()
    }

    /// The platform typography service.
    pub fn typography(&self) -> &'a Typography {
        self.typography
    }
}

/// Host a [`WidgetRepresentable`] in the view tree.
pub fn representable<State, R>(representable: R) -> Representable<State, R>
where
    R: WidgetRepresentable<State>,
{
    Representable {
        inner: representable,
        phantom: PhantomData,
    }
}

/// The [`View`] created by [`representable`].
#[must_use = "View values do nothing unless provided to a host."]
pub struct Representable<State, R> {
    inner: R,
    phantom: PhantomData<fn(State)>,
}

impl<State, R: std::fmt::Debug> std::fmt::Debug for Representable<State, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Representable").field(&self.inner).finish()
    }
}

impl<State, R> View<State, ViewCtx> for Representable<State, R>
where
    State: 'static,
    R: WidgetRepresentable<State>,
{
    type Element = Pod<R::Widget>;
    type ViewState = Rc<R::Coordinator>;

    fn build(&self, ctx: &mut ViewCtx, app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let coordinator = Rc::new(self.inner.make_coordinator());
        let widget = self
            .inner
            .make_widget(&RepresentableContext::new(ctx, &coordinator), app_state);
        (Pod::new(widget), coordinator)
    }

    fn rebuild(
        &self,
        _prev: &Self,
        coordinator: &mut Self::ViewState,
        ctx: &mut ViewCtx,
        element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) {
        self.inner.update_widget(
            element,
            &RepresentableContext::new(ctx, coordinator),
            app_state,
        );
    }

    fn teardown(
        &self,
        coordinator: &mut Self::ViewState,
        _: &mut ViewCtx,
        element: Mut<'_, Self::Element>,
        _: &mut State,
    ) {
        R::dismantle_widget(element, coordinator);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Counts lifecycle calls on a plain integer widget.
    struct Counter;

    #[derive(Default)]
    struct Calls {
        updates: Cell<u32>,
    }

    impl WidgetRepresentable<u32> for Counter {
        type Widget = u32;
        type Coordinator = Calls;

        fn make_coordinator(&self) -> Calls {
            Calls::default()
        }

        fn make_widget(&self, ctx: &RepresentableContext<'_, Calls>, app_state: &mut u32) -> u32 {
            assert_eq!(ctx.coordinator().updates.get(), 0);
            *app_state
        }

        fn update_widget(
            &self,
            widget: &mut u32,
            ctx: &RepresentableContext<'_, Calls>,
            app_state: &mut u32,
        ) {
            let updates = &ctx.coordinator().updates;
            updates.set(updates.get() + 1);
            *widget = *app_state;
        }

        fn dismantle_widget(widget: &mut u32, _: &Rc<Calls>) {
            *widget = 0;
        }
    }

    #[test]
    fn lifecycle_reaches_the_adapter() {
        let mut ctx = ViewCtx::default();
        let mut state = 3;
        let view = representable(Counter);
        let (mut pod, mut coordinator) = view.build(&mut ctx, &mut state);
        assert_eq!(pod.widget, 3);

        state = 7;
        view.rebuild(&view, &mut coordinator, &mut ctx, &mut pod.widget, &mut state);
        view.rebuild(&view, &mut coordinator, &mut ctx, &mut pod.widget, &mut state);
        assert_eq!(pod.widget, 7);
        assert_eq!(coordinator.updates.get(), 2);

        view.teardown(&mut coordinator, &mut ctx, &mut pod.widget, &mut state);
        assert_eq!(pod.widget, 0);
    }
}
