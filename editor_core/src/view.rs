// Copyright 2024 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! The primary view trait and associated trivial implementations.

use alloc::boxed::Box;
use core::ops::Deref;

use crate::environment::Environment;
use crate::{Mut, ViewElement};

/// A lightweight, short-lived representation of the state of a retained
/// structure, usually a native widget.
///
/// An app will generate a tree of these objects (the view tree) to represent
/// the state it wants to show in its element tree.
/// The host will then run methods on these views to create the associated
/// element tree, or to perform incremental updates to the element tree.
/// Once this process is complete, the element tree will reflect the view tree.
///
/// The view tree is transitory and is retained only long enough to serve as a
/// reference for the next view tree.
///
/// The `View` trait is parameterized by `State`, which is known as the "app state".
/// Each lifecycle method is given mutable access to the app state, which is how
/// [bindings](https://en.wikipedia.org/wiki/Data_binding) read their current value.
///
/// Views never decide when they run. The host guarantees that [`build`](View::build)
/// is called exactly once before any [`rebuild`](View::rebuild), that rebuilds never
/// overlap, and that [`teardown`](View::teardown) is the last call for an element.
pub trait View<State, Context: ViewContext>: 'static {
    /// The element type which this view operates on.
    type Element: ViewElement;
    /// State that is used over the lifetime of the retained representation of the view.
    ///
    /// The type used for this associated type cannot be treated as public API; this is
    /// internal state to the `View` implementation.
    type ViewState;

    /// Create the corresponding Element value.
    fn build(&self, ctx: &mut Context, app_state: &mut State) -> (Self::Element, Self::ViewState);

    /// Update `element` based on the difference between `self` and `prev`.
    fn rebuild(
        &self,
        prev: &Self,
        view_state: &mut Self::ViewState,
        ctx: &mut Context,
        element: Mut<'_, Self::Element>,
        app_state: &mut State,
    );

    /// Handle `element` being removed from the tree.
    ///
    /// The main use-case of this method is to clean up any book-keeping
    /// set-up in `build` and `rebuild`, such as callbacks registered on the element.
    fn teardown(
        &self,
        view_state: &mut Self::ViewState,
        ctx: &mut Context,
        element: Mut<'_, Self::Element>,
        app_state: &mut State,
    );
}

/// The context passed through [`View::build`], [`View::rebuild`] and [`View::teardown`].
///
/// Each `View` is expected to be implemented for one logical context type,
/// and this context may be used to store auxiliary data, such as platform services.
pub trait ViewContext {
    /// Access the [`Environment`] associated with this context.
    fn environment(&mut self) -> &mut Environment;
}

impl<State, Context, V> View<State, Context> for Box<V>
where
    Context: ViewContext,
    V: View<State, Context> + ?Sized,
{
    type Element = V::Element;
    type ViewState = V::ViewState;

    fn build(&self, ctx: &mut Context, app_state: &mut State) -> (Self::Element, Self::ViewState) {
        self.deref().build(ctx, app_state)
    }

    fn rebuild(
        &self,
        prev: &Self,
        view_state: &mut Self::ViewState,
        ctx: &mut Context,
        element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) {
        self.deref()
            .rebuild(prev, view_state, ctx, element, app_state);
    }

    fn teardown(
        &self,
        view_state: &mut Self::ViewState,
        ctx: &mut Context,
        element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) {
        self.deref().teardown(view_state, ctx, element, app_state);
    }
}
