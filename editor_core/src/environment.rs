// Copyright 2025 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Values accessible throughout the view tree.

use alloc::boxed::Box;
use core::any::{Any, TypeId, type_name};
use core::fmt::Debug;

use hashbrown::HashMap;

use crate::{Mut, View, ViewContext};

/// Marker trait for types usable as resources.
///
/// A resource is an ambient value, keyed by its type, which views can read
/// from the [`Environment`] without it being passed down explicitly.
pub trait Resource: Any + Debug {}

/// The ambient values visible to the view currently being built, rebuilt or torn down.
///
/// At most one value of each [`Resource`] type is visible at a time.
/// Values are installed for a subtree by [`Provides`], which restores the
/// outer value once the subtree has been processed.
pub struct Environment {
    values: HashMap<TypeId, Box<dyn Any>>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// The currently provided value of type `R`, if any.
    pub fn get<R: Resource>(&self) -> Option<&R> {
        self.values
            .get(&TypeId::of::<R>())
            .and_then(|value| value.downcast_ref())
    }

    /// Provide `value`, returning the value of the same type it replaces.
    pub fn insert<R: Resource>(&mut self, value: R) -> Option<R> {
        let previous = self.values.insert(TypeId::of::<R>(), Box::new(value))?;
        Some(Self::unbox(previous))
    }

    /// Stop providing a value of type `R`, returning it.
    pub fn remove<R: Resource>(&mut self) -> Option<R> {
        let previous = self.values.remove(&TypeId::of::<R>())?;
        Some(Self::unbox(previous))
    }

    /// Put back a value previously returned by [`insert`](Self::insert).
    ///
    /// `None` means that no value of this type was provided before, so the
    /// current one is removed.
    pub fn restore<R: Resource>(&mut self, previous: Option<R>) {
        match previous {
            Some(value) => {
                self.insert(value);
            }
            None => {
                self.remove::<R>();
            }
        }
    }

    /// The number of resource types which currently have a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no resources are currently provided.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn unbox<R: Resource>(value: Box<dyn Any>) -> R {
        match value.downcast::<R>() {
            Ok(value) => *value,
            // Values are only ever stored under their own `TypeId`.
            Err(_) => unreachable!("environment slot for {} held another type", type_name::<R>()),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Environment")
            .field("resources", &self.values.len())
            .finish()
    }
}

/// Provide `value` as a [`Resource`] to `child` and everything beneath it.
///
/// The value is visible during `child`'s build, rebuild and teardown.
/// Any outer value of the same type is shadowed, and restored afterwards.
pub fn provides<R, Child>(value: R, child: Child) -> Provides<R, Child>
where
    R: Resource + Clone,
{
    Provides { value, child }
}

/// The [`View`] created by [`provides`].
#[must_use = "View values do nothing unless provided to a host."]
#[derive(Debug)]
pub struct Provides<R, Child> {
    value: R,
    child: Child,
}

impl<R, Child> Provides<R, Child>
where
    R: Resource + Clone,
{
    fn with_value<Context: ViewContext, T>(
        &self,
        ctx: &mut Context,
        f: impl FnOnce(&mut Context) -> T,
    ) -> T {
        let outer = ctx.environment().insert(self.value.clone());
        let result = f(ctx);
        ctx.environment().restore(outer);
        result
    }
}

impl<State, Context, R, Child> View<State, Context> for Provides<R, Child>
where
    Context: ViewContext,
    R: Resource + Clone,
    Child: View<State, Context>,
{
    type Element = Child::Element;
    type ViewState = Child::ViewState;

    fn build(&self, ctx: &mut Context, app_state: &mut State) -> (Self::Element, Self::ViewState) {
        tracing::trace!(resource = ?self.value, "Providing resource for build");
        self.with_value(ctx, |ctx| self.child.build(ctx, app_state))
    }

    fn rebuild(
        &self,
        prev: &Self,
        view_state: &mut Self::ViewState,
        ctx: &mut Context,
        element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) {
        self.with_value(ctx, |ctx| {
            self.child
                .rebuild(&prev.child, view_state, ctx, element, app_state);
        });
    }

    fn teardown(
        &self,
        view_state: &mut Self::ViewState,
        ctx: &mut Context,
        element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) {
        self.with_value(ctx, |ctx| {
            self.child.teardown(view_state, ctx, element, app_state);
        });
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Theme(&'static str);
    impl Resource for Theme {}

    #[derive(Clone, Debug, PartialEq)]
    struct Scale(u32);
    impl Resource for Scale {}

    #[test]
    fn values_are_keyed_by_type() {
        let mut env = Environment::new();
        assert!(env.is_empty());
        env.insert(Theme("dark"));
        env.insert(Scale(2));
        assert_eq!(env.len(), 2);
        assert_eq!(env.get::<Theme>(), Some(&Theme("dark")));
        assert_eq!(env.get::<Scale>(), Some(&Scale(2)));
    }

    #[test]
    fn insert_returns_shadowed_value() {
        let mut env = Environment::new();
        assert_matches!(env.insert(Theme("dark")), None);
        assert_matches!(env.insert(Theme("light")), Some(Theme("dark")));
        assert_eq!(env.get::<Theme>(), Some(&Theme("light")));
    }

    #[test]
    fn restore_none_removes_value() {
        let mut env = Environment::new();
        let outer = env.insert(Theme("inner"));
        env.restore(outer);
        assert_eq!(env.get::<Theme>(), None);
        assert!(env.is_empty());
    }
}
