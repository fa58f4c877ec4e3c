// Copyright 2024 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! The types which can be used as elements in a [`View`](crate::View)

/// A type which can be used as the `Element` associated type for a [`View`](crate::View).
///
/// It is expected that most libraries using `editor_core` will have a generic
/// implementation of this trait for their widget type.
pub trait ViewElement {
    /// The reference form of this `Element` for editing.
    ///
    /// This is provided to [`View::rebuild`](crate::View::rebuild) and
    /// [`View::teardown`](crate::View::teardown).
    /// This enables greater flexibility in the use of the traits, such as
    /// for reference types which contain access to parent state.
    type Mut<'a>;
}

/// This alias is syntax sugar to avoid the elaborate expansion of
/// `<Self::Element as ViewElement>::Mut<'el>` in the View trait when implementing it (e.g. via rust-analyzer)
pub type Mut<'el, E> = <E as ViewElement>::Mut<'el>;
