// Copyright 2026 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Debug;
use std::rc::Rc;

type Lens<State, T> = Rc<dyn Fn(&mut State) -> &mut T>;

enum Source<State, T> {
    Lens(Lens<State, T>),
    Constant(T),
}

/// Read/write access to a value owned by the app state.
///
/// A binding never owns the value it refers to (unless it is a [constant](Self::constant)).
/// Instead, it is given the app state each time it is read, which is how views
/// always see the current value.
///
/// # Examples
///
/// ```
/// use text_editor::Binding;
///
/// struct Note {
///     body: String,
/// }
///
/// let body = Binding::new(|note: &mut Note| &mut note.body);
/// let mut note = Note { body: "draft".into() };
/// body.set(&mut note, "final".into());
/// assert_eq!(body.get(&mut note), "final");
/// ```
pub struct Binding<State, T> {
    source: Source<State, T>,
}

impl<State, T> Binding<State, T> {
    /// A binding which reads and writes through `access`.
    pub fn new<F>(access: F) -> Self
    where
        F: Fn(&mut State) -> &mut T + 'static,
    {
        Self {
            source: Source::Lens(Rc::new(access)),
        }
    }

    /// A binding which always reads `value`, and ignores writes.
    ///
    /// Useful for previews and read-only content.
    pub fn constant(value: T) -> Self {
        Self {
            source: Source::Constant(value),
        }
    }

    /// Whether this binding was created with [`constant`](Self::constant).
    pub fn is_constant(&self) -> bool {
        matches!(self.source, Source::Constant(_))
    }

    /// Read the current value.
    pub fn get(&self, state: &mut State) -> T
    where
        T: Clone,
    {
        match &self.source {
            Source::Lens(access) => access(state).clone(),
            Source::Constant(value) => value.clone(),
        }
    }

    /// Replace the current value.
    pub fn set(&self, state: &mut State, value: T)
    where
        T: Debug,
    {
        match &self.source {
            Source::Lens(access) => *access(state) = value,
            Source::Constant(_) => {
                tracing::trace!(?value, "Ignoring write to a constant binding");
            }
        }
    }
}

impl<State, T: Clone> Clone for Binding<State, T> {
    fn clone(&self) -> Self {
        let source = match &self.source {
            Source::Lens(access) => Source::Lens(access.clone()),
            Source::Constant(value) => Source::Constant(value.clone()),
        };
        Self { source }
    }
}

impl<State, T: Debug> Debug for Binding<State, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Source::Lens(_) => f.debug_tuple("Binding").field(&"lens").finish(),
            Source::Constant(value) => f.debug_tuple("Binding::constant").field(value).finish(),
        }
    }
}
