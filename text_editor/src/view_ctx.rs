// Copyright 2026 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

use editor_core::{Environment, ViewContext, ViewElement};

use crate::Typography;

/// A native widget, as the element of a view.
#[derive(Debug)]
pub struct Pod<W> {
    /// The widget itself.
    pub widget: W,
}

impl<W> Pod<W> {
    /// Wrap `widget` so it can be returned from [`View::build`](editor_core::View::build).
    pub fn new(widget: W) -> Self {
        Self { widget }
    }
}

impl<W: 'static> ViewElement for Pod<W> {
    type Mut<'a> = &'a mut W;
}

/// The context given to every view in this crate.
///
/// It carries the ambient [`Environment`] and the platform's [`Typography`].
#[derive(Debug, Default)]
pub struct ViewCtx {
    pub(crate) environment: Environment,
    pub(crate) typography: Typography,
}

impl ViewCtx {
    /// A context with an empty environment.
    pub fn new(typography: Typography) -> Self {
        Self {
            environment: Environment::new(),
            typography,
        }
    }

    /// The typography service used to resolve fonts.
    pub fn typography(&self) -> &Typography {
        &self.typography
    }

    /// Replace the typography service, e.g. after the content size category changed.
    pub fn set_typography(&mut self, typography: Typography) {
        self.typography = typography;
    }
}

impl ViewContext for ViewCtx {
    fn environment(&mut self) -> &mut Environment {
        &mut self.environment
    }
}
