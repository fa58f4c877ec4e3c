// Copyright 2024 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

use editor_core::*;

#[derive(Default)]
pub(crate) struct TestCtx {
    pub environment: Environment,
}

impl ViewContext for TestCtx {
    fn environment(&mut self) -> &mut Environment {
        &mut self.environment
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Accent(pub &'static str);
impl Resource for Accent {}

#[derive(PartialEq, Eq, Debug, Clone)]
pub(crate) enum Operation {
    Build(Option<&'static str>),
    Rebuild(Option<&'static str>),
    Teardown(Option<&'static str>),
}

/// Records every lifecycle call it receives, along with the [`Accent`] visible at the time.
#[derive(Debug, Default)]
pub(crate) struct TestElement {
    pub operations: Vec<Operation>,
}
impl ViewElement for TestElement {
    type Mut<'a> = &'a mut Self;
}

pub(crate) struct AccentView;

fn accent(ctx: &mut TestCtx) -> Option<&'static str> {
    ctx.environment().get::<Accent>().map(|accent| accent.0)
}

impl View<u32, TestCtx> for AccentView {
    type Element = TestElement;
    type ViewState = ();

    fn build(&self, ctx: &mut TestCtx, app_state: &mut u32) -> (Self::Element, Self::ViewState) {
        *app_state += 1;
        (
            TestElement {
                operations: vec![Operation::Build(accent(ctx))],
            },
            (),
        )
    }

    fn rebuild(
        &self,
        _: &Self,
        (): &mut Self::ViewState,
        ctx: &mut TestCtx,
        element: Mut<'_, Self::Element>,
        app_state: &mut u32,
    ) {
        *app_state += 1;
        element.operations.push(Operation::Rebuild(accent(ctx)));
    }

    fn teardown(
        &self,
        (): &mut Self::ViewState,
        ctx: &mut TestCtx,
        element: Mut<'_, Self::Element>,
        _: &mut u32,
    ) {
        element.operations.push(Operation::Teardown(accent(ctx)));
    }
}
