// Copyright 2026 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Shows a text editor with fixed content in the large title font, then types into it.
//!
//! Run with `RUST_LOG=trace` to see every lifecycle step.

use text_editor::view::{EditorView, text_editor};
use text_editor::{Binding, ContentSizeCategory, Font, Host};

fn main() {
    if let Err(err) = text_editor::try_init_tracing() {
        tracing::warn!(%err, "Tracing was already configured");
    }

    let mut host = Host::new((), |_: &mut ()| {
        text_editor(Binding::<(), _>::constant("Hello TextField".to_string()))
            .on_editing_changed(|text| tracing::info!(text, "Preview edited"))
            .font(Font::LARGE_TITLE)
    });
    tracing::info!(text_view = ?host.widget(), "Built preview");

    host.widget_mut().insert_text("!");
    host.set_content_size_category(ContentSizeCategory::ExtraLarge);
    host.rebuild();
    tracing::info!(text_view = ?host.widget(), "Rebuilt preview");

    host.teardown();
}
