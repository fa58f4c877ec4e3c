// Copyright 2026 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! The platform typography service.
//!
//! This is where concrete fonts come from. Abstract [`Font`](crate::Font) descriptors
//! are resolved against a [`Typography`], whose [`ContentSizeCategory`] follows the
//! user's accessibility settings. Results are therefore never cached.

#![allow(missing_docs, reason = "Names are self-explanatory.")]

use parley::style::{FontWeight, GenericFamily};

/// The text styles the platform provides preferred fonts for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlatformTextStyle {
    LargeTitle,
    Title1,
    Title2,
    Title3,
    Headline,
    Subheadline,
    Body,
    Callout,
    Footnote,
    Caption1,
    Caption2,
}

impl PlatformTextStyle {
    /// Point size at [`ContentSizeCategory::Large`].
    pub const fn base_size(self) -> f32 {
        match self {
            Self::LargeTitle => 34.,
            Self::Title1 => 28.,
            Self::Title2 => 22.,
            Self::Title3 => 20.,
            Self::Headline | Self::Body => 17.,
            Self::Callout => 16.,
            Self::Subheadline => 15.,
            Self::Footnote => 13.,
            Self::Caption1 => 12.,
            Self::Caption2 => 11.,
        }
    }

    fn weight(self) -> FontWeight {
        match self {
            Self::Headline => FontWeight::new(600.),
            _ => FontWeight::NORMAL,
        }
    }
}

/// The user's preferred text size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContentSizeCategory {
    ExtraSmall,
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
    ExtraExtraLarge,
    ExtraExtraExtraLarge,
}

impl ContentSizeCategory {
    /// Multiplier applied to [`PlatformTextStyle::base_size`].
    pub const fn scale(self) -> f32 {
        match self {
            Self::ExtraSmall => 0.82,
            Self::Small => 0.88,
            Self::Medium => 0.94,
            Self::Large => 1.,
            Self::ExtraLarge => 1.12,
            Self::ExtraExtraLarge => 1.24,
            Self::ExtraExtraExtraLarge => 1.35,
        }
    }
}

/// A concrete font, as applied to a [`NativeTextView`](crate::widgets::NativeTextView).
#[derive(Clone, Debug, PartialEq)]
pub struct PlatformFont {
    /// The style this font was derived from.
    pub text_style: PlatformTextStyle,
    pub family: GenericFamily,
    /// Size in points.
    pub size: f32,
    pub weight: FontWeight,
}

/// Provides preferred fonts for each [`PlatformTextStyle`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Typography {
    content_size: ContentSizeCategory,
}

impl Typography {
    /// A typography service for the given content size.
    pub fn new(content_size: ContentSizeCategory) -> Self {
        Self { content_size }
    }

    /// The current content size category.
    pub fn content_size(&self) -> ContentSizeCategory {
        self.content_size
    }

    /// Change the content size category, e.g. after the accessibility settings changed.
    pub fn set_content_size(&mut self, content_size: ContentSizeCategory) {
        self.content_size = content_size;
    }

    /// The font the platform prefers for `text_style` at the current content size.
    pub fn preferred_font(&self, text_style: PlatformTextStyle) -> PlatformFont {
        PlatformFont {
            text_style,
            family: GenericFamily::SystemUi,
            size: (text_style.base_size() * self.content_size.scale()).round(),
            weight: text_style.weight(),
        }
    }
}
