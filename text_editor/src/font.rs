// Copyright 2026 the Text Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Abstract fonts, and how they map onto platform fonts.

#![allow(missing_docs, reason = "Names are self-explanatory.")]

use std::borrow::Cow;

use editor_core::Resource;
use parley::style::FontWeight;

use crate::{PlatformFont, PlatformTextStyle, Typography};

/// A semantic, platform-independent text style.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextStyle {
    LargeTitle,
    Title,
    Headline,
    Subheadline,
    Body,
    Callout,
    Footnote,
    Caption,
}

impl TextStyle {
    /// Every style, paired with the [`Font`] which represents it.
    ///
    /// Reverse lookups from a [`Font`] take the first matching entry.
    pub const ALL_VALUES: [(Self, Font); 8] = [
        (Self::LargeTitle, Font::LARGE_TITLE),
        (Self::Title, Font::TITLE),
        (Self::Headline, Font::HEADLINE),
        (Self::Subheadline, Font::SUBHEADLINE),
        (Self::Body, Font::BODY),
        (Self::Callout, Font::CALLOUT),
        (Self::Footnote, Font::FOOTNOTE),
        (Self::Caption, Font::CAPTION),
    ];

    /// The platform style this style is rendered with.
    pub const fn platform_style(self) -> PlatformTextStyle {
        match self {
            Self::LargeTitle => PlatformTextStyle::LargeTitle,
            Self::Title => PlatformTextStyle::Title1,
            Self::Headline => PlatformTextStyle::Headline,
            Self::Subheadline => PlatformTextStyle::Subheadline,
            Self::Body => PlatformTextStyle::Body,
            Self::Callout => PlatformTextStyle::Callout,
            Self::Footnote => PlatformTextStyle::Footnote,
            Self::Caption => PlatformTextStyle::Caption1,
        }
    }
}

/// An abstract font, provided to a subtree through the environment.
///
/// See [`font`](crate::view::font) for how to set the font of a [`TextEditor`](crate::view::TextEditor).
#[derive(Clone, Debug, PartialEq)]
pub enum Font {
    /// The platform font for a semantic style.
    Semantic(TextStyle),
    /// The system font at a fixed size.
    System {
        /// Size in points.
        size: f32,
        weight: FontWeight,
    },
    /// A named font family at a fixed size.
    Custom {
        family: Cow<'static, str>,
        /// Size in points.
        size: f32,
    },
}

impl Font {
    pub const LARGE_TITLE: Self = Self::Semantic(TextStyle::LargeTitle);
    pub const TITLE: Self = Self::Semantic(TextStyle::Title);
    pub const HEADLINE: Self = Self::Semantic(TextStyle::Headline);
    pub const SUBHEADLINE: Self = Self::Semantic(TextStyle::Subheadline);
    pub const BODY: Self = Self::Semantic(TextStyle::Body);
    pub const CALLOUT: Self = Self::Semantic(TextStyle::Callout);
    pub const FOOTNOTE: Self = Self::Semantic(TextStyle::Footnote);
    pub const CAPTION: Self = Self::Semantic(TextStyle::Caption);

    /// The system font at `size` points.
    pub fn system(size: f32, weight: FontWeight) -> Self {
        Self::System { size, weight }
    }

    /// The font family named `family` at `size` points.
    pub fn custom(family: impl Into<Cow<'static, str>>, size: f32) -> Self {
        Self::Custom {
            family: family.into(),
            size,
        }
    }

    /// The text style this font represents, or [`TextStyle::Body`] if there is none.
    pub fn text_style(&self) -> TextStyle {
        self.text_style_or(TextStyle::Body)
    }

    /// The text style this font represents, or `fallback` if there is none.
    ///
    /// Fixed-size and custom fonts never represent a text style.
    pub fn text_style_or(&self, fallback: TextStyle) -> TextStyle {
        TextStyle::ALL_VALUES
            .iter()
            .find(|(_, font)| font == self)
            .map_or(fallback, |(style, _)| *style)
    }

    /// The concrete font for this font, given the current typography settings.
    ///
    /// This is recomputed on every call, as the result depends on `typography`.
    pub fn resolve(&self, typography: &Typography) -> PlatformFont {
        typography.preferred_font(self.text_style().platform_style())
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::BODY
    }
}

impl Resource for Font {}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::ContentSizeCategory;

    #[test]
    fn every_style_round_trips_through_its_font() {
        let typography = Typography::default();
        for (style, font) in TextStyle::ALL_VALUES {
            assert_eq!(font.text_style(), style);
            let resolved = font.resolve(&typography);
            assert_eq!(resolved.text_style, style.platform_style());
            assert_eq!(
                resolved,
                typography.preferred_font(style.platform_style()),
                "{style:?} should resolve to the preferred font for its platform style"
            );
        }
    }

    #[test]
    fn unrecognised_fonts_resolve_like_body() {
        let typography = Typography::new(ContentSizeCategory::ExtraLarge);
        let body = Font::BODY.resolve(&typography);
        for font in [
            Font::custom("Fira Code", 14.),
            Font::system(17., FontWeight::BOLD),
        ] {
            assert_matches!(font.text_style(), TextStyle::Body);
            assert_eq!(font.resolve(&typography), body);
        }
    }

    #[test]
    fn fallback_is_configurable() {
        let font = Font::custom("Fira Code", 14.);
        assert_eq!(font.text_style_or(TextStyle::Caption), TextStyle::Caption);
        assert_eq!(Font::HEADLINE.text_style_or(TextStyle::Caption), TextStyle::Headline);
    }

    #[test]
    fn styles_map_onto_platform_styles() {
        assert_eq!(TextStyle::Title.platform_style(), PlatformTextStyle::Title1);
        assert_eq!(TextStyle::Caption.platform_style(), PlatformTextStyle::Caption1);
        assert_eq!(TextStyle::Body.platform_style(), PlatformTextStyle::Body);
        assert_eq!(Font::default(), Font::BODY);
    }
}
