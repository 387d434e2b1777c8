//! Font descriptors and the text measurement interface.
//!
//! The engine never computes glyph metrics itself. Callers inject a
//! [`FontMetrics`] implementation; the engine only ever hands it plain,
//! markup-stripped text.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The face variant of a font.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    /// Upright, normal weight.
    #[default]
    Regular,
    /// Upright, bold weight.
    Bold,
    /// Slanted, normal weight.
    Italic,
    /// Slanted, bold weight.
    BoldItalic,
}

impl FontStyle {
    /// Returns true for the slanted variants.
    #[must_use]
    pub const fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }

    /// Returns true for the bold variants.
    #[must_use]
    pub const fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }
}

/// Identifies the font text is measured in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Family name, e.g. `"Segoe UI"`.
    pub family: String,
    /// Font size in pixels.
    pub size: f32,
    /// Face variant.
    #[serde(default)]
    pub style: FontStyle,
}

impl FontDescriptor {
    /// Family of the default small font.
    pub const DEFAULT_FAMILY: &'static str = "Segoe UI";

    /// Size of the default small font, in pixels.
    pub const DEFAULT_SMALL_SIZE: f32 = 20.0;

    /// Create a descriptor.
    #[must_use]
    pub fn new(family: impl Into<String>, size: f32, style: FontStyle) -> Self {
        Self {
            family: family.into(),
            size,
            style,
        }
    }

    /// The font used when a caller does not name one.
    #[must_use]
    pub fn default_small() -> Self {
        Self::new(
            Self::DEFAULT_FAMILY,
            Self::DEFAULT_SMALL_SIZE,
            FontStyle::Regular,
        )
    }

    /// Copy of this descriptor at a different size.
    #[must_use]
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::default_small()
    }
}

/// Text measurement interface consumed by the line breaker.
///
/// Implementors must be safe to share between threads: many labels may
/// recompute their bounds concurrently against the same loaded font, and
/// font metrics are immutable once the font is loaded.
pub trait FontMetrics: Send + Sync {
    /// Rendered width, in pixels, of a plain (markup-free) string.
    fn min_width(&self, text: &str, font: &FontDescriptor) -> u32;

    /// Height, in pixels, of one line of text in this font.
    ///
    /// The engine treats the result as a per-font constant and multiplies
    /// it by the number of lines.
    fn min_height(&self, text: &str, font: &FontDescriptor) -> u32;
}

/// Approximate font metrics using fixed ratios.
///
/// Without access to actual font data, the average advance width of Latin
/// glyphs in a proportional font is approximately 0.6× the font size, and a
/// line is 1.2× the font size tall.
///
/// This is used as a fallback when no font is available, and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateFontMetrics;

impl ApproximateFontMetrics {
    const CHAR_WIDTH_RATIO: f32 = 0.6;
    const LINE_HEIGHT_RATIO: f32 = 1.2;
}

impl FontMetrics for ApproximateFontMetrics {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn min_width(&self, text: &str, font: &FontDescriptor) -> u32 {
        let glyphs = text.chars().filter(|c| !c.is_control()).count();
        (glyphs as f32 * font.size * Self::CHAR_WIDTH_RATIO)
            .round()
            .max(0.0) as u32
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn min_height(&self, _text: &str, font: &FontDescriptor) -> u32 {
        (font.size * Self::LINE_HEIGHT_RATIO).round().max(0.0) as u32
    }
}
