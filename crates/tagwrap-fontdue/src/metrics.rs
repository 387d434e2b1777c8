use fontdue::Font;
use tagwrap_layout::{FontDescriptor, FontMetrics};

/// Line height as a multiple of font size when the font carries no
/// horizontal line metrics.
const FALLBACK_LINE_HEIGHT_RATIO: f32 = 1.2;

/// Font metrics implementation backed by fontdue's per-glyph metrics.
///
/// Widths are the sum of per-character advance widths at the descriptor's
/// size. Only the size is taken from the descriptor: the family and style
/// are whatever face was loaded, so callers wanting bold measurements load
/// the bold face. Uses `Font::metrics()` rather than `Font::rasterize()` so
/// no bitmaps are generated.
pub struct FontdueFontMetrics<'a> {
    font: &'a Font,
}

impl<'a> FontdueFontMetrics<'a> {
    /// Create a new font metrics provider from a fontdue Font.
    #[must_use]
    pub const fn new(font: &'a Font) -> Self {
        Self { font }
    }

    /// Unrounded advance width of `text`, in pixels.
    #[must_use]
    pub fn advance_width(&self, text: &str, size: f32) -> f32 {
        text.chars()
            .filter(|ch| !ch.is_control())
            .map(|ch| self.font.metrics(ch, size).advance_width)
            .sum()
    }

    /// Unrounded line height at `size`, in pixels.
    #[must_use]
    pub fn line_height(&self, size: f32) -> f32 {
        self.font
            .horizontal_line_metrics(size)
            .map_or(size * FALLBACK_LINE_HEIGHT_RATIO, |m| m.new_line_size)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_pixels(value: f32) -> u32 {
    // Round up so the measured text is never clipped.
    value.ceil().max(0.0) as u32
}

impl FontMetrics for FontdueFontMetrics<'_> {
    fn min_width(&self, text: &str, font: &FontDescriptor) -> u32 {
        to_pixels(self.advance_width(text, font.size))
    }

    fn min_height(&self, _text: &str, font: &FontDescriptor) -> u32 {
        to_pixels(self.line_height(font.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixels_rounds_up() {
        assert_eq!(to_pixels(0.0), 0);
        assert_eq!(to_pixels(10.2), 11);
        assert_eq!(to_pixels(12.0), 12);
        assert_eq!(to_pixels(-3.0), 0);
    }
}
