//! The text measurement contract.

use std::sync::Arc;

use marquee_core::Dimensions;

use crate::error::TextResult;
use crate::font::{DEFAULT_ROOT_PX, FontDescriptor};

/// Extents of a piece of text rendered in a particular font, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMeasurement {
    /// Horizontal extent the text occupies.
    pub width: f32,
    /// Tight vertical bounding box of the glyphs actually drawn.
    pub actual_height: f32,
    /// Ascent plus descent of the font itself, independent of the glyphs.
    pub font_height: f32,
}

impl TextMeasurement {
    /// Height used for fitting and partitioning.
    ///
    /// Some rasterizations report a glyph box smaller than the nominal font
    /// box; taking the larger of the two keeps ascenders and descenders from
    /// being clipped.
    pub fn fit_height(&self) -> f32 {
        self.font_height.max(self.actual_height)
    }

    /// `(width, fit_height)` as a box.
    pub fn fit_box(&self) -> Dimensions {
        Dimensions::new(self.width, self.fit_height())
    }
}

/// Reports how large a text renders in a given font.
///
/// Implementations are backed by an off-screen surface and are stateless from
/// the caller's point of view.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextResult<TextMeasurement>;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextResult<TextMeasurement> {
        (**self).measure(text, font)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Arc<T> {
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextResult<TextMeasurement> {
        (**self).measure(text, font)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Box<T> {
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextResult<TextMeasurement> {
        (**self).measure(text, font)
    }
}

/// A deterministic measurer that scales linearly with font size.
///
/// Every character is `advance_em` wide, glyphs are `glyph_em` tall and the
/// font box is `font_em` tall, all relative to the font size in pixels. Useful
/// for headless hosts and for tests that need exact numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicMeasurer {
    pub root_px: f32,
    pub advance_em: f32,
    pub glyph_em: f32,
    pub font_em: f32,
}

impl HeuristicMeasurer {
    pub fn new() -> Self {
        Self {
            root_px: DEFAULT_ROOT_PX,
            advance_em: 0.6,
            glyph_em: 0.72,
            font_em: 1.15,
        }
    }

    pub fn root_px(mut self, root_px: f32) -> Self {
        self.root_px = root_px;
        self
    }

    pub fn advance_em(mut self, advance_em: f32) -> Self {
        self.advance_em = advance_em;
        self
    }

    pub fn glyph_em(mut self, glyph_em: f32) -> Self {
        self.glyph_em = glyph_em;
        self
    }

    pub fn font_em(mut self, font_em: f32) -> Self {
        self.font_em = font_em;
        self
    }
}

impl Default for HeuristicMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for HeuristicMeasurer {
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextResult<TextMeasurement> {
        let px = font.size.to_px(self.root_px);
        let chars = text.chars().count() as f32;
        let actual_height = if text.trim().is_empty() {
            0.0
        } else {
            self.glyph_em * px
        };
        Ok(TextMeasurement {
            width: self.advance_em * px * chars,
            actual_height,
            font_height: self.font_em * px,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontSize;

    #[test]
    fn test_fit_height_takes_larger_box() {
        let tall_glyphs = TextMeasurement {
            width: 10.0,
            actual_height: 30.0,
            font_height: 20.0,
        };
        assert_eq!(tall_glyphs.fit_height(), 30.0);

        let short_glyphs = TextMeasurement {
            width: 10.0,
            actual_height: 12.0,
            font_height: 20.0,
        };
        assert_eq!(short_glyphs.fit_box(), Dimensions::new(10.0, 20.0));
    }

    #[test]
    fn test_heuristic_scales_with_size() {
        let measurer = HeuristicMeasurer::new();
        let font = FontDescriptor::new("normal", FontSize::rem(1.0), "serif");
        let small = measurer.measure("Jonas", &font).unwrap();
        let large = measurer
            .measure("Jonas", &font.with_size(FontSize::rem(2.0)))
            .unwrap();

        assert!((small.width - 0.6 * 16.0 * 5.0).abs() < 1e-4);
        assert!((large.width - 2.0 * small.width).abs() < 1e-4);
        assert!((large.font_height - 2.0 * small.font_height).abs() < 1e-4);
    }

    #[test]
    fn test_heuristic_blank_text_has_no_glyph_height() {
        let measurer = HeuristicMeasurer::new();
        let m = measurer.measure("   ", &FontDescriptor::default()).unwrap();
        assert_eq!(m.actual_height, 0.0);
        assert!(m.font_height > 0.0);
    }
}
