use std::rc::Rc;

use crate::coords::Rect;
use crate::scene::TextureId;

/// Index of a font face (one font at one pixel size) in a metrics provider.
pub type FontIndex = usize;

/// Placement and atlas location of a single glyph.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GlyphInfo {
    /// Region of the atlas texture holding the glyph bitmap, in texels.
    pub crop: Rect,
    /// Glyph box relative to the pen position on the baseline (+Y down).
    pub bounds: Rect,
    /// Horizontal pen advance after this glyph.
    pub x_advance: f32,
}

/// Vertical metrics of a font face, in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FontInfo {
    /// Distance from the baseline to the top of the line box.
    pub ascent: f32,
    /// Distance below the baseline, expressed as a non-positive value.
    pub descent: f32,
    pub line_gap: f32,
}

/// Glyph and font metrics consumed by the text layout code.
///
/// Queries are infallible: providers decide how to answer for characters they
/// do not have.
pub trait FontMetrics {
    fn glyph_info(&self, font: FontIndex, ch: char) -> GlyphInfo;

    fn font_info(&self, font: FontIndex) -> FontInfo;

    /// Texture the glyph crops refer to.
    fn texture(&self) -> TextureId;
}

impl<T: FontMetrics + ?Sized> FontMetrics for &T {
    #[inline]
    fn glyph_info(&self, font: FontIndex, ch: char) -> GlyphInfo {
        (**self).glyph_info(font, ch)
    }

    #[inline]
    fn font_info(&self, font: FontIndex) -> FontInfo {
        (**self).font_info(font)
    }

    #[inline]
    fn texture(&self) -> TextureId {
        (**self).texture()
    }
}

impl<T: FontMetrics + ?Sized> FontMetrics for Rc<T> {
    #[inline]
    fn glyph_info(&self, font: FontIndex, ch: char) -> GlyphInfo {
        (**self).glyph_info(font, ch)
    }

    #[inline]
    fn font_info(&self, font: FontIndex) -> FontInfo {
        (**self).font_info(font)
    }

    #[inline]
    fn texture(&self) -> TextureId {
        (**self).texture()
    }
}
