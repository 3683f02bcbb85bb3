//! Deterministic font metrics for layout tests.

use ursa_engine::coords::Rect;
use ursa_engine::scene::TextureId;
use ursa_engine::text::{FontIndex, FontInfo, FontMetrics, GlyphInfo};

/// Every glyph advances `advance` pixels (whitespace: `space_advance`).
///
/// Font 0: ascent 8, descent -2, gap 1. Font 1: ascent 12, descent -4, gap 2.
/// Glyph crops encode the character code in `crop.origin.x`.
pub(crate) struct FixedMetrics {
    pub advance: f32,
    pub space_advance: f32,
}

impl FixedMetrics {
    pub(crate) fn new() -> Self {
        Self { advance: 10.0, space_advance: 10.0 }
    }

    pub(crate) fn with_space_advance(space_advance: f32) -> Self {
        Self { space_advance, ..Self::new() }
    }
}

impl FontMetrics for FixedMetrics {
    fn glyph_info(&self, font: FontIndex, ch: char) -> GlyphInfo {
        let advance = if ch.is_whitespace() { self.space_advance } else { self.advance };
        let ascent = self.font_info(font).ascent;
        GlyphInfo {
            crop: Rect::new(ch as u32 as f32, 0.0, 1.0, 1.0),
            bounds: Rect::new(0.0, -ascent, advance, ascent),
            x_advance: advance,
        }
    }

    fn font_info(&self, font: FontIndex) -> FontInfo {
        match font {
            0 => FontInfo { ascent: 8.0, descent: -2.0, line_gap: 1.0 },
            _ => FontInfo { ascent: 12.0, descent: -4.0, line_gap: 2.0 },
        }
    }

    fn texture(&self) -> TextureId {
        TextureId(42)
    }
}
