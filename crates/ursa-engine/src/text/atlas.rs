use std::fmt;
use std::path::Path;

use anyhow::Context;

use crate::coords::Rect;
use crate::scene::TextureId;

use super::metrics::{FontIndex, FontInfo, FontMetrics, GlyphInfo};
use super::packer::ShelfPacker;

/// First and last character rasterized for every face (printable ASCII).
const FIRST_CHAR: char = ' ';
const LAST_CHAR: char = '~';
/// Substitute for characters outside the baked range.
const FALLBACK_CHAR: char = '?';
/// Free texels kept between packed glyphs.
const GLYPH_PADDING: u32 = 1;

/// Error returned by [`FontAtlas`] operations.
#[derive(Debug, Clone, PartialEq)]
pub enum AtlasError {
    /// The font data could not be parsed.
    FontParse(String),
    /// `bake` was called before any font was registered.
    NoFonts,
    /// The glyphs do not fit into a bitmap of the requested size.
    AtlasFull { width: u32, height: u32 },
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtlasError::FontParse(msg) => write!(f, "font parse error: {msg}"),
            AtlasError::NoFonts => write!(f, "no fonts registered before bake"),
            AtlasError::AtlasFull { width, height } => {
                write!(f, "glyphs do not fit into a {width}x{height} atlas")
            }
        }
    }
}

impl std::error::Error for AtlasError {}

struct FontSource {
    font: fontdue::Font,
    sizes: Vec<f32>,
}

struct BakedFace {
    info: FontInfo,
    /// Indexed by `char - FIRST_CHAR`.
    glyphs: Vec<GlyphInfo>,
}

/// Glyph atlas baked from TrueType/OpenType fonts.
///
/// Every registered `(font, size)` pair becomes one [`FontIndex`], numbered in
/// registration order. [`bake`](Self::bake) rasterizes printable ASCII for
/// all faces into a single 8-bit alpha bitmap that the renderer uploads and
/// then announces back through [`set_texture`](Self::set_texture).
pub struct FontAtlas {
    sources: Vec<FontSource>,
    faces: Vec<BakedFace>,
    bitmap: Vec<u8>,
    width: u32,
    height: u32,
    texture: TextureId,
}

impl FontAtlas {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            faces: Vec::new(),
            bitmap: Vec::new(),
            width: 0,
            height: 0,
            texture: TextureId::default(),
        }
    }

    /// Parses a font from raw bytes and registers one face per entry in `sizes`.
    ///
    /// Returns the index of the first new face.
    pub fn add_truetype(&mut self, bytes: &[u8], sizes: &[f32]) -> Result<FontIndex, AtlasError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| AtlasError::FontParse(e.to_string()))?;
        let first = self.font_count();
        self.sources.push(FontSource { font, sizes: sizes.to_vec() });
        Ok(first)
    }

    /// Reads a font file and registers it like [`add_truetype`](Self::add_truetype).
    pub fn add_truetype_file(&mut self, path: impl AsRef<Path>, sizes: &[f32]) -> anyhow::Result<FontIndex> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("reading font file {}", path.display()))?;
        self.add_truetype(&bytes, sizes)
            .with_context(|| format!("loading font {}", path.display()))
    }

    /// Number of faces registered so far.
    pub fn font_count(&self) -> usize {
        self.sources.iter().map(|s| s.sizes.len()).sum()
    }

    /// Rasterizes every registered face into a `width`×`height` alpha bitmap.
    ///
    /// Replaces the result of any previous bake.
    pub fn bake(&mut self, width: u32, height: u32) -> Result<(), AtlasError> {
        if self.font_count() == 0 {
            return Err(AtlasError::NoFonts);
        }

        let mut bitmap = vec![0u8; width as usize * height as usize];
        let mut packer = ShelfPacker::new(width, height, GLYPH_PADDING);
        let mut faces = Vec::with_capacity(self.font_count());

        for source in &self.sources {
            for &size in &source.sizes {
                let info = source
                    .font
                    .horizontal_line_metrics(size)
                    .map(|m| FontInfo { ascent: m.ascent, descent: m.descent, line_gap: m.line_gap })
                    .unwrap_or_default();

                let mut glyphs = Vec::with_capacity(glyph_slot(LAST_CHAR) + 1);
                for ch in FIRST_CHAR..=LAST_CHAR {
                    let (m, coverage) = source.font.rasterize(ch, size);
                    let (w, h) = (m.width as u32, m.height as u32);
                    let (x, y) = packer
                        .alloc(w, h)
                        .ok_or(AtlasError::AtlasFull { width, height })?;

                    for row in 0..m.height {
                        let dst = (y as usize + row) * width as usize + x as usize;
                        bitmap[dst..dst + m.width]
                            .copy_from_slice(&coverage[row * m.width..(row + 1) * m.width]);
                    }

                    glyphs.push(GlyphInfo {
                        crop: Rect::new(x as f32, y as f32, w as f32, h as f32),
                        bounds: Rect::new(
                            m.xmin as f32,
                            -(m.ymin as f32 + m.height as f32),
                            w as f32,
                            h as f32,
                        ),
                        x_advance: m.advance_width,
                    });
                }

                faces.push(BakedFace { info, glyphs });
            }
        }

        log::debug!("baked {} font faces into a {}x{} atlas", faces.len(), width, height);

        self.faces = faces;
        self.bitmap = bitmap;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Baked 8-bit alpha coverage, row-major, `size().0` texels per row.
    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap
    }

    /// Bitmap dimensions of the last bake.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_baked(&self) -> bool {
        !self.faces.is_empty()
    }

    /// Records the id the renderer assigned to the uploaded bitmap.
    pub fn set_texture(&mut self, texture: TextureId) {
        self.texture = texture;
    }

    fn face(&self, font: FontIndex) -> Option<&BakedFace> {
        let face = self.faces.get(font);
        debug_assert!(face.is_some(), "font index {font} out of range ({} faces baked)", self.faces.len());
        face
    }
}

impl Default for FontAtlas {
    fn default() -> Self {
        Self::new()
    }
}

impl FontMetrics for FontAtlas {
    fn glyph_info(&self, font: FontIndex, ch: char) -> GlyphInfo {
        let Some(face) = self.face(font) else {
            return GlyphInfo::default();
        };
        let ch = if (FIRST_CHAR..=LAST_CHAR).contains(&ch) {
            ch
        } else {
            log::trace!("no glyph for {ch:?}, using {FALLBACK_CHAR:?}");
            FALLBACK_CHAR
        };
        face.glyphs[glyph_slot(ch)]
    }

    fn font_info(&self, font: FontIndex) -> FontInfo {
        self.face(font).map(|f| f.info).unwrap_or_default()
    }

    fn texture(&self) -> TextureId {
        self.texture
    }
}

/// Position of `ch` in a face's glyph table. `ch` must be in the baked range.
fn glyph_slot(ch: char) -> usize {
    ch as usize - FIRST_CHAR as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let mut atlas = FontAtlas::new();
        let err = atlas.add_truetype(b"definitely not a font", &[18.0]).unwrap_err();
        assert!(matches!(err, AtlasError::FontParse(_)));
        assert_eq!(atlas.font_count(), 0);
    }

    #[test]
    fn bake_without_fonts_is_an_error() {
        let mut atlas = FontAtlas::new();
        assert_eq!(atlas.bake(64, 64), Err(AtlasError::NoFonts));
        assert!(!atlas.is_baked());
    }

    #[test]
    fn missing_font_file_reports_path() {
        let mut atlas = FontAtlas::new();
        let err = atlas.add_truetype_file("/nonexistent/ursa-test.ttf", &[12.0]).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/ursa-test.ttf"));
    }

    #[test]
    fn glyph_slots_cover_printable_ascii() {
        assert_eq!(glyph_slot(' '), 0);
        assert_eq!(glyph_slot('~'), 94);
        assert_eq!(glyph_slot(FALLBACK_CHAR), '?' as usize - 32);
    }

    #[test]
    fn texture_id_is_settable() {
        let mut atlas = FontAtlas::new();
        atlas.set_texture(TextureId(7));
        assert_eq!(atlas.texture(), TextureId(7));
    }

    #[test]
    fn error_messages_are_readable() {
        let msg = AtlasError::AtlasFull { width: 64, height: 32 }.to_string();
        assert_eq!(msg, "glyphs do not fit into a 64x32 atlas");
    }
}
