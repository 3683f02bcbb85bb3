use crate::coords::{ColorRgba, Rect};

/// Renderer-side texture identifier.
///
/// The engine never owns GPU textures; the renderer assigns ids when it
/// uploads bitmaps (such as the baked font atlas).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TextureId(pub u32);

/// Texture handle with its pixel dimensions.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Texture {
    pub id: TextureId,
    pub width: f32,
    pub height: f32,
}

impl Texture {
    #[inline]
    pub const fn new(id: TextureId, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }

    /// The full texture as a crop rectangle in texels.
    #[inline]
    pub fn bounds(self) -> Rect {
        Rect::from_size(self.width, self.height)
    }
}

/// One textured quad: destination rect, source crop in texels, tint color.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Quad {
    pub rect: Rect,
    pub crop: Rect,
    pub color: ColorRgba,
}

impl Quad {
    #[inline]
    pub const fn new(rect: Rect, crop: Rect, color: ColorRgba) -> Self {
        Self { rect, crop, color }
    }
}

/// Renderer-agnostic draw command stream.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Untextured filled rectangle.
    Rect { rect: Rect, color: ColorRgba },
    /// Batch of quads sampling one texture, drawn in order.
    Quads { texture: TextureId, quads: Vec<Quad> },
}
