use crate::coords::{ColorRgba, Rect};

use super::{ninepatch_quads, DrawCmd, Quad, Texture, TextureId};

/// Recorded draw stream for a frame.
///
/// Commands are kept in insertion order, which is also paint order: later
/// commands draw on top of earlier ones.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns commands in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of quads across all textured batches.
    pub fn quad_count(&self) -> usize {
        self.items
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::Rect { .. } => 0,
                DrawCmd::Quads { quads, .. } => quads.len(),
            })
            .sum()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Records a solid rectangle.
    #[inline]
    pub fn push_solid_rect(&mut self, rect: Rect, color: ColorRgba) {
        self.push(DrawCmd::Rect { rect, color });
    }

    /// Records a batch of quads sampling `texture`. Empty batches are skipped.
    pub fn push_quads(&mut self, texture: TextureId, quads: Vec<Quad>) {
        if quads.is_empty() {
            return;
        }
        self.push(DrawCmd::Quads { texture, quads });
    }

    /// Records a single textured rectangle sampling `crop` from `texture`.
    pub fn push_textured_rect(&mut self, texture: TextureId, rect: Rect, crop: Rect, color: ColorRgba) {
        self.push_quads(texture, vec![Quad::new(rect, crop, color)]);
    }

    /// Records `texture` stretched as a nine-patch over `rect`.
    pub fn push_ninepatch(&mut self, texture: Texture, rect: Rect, margin: f32, color: ColorRgba) {
        self.push_quads(texture.id, ninepatch_quads(texture, rect, margin, color));
    }
}
