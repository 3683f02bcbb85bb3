//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in paint order
//! - describe textured quads as `(rect, crop, color)` triples against one texture
//! - expand composite primitives (nine-patch) into plain quads

mod cmd;
mod list;
mod ninepatch;

pub use cmd::{DrawCmd, Quad, Texture, TextureId};
pub use list::DrawList;
pub use ninepatch::ninepatch_quads;
