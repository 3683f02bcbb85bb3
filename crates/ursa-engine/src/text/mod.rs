//! Font metrics and glyph atlas.
//!
//! Layout code depends only on the [`FontMetrics`] trait. [`FontAtlas`] is the
//! `fontdue`-backed implementation that rasterizes fonts into one alpha bitmap.

mod atlas;
mod metrics;
mod packer;

pub use atlas::{AtlasError, FontAtlas};
pub use metrics::{FontIndex, FontInfo, FontMetrics, GlyphInfo};
