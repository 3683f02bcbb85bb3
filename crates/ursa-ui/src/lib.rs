//! URSA UI: text layout and an immediate-mode layout-stack GUI on top of `ursa-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ursa_ui::prelude::*;
//!
//! let mut atlas = FontAtlas::new();
//! atlas.add_truetype_file("DejaVuSans.ttf", &[18.0])?;
//! atlas.bake(512, 512)?;
//! let atlas = Rc::new(atlas);
//!
//! let mut gui = Gui::new();
//! gui.set_default_font(atlas.clone(), 0);
//!
//! // In your frame callback:
//! gui.frame_begin(Rect::from_size(800.0, 600.0));
//! if gui.button("Click me") {
//!     log::info!("clicked!");
//! }
//! gui.frame_end();
//! // Hand gui.draw_list() to your renderer.
//! ```
//!
//! [`TextBlock`](text_block::TextBlock) and [`EditLine`](edit_line::EditLine)
//! produce glyph quads for any [`FontMetrics`](ursa_engine::text::FontMetrics)
//! provider and can be used without the gui.

pub mod edit_line;
pub mod gui;
pub mod text_block;

#[cfg(test)]
mod testing;

/// Common imports for application code.
pub mod prelude {
    pub use crate::edit_line::EditLine;
    pub use crate::gui::{Background, Edge, Gui, Style};
    pub use crate::text_block::TextBlock;

    pub use ursa_engine::coords::{ColorRgba, Rect, Vec2};
    pub use ursa_engine::input::InputEvent;
    pub use ursa_engine::scene::{DrawCmd, DrawList, Quad, Texture, TextureId};
    pub use ursa_engine::text::{FontAtlas, FontIndex, FontMetrics};
}
