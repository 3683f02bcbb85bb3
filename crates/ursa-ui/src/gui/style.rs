use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use ursa_engine::coords::{ColorRgba, Rect};
use ursa_engine::scene::{DrawList, Texture};

/// Callback that draws a custom panel background into `rect`.
pub type RenderFn = Rc<dyn Fn(&mut DrawList, Rect)>;

/// How a panel background is painted.
#[derive(Clone)]
pub enum Background {
    SolidColor { color: ColorRgba },
    /// The whole texture stretched over the panel.
    Textured { color: ColorRgba, texture: Texture },
    /// The texture drawn as a nine-patch with a `margin`-pixel border.
    Ninepatch { color: ColorRgba, texture: Texture, margin: f32 },
    Transparent,
    Custom(RenderFn),
}

impl fmt::Debug for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Background::SolidColor { color } => f.debug_struct("SolidColor").field("color", color).finish(),
            Background::Textured { color, texture } => f
                .debug_struct("Textured")
                .field("color", color)
                .field("texture", texture)
                .finish(),
            Background::Ninepatch { color, texture, margin } => f
                .debug_struct("Ninepatch")
                .field("color", color)
                .field("texture", texture)
                .field("margin", margin)
                .finish(),
            Background::Transparent => f.write_str("Transparent"),
            Background::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Named look of a panel: its background and the color of text drawn on it.
#[derive(Debug, Clone)]
pub struct Style {
    pub background: Background,
    pub text_color: ColorRgba,
}

impl Style {
    pub fn solid(color: ColorRgba, text_color: ColorRgba) -> Self {
        Self { background: Background::SolidColor { color }, text_color }
    }

    pub fn custom(render: impl Fn(&mut DrawList, Rect) + 'static, text_color: ColorRgba) -> Self {
        Self { background: Background::Custom(Rc::new(render)), text_color }
    }

    /// Faint black panel with white text.
    pub fn fallback() -> Self {
        Self::solid(ColorRgba::new(0.0, 0.0, 0.0, 0.2), ColorRgba::white())
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Name of the style used when a panel's style is not registered.
pub const DEFAULT_STYLE: &str = "default";

/// Styles by name. Always holds a [`DEFAULT_STYLE`] entry.
#[derive(Debug, Clone, Default)]
pub(crate) struct StyleTable {
    default: Style,
    named: HashMap<String, Style>,
}

impl StyleTable {
    pub(crate) fn set(&mut self, name: String, style: Style) {
        if name == DEFAULT_STYLE {
            self.default = style;
        } else {
            self.named.insert(name, style);
        }
    }

    pub(crate) fn get(&self, name: &str) -> &Style {
        if name == DEFAULT_STYLE {
            return &self.default;
        }
        self.named.get(name).unwrap_or_else(|| {
            log::trace!("style {name:?} not registered, using {DEFAULT_STYLE:?}");
            &self.default
        })
    }
}

impl Background {
    /// Records this background over `rect`.
    pub fn draw(&self, list: &mut DrawList, rect: Rect) {
        match self {
            Background::SolidColor { color } => list.push_solid_rect(rect, *color),
            Background::Textured { color, texture } => {
                list.push_textured_rect(texture.id, rect, texture.bounds(), *color)
            }
            Background::Ninepatch { color, texture, margin } => {
                list.push_ninepatch(*texture, rect, *margin, *color)
            }
            Background::Transparent => {}
            Background::Custom(render) => render(list, rect),
        }
    }
}
