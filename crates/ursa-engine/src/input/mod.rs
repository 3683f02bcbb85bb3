//! Input subsystem.
//!
//! Public API is platform-agnostic. `platform::winit` translates window system
//! events into `InputEvent`s; consumers such as the gui context receive only
//! these types.

pub mod platform;
mod state;
mod types;

pub use state::InputState;
pub use types::{
    ButtonState,
    InputEvent,
    Key,
    Modifiers,
    MouseButton,
};
