use crate::coords::Vec2;

/// Keyboard key identifier.
///
/// Only the keys the editing widgets react to are named; everything else maps
/// to `Unknown` with a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Delete,
    Home,
    End,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Letters used by editing shortcuts
    A,
    C,
    V,
    X,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

/// Pressed/released state shared by keys and mouse buttons.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Modifier keys state.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Platform-agnostic input events, positions in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    PointerMoved {
        pos: Vec2,
    },

    /// Button transition. `pos` is the pointer position at the time of the event.
    PointerButton {
        button: MouseButton,
        state: ButtonState,
        pos: Vec2,
    },

    /// Wheel delta in lines (positive = away from the user).
    MouseWheel {
        delta: Vec2,
    },

    Key {
        key: Key,
        state: ButtonState,
        modifiers: Modifiers,
    },

    /// Committed text input.
    Text(String),
}
