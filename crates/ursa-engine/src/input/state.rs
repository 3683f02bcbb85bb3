use std::collections::HashSet;

use crate::coords::Vec2;

use super::types::{ButtonState, InputEvent, Modifiers, MouseButton};

/// Current input state for a single window.
///
/// Platform translation needs the tracked pointer position and modifiers
/// because button events do not carry them.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    /// Pointer position in logical pixels.
    pub pointer_pos: Vec2,

    /// Currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a translated event to the tracked state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::PointerMoved { pos } => {
                self.pointer_pos = *pos;
            }

            InputEvent::PointerButton { button, state, pos } => {
                self.pointer_pos = *pos;
                match state {
                    ButtonState::Pressed => {
                        self.buttons_down.insert(*button);
                    }
                    ButtonState::Released => {
                        self.buttons_down.remove(button);
                    }
                }
            }

            InputEvent::Key { modifiers, .. } => {
                self.modifiers = *modifiers;
            }

            InputEvent::MouseWheel { .. } | InputEvent::Text(_) => {}
        }
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}
