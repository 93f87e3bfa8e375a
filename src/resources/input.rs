//! Per-tick keyboard input resource.
//!
//! The frame loop drains the window's event queue once per tick and records
//! key-down events here; systems then react to [`InputState`] instead of
//! touching the windowing library. The advance action defaults to the Down
//! arrow. The remaining arrow keys are bound but unhandled, reserved for
//! movement logic.

use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

/// Discrete key action with its keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key went down during this tick's event drain.
    pub just_pressed: bool,
    /// How many key-down events arrived this tick. Every one counts; two
    /// presses drained in the same tick are two advances.
    pub presses: u32,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key: KeyboardKey) -> Self {
        Self {
            just_pressed: false,
            presses: 0,
            key_binding: key,
        }
    }
}

/// Resource capturing the per-tick key events relevant to the walk demo.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Steps the walk cycle one frame (default: Down arrow).
    pub advance: BoolState,
    // Reserved directions; drained but not acted on.
    pub reserved_up: BoolState,
    pub reserved_left: BoolState,
    pub reserved_right: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            advance: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            reserved_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            reserved_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            reserved_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
        }
    }
}

impl InputState {
    /// Clear the just-pressed flags before a tick's event drain.
    pub fn begin_tick(&mut self) {
        for state in self.states_mut() {
            state.just_pressed = false;
            state.presses = 0;
        }
    }

    /// Record one key-down event. Unbound keys are ignored.
    pub fn note_key_down(&mut self, key: KeyboardKey) {
        for state in self.states_mut() {
            if state.key_binding == key {
                state.just_pressed = true;
                state.presses += 1;
            }
        }
    }

    fn states_mut(&mut self) -> [&mut BoolState; 4] {
        [
            &mut self.advance,
            &mut self.reserved_up,
            &mut self.reserved_left,
            &mut self.reserved_right,
        ]
    }
}
