//! Per-frame input resource.
//!
//! Captures the small set of inputs this game cares about: fire (left mouse
//! button), quit (Escape) and the debug-overlay toggle (F11). The resource
//! is refreshed once per frame by
//! [`update_input_state`](crate::systems::input::update_input_state).

use bevy_ecs::prelude::Resource;
use raylib::prelude::{KeyboardKey, MouseButton, Vector2};

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding: key,
        }
    }
}

/// Mouse fire-button state with the cursor position at press time.
#[derive(Debug, Clone, Copy)]
pub struct FireState {
    /// Whether the button was just pressed this frame.
    pub just_pressed: bool,
    /// Cursor position in screen coordinates.
    pub position: Vector2,
    /// The mouse button bound to firing.
    pub button_binding: MouseButton,
}

/// Resource capturing the per-frame input state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Back/quit action (default: Escape).
    pub action_back: BoolState,
    /// Debug overlay toggle (default: F11).
    pub mode_debug: BoolState,
    /// Fire action (default: left mouse button).
    pub fire: FireState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            fire: FireState {
                just_pressed: false,
                position: Vector2::zero(),
                button_binding: MouseButton::MOUSE_BUTTON_LEFT,
            },
        }
    }
}
