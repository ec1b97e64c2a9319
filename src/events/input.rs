//! Fire input event.
//!
//! Triggered by the input system for every discrete fire "tap". Carries the
//! tap point in screen coordinates; the observer in
//! [`crate::systems::firing`] decides whether a projectile comes out of it.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

/// Event emitted when the fire button is pressed.
#[derive(Event, Debug, Clone, Copy)]
pub struct FireEvent {
    /// The tap point in screen coordinates.
    pub at: Vector2,
}
