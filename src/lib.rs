//! Monster Lane: a small 2D shooter built on a [`bevy_ecs`] world rendered
//! with [`raylib`]. Monsters march from the right edge to the left; the
//! player fires projectiles at the mouse cursor and wins after shooting
//! down enough of them, or loses when a monster slips past.
//!
//! Modules:
//! - [`components`]: ECS components (positions, colliders, markers, ...).
//! - [`events`]: events, observers and audio messages.
//! - [`game`]: scene hooks and game constants.
//! - [`resources`]: ECS resources (state machine, config, score, ...).
//! - [`systems`]: the per-frame systems wired into the schedule.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
