//! Game systems.
//!
//! Submodules overview
//! - [`audio`] – background audio thread and the message-queue bridge
//! - [`collision`] – pairwise overlap checks and contact event emission
//! - [`firing`] – fire-tap observer spawning projectiles
//! - [`gamestate`] – pending-transition check and run conditions
//! - [`input`] – poll raylib input, update [`crate::resources::input::InputState`]
//! - [`movement`] – advance traversals and report arrivals
//! - [`render`] – draw world, HUD and debug overlay using raylib
//! - [`spawn`] – periodic monster spawning
//! - [`time`] – update simulation time and delta

pub mod audio;
pub mod collision;
pub mod firing;
pub mod gamestate;
pub mod input;
pub mod movement;
pub mod render;
pub mod spawn;
pub mod time;
