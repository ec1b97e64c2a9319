//! ECS resources made available to systems.
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – window and gameplay tuning loaded from an INI file
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame input state (fire, quit, debug toggle)
//! - `rng` – seedable RNG feeding all gameplay randomness
//! - `score` – destroyed-monster counter
//! - `screensize` – current screen dimensions in pixels
//! - `spawner` – fixed-period monster spawn clock
//! - `systemsstore` – registry of state-enter hook systems by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta

pub mod audio;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod rng;
pub mod score;
pub mod screensize;
pub mod spawner;
pub mod systemsstore;
pub mod texturestore;
pub mod worldtime;
