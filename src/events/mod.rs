//! Event types and observers used by the game.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events provide a decoupled
//! way for systems to communicate without direct dependencies.
//!
//! Submodules:
//! - [`arrival`] – traversal completion (monster escape, projectile miss)
//! - [`audio`] – commands and replies for the background audio thread
//! - [`contact`] – contact notifications and the kill resolver
//! - [`gamestate`] – state transition notifications for the high-level flow
//! - [`input`] – discrete fire taps
//! - [`switchdebug`] – toggle debug rendering on/off

pub mod arrival;
pub mod audio;
pub mod contact;
pub mod gamestate;
pub mod input;
pub mod switchdebug;
