//! Marker for entities that survive scene cleanup.

use bevy_ecs::prelude::Component;

/// Entities carrying this component are skipped when the playing scene is
/// torn down on a game-over transition. Used for observers and other
/// world-level entities.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
