use bevy_ecs::prelude::Component;

/// Marker for the player entity. Exactly one exists while playing.
#[derive(Component, Clone, Copy, Debug)]
pub struct Player;
