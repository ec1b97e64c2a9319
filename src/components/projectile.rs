use bevy_ecs::prelude::Component;

/// Marker for projectile entities. A projectile that reaches the end of its
/// traversal without hitting anything is removed with no further effect.
#[derive(Component, Clone, Copy, Debug)]
pub struct Projectile;
