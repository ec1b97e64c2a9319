use bevy_ecs::prelude::Component;

/// Marker for monster entities.
///
/// A monster whose traversal finishes while this marker is still attached
/// has escaped past the player, which loses the game. Destruction by a
/// projectile despawns the whole entity first, so the escape path never
/// sees it.
#[derive(Component, Clone, Copy, Debug)]
pub struct Monster;
