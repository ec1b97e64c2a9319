//! Traversal-completion event and its observer.
//!
//! The movement system triggers an [`ArrivalEvent`] when a [`MoveTo`]
//! traversal reaches its destination. What arrival means depends on who
//! arrived: a monster reaching the left edge has escaped the player and
//! loses the game; a projectile flying off-screen is simply removed.
//!
//! [`MoveTo`]: crate::components::moveto::MoveTo

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::monster::Monster;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};

/// Event triggered when an entity completes its traversal.
#[derive(Event, Debug, Clone, Copy)]
pub struct ArrivalEvent {
    /// The entity that reached its destination.
    pub entity: Entity,
}

/// Observer deciding the outcome of a finished traversal.
///
/// - If the arriving entity is a monster, an escape happened: request the
///   loss transition (regardless of the current kill count) and despawn it.
/// - Anything else (projectiles) is despawned with no further effect.
/// - An entity already removed by a collision this frame is a silent no-op:
///   first remove wins.
pub fn observe_arrival(
    trigger: On<ArrivalEvent>,
    mut commands: Commands,
    monsters: Query<&Monster>,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
) {
    let entity = trigger.event().entity;

    let escaped = monsters.get(entity).is_ok();

    match commands.get_entity(entity) {
        Ok(mut e) => {
            e.try_despawn();
        }
        Err(_) => {
            // Removed earlier this frame (collision won the race).
            debug!("Stale arrival for {:?}", entity);
            return;
        }
    }

    if escaped && !state.is_game_over() && next_state.is_unchanged() {
        info!("A monster escaped, game lost");
        next_state.set(GameStates::GameOver { won: false });
    }
}
