//! Contact event and the monster/projectile kill resolver.
//!
//! The collision system emits [`ContactEvent`] whenever two entities whose
//! contact filters point at each other overlap. The observer in this module
//! interprets the pair: a monster/projectile contact is a kill, everything
//! else is ignored.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::category::{CollisionFilter, PhysicsCategory};
use crate::events::audio::AudioCmd;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::score::Score;

/// Event fired when two entities with compatible contact filters overlap.
///
/// The two fields are the entity IDs of the participants; the physics side
/// makes no ordering guarantee, the resolver normalizes by category bitmask.
#[derive(Event, Debug, Clone, Copy)]
pub struct ContactEvent {
    pub a: Entity,
    pub b: Entity,
}

/// Observer that resolves a contact into a kill.
///
/// Contract
/// - Looks up both entities' filters; if either is already gone (despawned
///   earlier this frame), the whole contact is a silent no-op.
/// - Orders the pair by category bitmask value (lower first) to fold the two
///   symmetric call patterns into one.
/// - If the first carries the `MONSTER` bit and the second the `PROJECTILE`
///   bit: despawn both, count the kill, and request the win transition once
///   the count passes the threshold. Any other combination is ignored.
/// - Once the game is over, stragglers no longer score or transition.
pub fn observe_contact(
    trigger: On<ContactEvent>,
    mut commands: Commands,
    filters: Query<&CollisionFilter>,
    state: Res<GameState>,
    config: Res<GameConfig>,
    mut score: ResMut<Score>,
    mut next_state: ResMut<NextGameState>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    let ev = trigger.event();

    // Either participant may have been removed by an earlier contact or an
    // arrival in this same frame; in that case the contact never happened.
    let (Ok(filter_a), Ok(filter_b)) = (filters.get(ev.a), filters.get(ev.b)) else {
        debug!("Stale contact between {:?} and {:?}", ev.a, ev.b);
        return;
    };

    // Normalize order: lower category bitmask first.
    let ((first, first_cat), (second, second_cat)) = if filter_a.category <= filter_b.category {
        ((ev.a, filter_a.category), (ev.b, filter_b.category))
    } else {
        ((ev.b, filter_b.category), (ev.a, filter_a.category))
    };

    if !(first_cat.intersects(PhysicsCategory::MONSTER)
        && second_cat.intersects(PhysicsCategory::PROJECTILE))
    {
        // Not a monster/projectile pair. Mask configuration should prevent
        // this, but an unexpected pair must not crash.
        debug!(
            "Ignoring contact between categories {:?} and {:?}",
            first_cat, second_cat
        );
        return;
    }

    if let Ok(mut e) = commands.get_entity(first) {
        e.try_despawn();
    }
    if let Ok(mut e) = commands.get_entity(second) {
        e.try_despawn();
    }

    if state.is_game_over() {
        // A terminal transition has already been applied; the score is
        // frozen and no further transition may be requested.
        return;
    }

    let destroyed = score.record_kill();
    debug!("Monster destroyed, count now {}", destroyed);
    audio_cmds.write(AudioCmd::PlayFx { id: "hit".into() });

    if destroyed > config.win_threshold && next_state.is_unchanged() {
        info!("Win threshold passed at {} kills", destroyed);
        next_state.set(GameStates::GameOver { won: true });
    }
}
