//! Game state transition event and observer.
//!
//! Systems request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and invokes the appropriate enter hooks stored in
//! [`crate::resources::systemsstore::SystemsStore`].
//!
//! This decouples the intent to change state from the mechanics of running
//! setup/teardown systems and avoids borrowing conflicts.

use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
///
/// Emitting this event causes [`observe_gamestate_change_event`] to read
/// [`NextGameState`]. If it contains [`Pending`], the observer updates the
/// authoritative [`GameState`], runs the enter hook, and clears the pending
/// value; if it is [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - `GameOver` is terminal: once reached, the only accepted follow-up is
///   `Quitting`. Repeated game-over requests (a near-simultaneous kill and
///   escape, a straggler contact) are cleared and dropped, so the game-over
///   scene is presented exactly once.
/// - Otherwise copies the new value into [`GameState`], runs the exit hook
///   for the old state and the enter hook for the new one, and resets
///   [`NextGameState`].
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("GameStateChangedEvent triggered");

    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!("GameState/NextGameState resource missing in transition observer");
        return;
    };

    let next_state_value = next_game_state.get().clone();
    match next_state_value {
        Pending(new_state) => {
            let old_state = game_state.get().clone();
            if matches!(old_state, GameStates::GameOver { .. })
                && !matches!(new_state, GameStates::Quitting)
            {
                debug!(
                    "Ignoring transition to {:?}: game is already over",
                    new_state
                );
                next_game_state.reset();
                return;
            }
            info!("Transitioning from {:?} to {:?}", old_state, new_state);
            game_state.set(new_state.clone());
            next_game_state.reset();
            on_state_exit(&old_state);
            on_state_enter(&new_state, &mut commands, &systems_store);
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

/// Internal: run the state-specific "enter" hook for the given state.
fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let key = match state {
        GameStates::None => {
            debug!("Entered None state");
            return;
        }
        GameStates::Setup => "setup",
        GameStates::Playing => "enter_play",
        GameStates::GameOver { .. } => "game_over",
        GameStates::Quitting => "quit_game",
    };
    match systems_store.get(key) {
        Some(id) => commands.run_system(*id),
        None => warn!("No '{}' system registered in SystemsStore", key),
    }
}

/// Internal: exit hooks are log-only for now.
fn on_state_exit(state: &GameStates) {
    debug!("Exited {:?} state", state);
}
