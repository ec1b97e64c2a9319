//! High-level game state resources.
//!
//! [`GameState`] holds the authoritative current state; [`NextGameState`]
//! holds a requested transition. Systems request transitions by setting the
//! pending value; the observer in
//! [`crate::events::gamestate`] applies it and runs the enter hooks.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the game can be in.
///
/// `GameOver` is terminal for game logic: the only transition accepted out
/// of it is `Quitting`, and repeated `GameOver` requests are swallowed, so
/// the game-over scene is presented exactly once per game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    Setup,
    Playing,
    GameOver {
        won: bool,
    },
    Quitting,
}

/// Representation of a requested next state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::None`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::None,
        }
    }

    /// Read-only access to the current state.
    pub fn get(&self) -> &GameStates {
        &self.current
    }

    /// True once a win or loss has been decided.
    pub fn is_game_over(&self) -> bool {
        matches!(self.current, GameStates::GameOver { .. })
    }

    /// Update the current state immediately.
    ///
    /// Prefer requesting transitions via [`NextGameState`] so enter hooks
    /// run; this is for the transition observer and for tests.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Intent to change to a new game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    /// Get the current transition request.
    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// True when no transition is pending.
    pub fn is_unchanged(&self) -> bool {
        matches!(self.next, NextGameStates::Unchanged)
    }

    /// Request a transition to `next` by marking it as pending.
    /// [`check_pending_state`](crate::systems::gamestate::check_pending_state)
    /// will emit the transition event.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    /// Reset to [`NextGameStates::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}

impl Default for NextGameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_request_round_trip() {
        let mut next = NextGameState::new();
        assert!(next.is_unchanged());
        next.set(GameStates::Playing);
        assert_eq!(
            next.get(),
            &NextGameStates::Pending(GameStates::Playing)
        );
        next.reset();
        assert!(next.is_unchanged());
    }

    #[test]
    fn game_over_is_recognized_for_both_outcomes() {
        let mut state = GameState::new();
        assert!(!state.is_game_over());
        state.set(GameStates::GameOver { won: true });
        assert!(state.is_game_over());
        state.set(GameStates::GameOver { won: false });
        assert!(state.is_game_over());
    }
}
