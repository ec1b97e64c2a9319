//! State machine integration tests: pending transitions, enter hooks and
//! the terminal game-over behavior, exercised through the transition
//! observer with instrumented hook systems.

use std::sync::{Arc, Mutex};

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use monsterlane::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use monsterlane::resources::gamestate::{GameState, GameStates, NextGameState};
use monsterlane::resources::systemsstore::SystemsStore;
use monsterlane::systems::gamestate::check_pending_state;

/// World with the transition observer and a SystemsStore whose hooks append
/// their key to the shared log.
fn make_world(log: Arc<Mutex<Vec<&'static str>>>) -> World {
    let mut world = World::new();
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());

    let mut store = SystemsStore::new();
    for key in ["setup", "enter_play", "game_over", "quit_game"] {
        let log = Arc::clone(&log);
        let id = world.register_system(move || {
            log.lock().unwrap().push(key);
        });
        store.insert(key, id);
    }
    world.insert_resource(store);

    world.spawn(Observer::new(observe_gamestate_change_event));
    world.flush();
    world
}

fn tick_pending(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(check_pending_state);
    schedule.run(world);
}

#[test]
fn pending_transition_is_applied_and_hook_runs() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut world = make_world(Arc::clone(&log));

    world
        .resource_mut::<NextGameState>()
        .set(GameStates::Playing);
    tick_pending(&mut world);

    assert_eq!(world.resource::<GameState>().get(), &GameStates::Playing);
    assert!(world.resource::<NextGameState>().is_unchanged());
    assert_eq!(*log.lock().unwrap(), vec!["enter_play"]);
}

#[test]
fn no_pending_transition_is_a_no_op() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut world = make_world(Arc::clone(&log));

    tick_pending(&mut world);

    assert_eq!(world.resource::<GameState>().get(), &GameStates::None);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn setup_then_play_runs_hooks_in_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut world = make_world(Arc::clone(&log));

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {});
    world.flush();
    world
        .resource_mut::<NextGameState>()
        .set(GameStates::Playing);
    world.trigger(GameStateChangedEvent {});
    world.flush();

    assert_eq!(world.resource::<GameState>().get(), &GameStates::Playing);
    assert_eq!(*log.lock().unwrap(), vec!["setup", "enter_play"]);
}

#[test]
fn game_over_is_presented_exactly_once() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut world = make_world(Arc::clone(&log));

    // A win and a loss land in the same frame: the first applied request
    // wins and the second is swallowed.
    world
        .resource_mut::<NextGameState>()
        .set(GameStates::GameOver { won: true });
    tick_pending(&mut world);
    world
        .resource_mut::<NextGameState>()
        .set(GameStates::GameOver { won: false });
    tick_pending(&mut world);

    assert_eq!(
        world.resource::<GameState>().get(),
        &GameStates::GameOver { won: true }
    );
    assert_eq!(*log.lock().unwrap(), vec!["game_over"]);
}

#[test]
fn game_over_rejects_return_to_playing() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut world = make_world(Arc::clone(&log));

    world
        .resource_mut::<NextGameState>()
        .set(GameStates::GameOver { won: false });
    tick_pending(&mut world);
    world
        .resource_mut::<NextGameState>()
        .set(GameStates::Playing);
    tick_pending(&mut world);

    assert_eq!(
        world.resource::<GameState>().get(),
        &GameStates::GameOver { won: false }
    );
    // The rejected request is cleared, not left pending.
    assert!(world.resource::<NextGameState>().is_unchanged());
}

#[test]
fn game_over_still_allows_quitting() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut world = make_world(Arc::clone(&log));

    world
        .resource_mut::<NextGameState>()
        .set(GameStates::GameOver { won: true });
    tick_pending(&mut world);
    world
        .resource_mut::<NextGameState>()
        .set(GameStates::Quitting);
    tick_pending(&mut world);

    assert_eq!(world.resource::<GameState>().get(), &GameStates::Quitting);
    assert_eq!(*log.lock().unwrap(), vec!["game_over", "quit_game"]);
}
