//! Monster Lane main entry point.
//!
//! A small 2D shooter written in Rust using:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Monsters march from the right edge towards the left; the player fires
//! projectiles with the mouse and wins after destroying enough of them.
//! A monster reaching the left edge ends the game in a loss.
//!
//! # Main Loop
//!
//! 1. Initialize raylib window, ECS world, resources (textures, audio)
//! 2. Register observers and state-enter hook systems
//! 3. Run the main game loop:
//!    - Poll input, advance spawn clock and movement, detect contacts
//!    - Observers react to contacts, arrivals and state requests
//!    - Render sprites, HUD and the game-over banner
//! 4. Clean up audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::components::persistent::Persistent;
use crate::events::arrival::observe_arrival;
use crate::events::contact::observe_contact;
use crate::events::gamestate::GameStateChangedEvent;
use crate::events::gamestate::observe_gamestate_change_event;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::rng::GameRng;
use crate::resources::score::Score;
use crate::resources::screensize::ScreenSize;
use crate::resources::spawner::MonsterSpawner;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::audio::{
    forward_audio_cmds, log_audio_messages, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use crate::systems::collision::collision_detector;
use crate::systems::firing::fire_projectile_observer;
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::input::update_input_state;
use crate::systems::movement::move_to_system;
use crate::systems::render::render_pass;
use crate::systems::spawn::spawn_monsters;
use crate::systems::time::update_world_time;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Monster Lane
#[derive(Parser)]
#[command(version, about = "Monster Lane: shoot the monsters before they cross the lane")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the spawn RNG (random if omitted).
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Start with the debug overlay enabled (F11 toggles it).
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::new();
    if let Some(path) = cli.config {
        config.config_path = path;
    }
    config.load_from_file().ok(); // ignore errors, use defaults

    let window_width = config.window_width;
    let window_height = config.window_height;

    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Monster Lane")
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit; ESC requests the Quitting state instead
    rl.set_exit_key(None);

    let textures = match game::load_textures(&mut rl, &thread) {
        Ok(store) => store,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize {
        w: window_width as i32,
        h: window_height as i32,
    });
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(Score::default());
    world.insert_resource(MonsterSpawner::default());
    world.insert_resource(match cli.seed {
        Some(seed) => GameRng::with_seed(seed),
        None => GameRng::new(),
    });
    world.insert_resource(textures);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    // Init audio. It must go before the game setup!!
    setup_audio(&mut world);

    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));

    // Game state systems store
    // NOTE: In bevy_ecs 0.18, registered systems are stored as entities.
    // We must mark them as Persistent so they survive scene transitions.
    let mut systems_store = SystemsStore::new();

    let setup_system_id = world.register_system(game::setup);
    world
        .entity_mut(setup_system_id.entity())
        .insert(Persistent);
    systems_store.insert("setup", setup_system_id);

    let enter_play_system_id = world.register_system(game::enter_play);
    world
        .entity_mut(enter_play_system_id.entity())
        .insert(Persistent);
    systems_store.insert("enter_play", enter_play_system_id);

    let game_over_system_id = world.register_system(game::game_over);
    world
        .entity_mut(game_over_system_id.entity())
        .insert(Persistent);
    systems_store.insert("game_over", game_over_system_id);

    let quit_game_system_id = world.register_system(game::quit_game);
    world
        .entity_mut(quit_game_system_id.entity())
        .insert(Persistent);
    systems_store.insert("quit_game", quit_game_system_id);

    world.insert_resource(systems_store);

    world.flush();

    // Set next GameState to Setup
    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Setup);
    }
    world.trigger(GameStateChangedEvent {}); // Call immediately to enter Setup state

    world.spawn((Observer::new(observe_contact), Persistent));
    world.spawn((Observer::new(observe_arrival), Persistent));
    world.spawn((Observer::new(fire_projectile_observer), Persistent));
    world.spawn((Observer::new(switch_debug_observer), Persistent));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(check_pending_state);
    update.add_systems(
        // audio systems must be together
        (
            // First, advance AudioCmd messages and forward them to the audio thread
            update_bevy_audio_cmds,
            forward_audio_cmds,
            // Then, pull audio thread messages and advance them
            poll_audio_messages,
            update_bevy_audio_messages,
        )
            .chain(),
    );
    update.add_systems(log_audio_messages.after(update_bevy_audio_messages));
    update.add_systems(spawn_monsters.run_if(state_is_playing));
    update.add_systems(move_to_system.after(spawn_monsters));
    update.add_systems(
        collision_detector
            .after(move_to_system)
            .run_if(state_is_playing),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !rl.window_should_close() && *world.resource::<GameState>().get() != GameStates::Quitting
    {
        let dt = rl.get_frame_time();
        update_world_time(&mut world, dt);

        update_input_state(&rl, &mut world);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        let mut d = rl.begin_drawing(&thread);
        render_pass(&mut world, &mut d);
    }
    shutdown_audio(&mut world);
}
