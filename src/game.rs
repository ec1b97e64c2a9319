//! High-level game setup and scene hooks.
//!
//! The functions here are the state-enter hooks looked up through the
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) by the
//! transition observer: `setup` runs once on entering `Setup`, `enter_play`
//! builds the playing scene, `game_over` tears it down and `quit_game` is
//! the final hook before the main loop exits.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::score::Score;
use crate::resources::screensize::ScreenSize;
use crate::resources::spawner::MonsterSpawner;
use crate::resources::texturestore::TextureStore;

/// Texture keys.
pub const PLAYER_TEX: &str = "player";
pub const MONSTER_TEX: &str = "monster";
pub const PROJECTILE_TEX: &str = "projectile";

/// Sprite sizes in pixels.
pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 40.0;
pub const MONSTER_WIDTH: f32 = 44.0;
pub const MONSTER_HEIGHT: f32 = 36.0;
pub const PROJECTILE_SIZE: f32 = 12.0;

/// Generate the placeholder textures and register them in a
/// [`TextureStore`]. Solid-color stand-ins; no asset files are required to
/// run the game.
pub fn load_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
) -> Result<TextureStore, String> {
    let mut store = TextureStore::new();
    let entries: [(&str, i32, i32, Color); 3] = [
        (PLAYER_TEX, PLAYER_WIDTH as i32, PLAYER_HEIGHT as i32, Color::ROYALBLUE),
        (MONSTER_TEX, MONSTER_WIDTH as i32, MONSTER_HEIGHT as i32, Color::CRIMSON),
        (
            PROJECTILE_TEX,
            PROJECTILE_SIZE as i32,
            PROJECTILE_SIZE as i32,
            Color::DARKGRAY,
        ),
    ];
    for (key, w, h, color) in entries {
        let image = Image::gen_image_color(w, h, color);
        let texture = rl
            .load_texture_from_image(thread, &image)
            .map_err(|e| format!("Failed to create texture '{}': {}", key, e))?;
        store.insert(key, texture);
    }
    Ok(store)
}

/// Enter hook for [`GameStates::Setup`]: one-time scene preparation, then
/// request the playing state.
pub fn setup(mut next_state: ResMut<NextGameState>) {
    info!("Scene ready, starting the game");
    next_state.set(GameStates::Playing);
}

/// Enter hook for [`GameStates::Playing`]: spawn the player, arm the spawn
/// clock and start the soundtrack.
pub fn enter_play(
    mut commands: Commands,
    config: Res<GameConfig>,
    screen: Res<ScreenSize>,
    mut spawner: ResMut<MonsterSpawner>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    spawner.interval = config.spawn_interval;
    spawner.reset();

    // Player sits at 10% of the width, vertically centered.
    commands.spawn((
        Player,
        MapPosition::new(screen.width() * 0.1, screen.height() * 0.5),
        Sprite::centered(PLAYER_TEX, PLAYER_WIDTH, PLAYER_HEIGHT),
        ZIndex(0),
    ));

    audio_cmds.write(AudioCmd::LoadMusic {
        id: "bgm".into(),
        path: "assets/audio/background.ogg".into(),
    });
    audio_cmds.write(AudioCmd::PlayMusic {
        id: "bgm".into(),
        looped: true,
    });
    audio_cmds.write(AudioCmd::LoadFx {
        id: "pew".into(),
        path: "assets/audio/pew.wav".into(),
    });
    audio_cmds.write(AudioCmd::LoadFx {
        id: "hit".into(),
        path: "assets/audio/hit.wav".into(),
    });
}

/// Enter hook for [`GameStates::GameOver`]: replace the playing scene with
/// the game-over screen. The banner itself is drawn by the render pass from
/// the authoritative state; this hook clears the stage and reports the
/// outcome.
pub fn game_over(
    mut commands: Commands,
    state: Res<GameState>,
    score: Res<Score>,
    entities: Query<Entity, Without<Persistent>>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    if let GameStates::GameOver { won } = state.get() {
        info!(
            "Game over: {} ({} monsters destroyed)",
            if *won { "won" } else { "lost" },
            score.destroyed()
        );
    }
    audio_cmds.write(AudioCmd::StopMusic { id: "bgm".into() });
    for entity in entities.iter() {
        commands.entity(entity).try_despawn();
    }
}

/// Enter hook for [`GameStates::Quitting`]: the main loop observes the
/// state and exits.
pub fn quit_game() {
    info!("Quitting");
}
