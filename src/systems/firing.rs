//! Fire observer: turns a tap into a projectile.
//!
//! Mirrors the classic pointing rules: taps behind the player are refused,
//! and the projectile flies through the tap point far past the screen edge
//! so it always leaves the play field if it hits nothing.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::category::CollisionFilter;
use crate::components::mapposition::MapPosition;
use crate::components::moveto::MoveTo;
use crate::components::player::Player;
use crate::components::projectile::Projectile;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::events::input::FireEvent;
use crate::game::{PROJECTILE_SIZE, PROJECTILE_TEX};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates};

/// Observer reacting to [`FireEvent`].
///
/// Contract
/// - No-op unless the game is in the `Playing` state and a player exists.
/// - No-op when the tap is behind the player (offset.x < 0).
/// - No-op when the tap is exactly on the player: a zero-length offset has
///   no direction to normalize.
/// - Otherwise spawns a projectile at the player position travelling toward
///   `player + direction * projectile_reach` over the configured duration,
///   and queues the shot sound effect.
pub fn fire_projectile_observer(
    trigger: On<FireEvent>,
    mut commands: Commands,
    players: Query<&MapPosition, With<Player>>,
    state: Res<GameState>,
    config: Res<GameConfig>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    if !matches!(state.get(), GameStates::Playing) {
        return;
    }
    let Ok(player_position) = players.single() else {
        return;
    };
    let origin = player_position.pos;

    let offset = trigger.event().at - origin;
    if offset.x < 0.0 {
        debug!("Tap behind the player, no shot");
        return;
    }
    let length = (offset.x * offset.x + offset.y * offset.y).sqrt();
    if length <= f32::EPSILON {
        debug!("Tap on the player, no direction to shoot");
        return;
    }

    let direction = Vector2 {
        x: offset.x / length,
        y: offset.y / length,
    };
    let destination = origin + direction.scale_by(config.projectile_reach);

    audio_cmds.write(AudioCmd::PlayFx { id: "pew".into() });
    commands.spawn((
        Projectile,
        MapPosition { pos: origin },
        MoveTo::new(origin, destination, config.projectile_duration),
        BoxCollider::centered(PROJECTILE_SIZE, PROJECTILE_SIZE),
        CollisionFilter::projectile(),
        Sprite::centered(PROJECTILE_TEX, PROJECTILE_SIZE, PROJECTILE_SIZE),
        ZIndex(2),
    ));
}
