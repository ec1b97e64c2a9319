//! Monster spawn system.
//!
//! Runs while playing. Every spawn interval, one monster appears just off
//! the right edge at a random height and starts a straight traversal to
//! just off the left edge over a random duration. The vertical band keeps
//! the whole sprite on screen; the traversal carries the loss semantics via
//! the arrival observer.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::category::CollisionFilter;
use crate::components::mapposition::MapPosition;
use crate::components::monster::Monster;
use crate::components::moveto::MoveTo;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::game::{MONSTER_HEIGHT, MONSTER_TEX, MONSTER_WIDTH};
use crate::resources::gameconfig::GameConfig;
use crate::resources::rng::GameRng;
use crate::resources::screensize::ScreenSize;
use crate::resources::spawner::MonsterSpawner;
use crate::resources::worldtime::WorldTime;

/// Spawn monsters on the fixed period of the [`MonsterSpawner`] clock.
pub fn spawn_monsters(
    mut commands: Commands,
    time: Res<WorldTime>,
    mut spawner: ResMut<MonsterSpawner>,
    mut rng: ResMut<GameRng>,
    screen: Res<ScreenSize>,
    config: Res<GameConfig>,
) {
    let due = spawner.tick(time.delta);
    for _ in 0..due {
        let half_w = MONSTER_WIDTH * 0.5;
        let half_h = MONSTER_HEIGHT * 0.5;

        // Fully on screen vertically, fully off screen horizontally.
        let y = rng.range_f32(half_h, screen.height() - half_h);
        let start = MapPosition::new(screen.width() + half_w, y);
        let destination = raylib::prelude::Vector2 { x: -half_w, y };
        let duration = rng.range_f32(config.traversal_min, config.traversal_max);

        debug!("Spawning monster at y={y:.1}, traversal {duration:.2}s");
        commands.spawn((
            Monster,
            start,
            MoveTo::new(start.pos, destination, duration),
            BoxCollider::centered(MONSTER_WIDTH, MONSTER_HEIGHT),
            CollisionFilter::monster(),
            Sprite::centered(MONSTER_TEX, MONSTER_WIDTH, MONSTER_HEIGHT),
            ZIndex(1),
        ));
    }
}
