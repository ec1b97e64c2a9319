//! Render pass.
//!
//! Draws inside raylib's drawing scope and queries the ECS world directly:
//! sprites sorted by z-index, the HUD kill counter while playing, the
//! game-over message once the game is decided, and an optional debug
//! overlay (collider boxes, position crosses, entity count) gated on the
//! [`DebugMode`](crate::resources::debugmode::DebugMode) resource.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::debugmode::DebugMode;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::score::Score;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

const HUD_FONT_SIZE: i32 = 20;
const BANNER_FONT_SIZE: i32 = 40;

/// Draw the world for one frame.
pub fn render_pass(world: &mut World, d: &mut RaylibDrawHandle) {
    d.clear_background(Color::RAYWHITE);

    let screen = *world.resource::<ScreenSize>();

    // Collect (sprite, position, z), sort by z, then draw.
    let mut to_draw: Vec<(Sprite, MapPosition, ZIndex)> = {
        let mut q = world.query::<(&Sprite, &MapPosition, &ZIndex)>();
        q.iter(world).map(|(s, p, z)| (s.clone(), *p, *z)).collect()
    };
    to_draw.sort_by_key(|(_, _, z)| *z);

    let textures = world.resource::<TextureStore>();
    for (sprite, position, _z) in to_draw.iter() {
        if let Some(tex) = textures.get(&sprite.tex_key) {
            let src = Rectangle {
                x: 0.0,
                y: 0.0,
                width: tex.width as f32,
                height: tex.height as f32,
            };
            // Destination places the sprite so that MapPosition is the pivot.
            let dest = Rectangle {
                x: position.pos.x,
                y: position.pos.y,
                width: sprite.width,
                height: sprite.height,
            };
            d.draw_texture_pro(tex, src, dest, sprite.origin, 0.0, Color::WHITE);
        }
    }

    match world.resource::<GameState>().get() {
        GameStates::Playing => {
            let destroyed = world.resource::<Score>().destroyed();
            let text = format!("Kills: {}", destroyed);
            d.draw_text(&text, 10, 10, HUD_FONT_SIZE, Color::DARKGRAY);
        }
        GameStates::GameOver { won } => {
            let (text, color) = if *won {
                ("You win!", Color::DARKGREEN)
            } else {
                ("You lose...", Color::MAROON)
            };
            // Rough centering for the default font.
            let x = screen.w / 2 - text.len() as i32 * BANNER_FONT_SIZE / 4;
            let y = screen.h / 2 - BANNER_FONT_SIZE / 2;
            d.draw_text(text, x, y, BANNER_FONT_SIZE, color);

            let destroyed = world.resource::<Score>().destroyed();
            let tally = format!("Monsters destroyed: {}", destroyed);
            d.draw_text(
                &tally,
                screen.w / 2 - tally.len() as i32 * HUD_FONT_SIZE / 4,
                y + BANNER_FONT_SIZE + 10,
                HUD_FONT_SIZE,
                Color::DARKGRAY,
            );
        }
        _ => {}
    }

    if world.contains_resource::<DebugMode>() {
        render_debug_overlay(world, d);
    }
}

/// Collider boxes, position crosses and counters. F11 toggles this.
fn render_debug_overlay(world: &mut World, d: &mut RaylibDrawHandle) {
    let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
    for (collider, position) in colliders.iter(world) {
        let (x, y, w, h) = collider.get_aabb(position.pos);
        d.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
    }

    let mut positions = world.query::<&MapPosition>();
    for position in positions.iter(world) {
        let (x, y) = (position.pos.x as i32, position.pos.y as i32);
        d.draw_line(x - 5, y, x + 5, y, Color::GREEN);
        d.draw_line(x, y - 5, x, y + 5, Color::GREEN);
    }

    let entity_count = world.entities().count_spawned();
    let fps = d.get_fps();
    let text = format!("DEBUG | FPS: {} | Entities: {}", fps, entity_count);
    d.draw_text(&text, 10, 40, 10, Color::BLACK);
}
