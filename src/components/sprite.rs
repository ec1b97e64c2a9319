use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// 2D sprite identified by a texture key, with its size in world units.
/// The origin is the pivot (in pixels, relative to the texture's top-left)
/// used for placement when rendering; all sprites here pivot on their
/// center so that `MapPosition` is the sprite center.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub origin: Vector2,
}

impl Sprite {
    /// Sprite of the given size, pivoting on its center.
    pub fn centered(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Sprite {
            tex_key: tex_key.into(),
            width,
            height,
            origin: Vector2 {
                x: width * 0.5,
                y: height * 0.5,
            },
        }
    }
}
