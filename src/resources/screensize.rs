//! Screen size resource.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels. Spawn and render logic read this to place
/// entities relative to the edges.
#[derive(Resource, Clone, Copy)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn width(&self) -> f32 {
        self.w as f32
    }

    pub fn height(&self) -> f32 {
        self.h as f32
    }
}
