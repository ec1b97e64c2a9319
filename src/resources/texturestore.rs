//! Loaded textures keyed by string IDs.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use std::collections::HashMap;

/// Texture registry filled once at startup and read by the render pass.
#[derive(Resource, Default)]
pub struct TextureStore {
    map: HashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        TextureStore {
            map: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}
