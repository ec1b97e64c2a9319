//! Debug toggle resource.
//!
//! The presence of this resource enables the collider/position overlay in
//! the render pass. Remove it to disable debug drawing.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws debug overlays.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
