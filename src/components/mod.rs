//! ECS components for entities.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned rectangular collider for contact detection
//! - [`category`] – collision category bitmasks and the contact filter
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`monster`] / [`player`] / [`projectile`] – role markers
//! - [`moveto`] – straight-line traversal with a completion event
//! - [`persistent`] – marker for entities that survive scene cleanup
//! - [`sprite`] – 2D sprite rendering component
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod boxcollider;
pub mod category;
pub mod mapposition;
pub mod monster;
pub mod moveto;
pub mod persistent;
pub mod player;
pub mod projectile;
pub mod sprite;
pub mod zindex;
