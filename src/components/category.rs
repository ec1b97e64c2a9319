//! Collision category bitmasks and the contact filter component.
//!
//! Every entity that can take part in a contact carries a
//! [`CollisionFilter`]. The filter names *who the entity is* (its
//! [`PhysicsCategory`] bit) and *who it wants to be notified about touching*
//! (its contact mask). Nothing in this game has a physical collision
//! response; contacts are notifications only.

use bevy_ecs::prelude::Component;

/// Bitmask identifying an entity's role for contact filtering.
///
/// `MONSTER` and `PROJECTILE` are mutually exclusive single-bit flags.
/// The numeric value is also used by the contact resolver to normalize the
/// order of a reported pair (lower bitmask first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhysicsCategory(pub u32);

impl PhysicsCategory {
    pub const NONE: PhysicsCategory = PhysicsCategory(0);
    pub const MONSTER: PhysicsCategory = PhysicsCategory(0b01);
    pub const PROJECTILE: PhysicsCategory = PhysicsCategory(0b10);
    pub const ALL: PhysicsCategory = PhysicsCategory(u32::MAX);

    /// True when any bit of `other` is set in this mask.
    pub fn intersects(self, other: PhysicsCategory) -> bool {
        self.0 & other.0 != 0
    }
}

/// Contact filter attached to collidable entities.
#[derive(Component, Clone, Copy, Debug)]
pub struct CollisionFilter {
    /// The category bit of this entity.
    pub category: PhysicsCategory,
    /// Categories this entity wants contact notifications about.
    pub contact_mask: PhysicsCategory,
}

impl CollisionFilter {
    pub fn new(category: PhysicsCategory, contact_mask: PhysicsCategory) -> Self {
        Self {
            category,
            contact_mask,
        }
    }

    /// Filter for monsters: notified when touching projectiles.
    pub fn monster() -> Self {
        Self::new(PhysicsCategory::MONSTER, PhysicsCategory::PROJECTILE)
    }

    /// Filter for projectiles: notified when touching monsters.
    pub fn projectile() -> Self {
        Self::new(PhysicsCategory::PROJECTILE, PhysicsCategory::MONSTER)
    }
}
