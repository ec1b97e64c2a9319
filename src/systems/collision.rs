//! Contact detection system.
//!
//! Pairwise AABB overlap over every entity carrying a position, a collider
//! and a contact filter. A pair is reported when either side's contact mask
//! includes the other side's category, which with this game's filters means
//! exactly the monster/projectile pairs. Detected pairs are handed to the
//! [`ContactEvent`](crate::events::contact::ContactEvent) observer; this
//! system never mutates entities itself.

use bevy_ecs::prelude::*;
use smallvec::SmallVec;

use crate::components::boxcollider::BoxCollider;
use crate::components::category::CollisionFilter;
use crate::components::mapposition::MapPosition;
use crate::events::contact::ContactEvent;

/// Detect overlapping contact-compatible pairs and trigger one
/// [`ContactEvent`] per pair.
pub fn collision_detector(
    query: Query<(Entity, &MapPosition, &BoxCollider, &CollisionFilter)>,
    mut commands: Commands,
) {
    // Collect first, trigger after: observers despawn entities and must not
    // run inside the iteration borrow.
    let mut pairs: SmallVec<[ContactEvent; 8]> = SmallVec::new();

    for [
        (entity_a, position_a, collider_a, filter_a),
        (entity_b, position_b, collider_b, filter_b),
    ] in query.iter_combinations()
    {
        let wants_contact = filter_a.contact_mask.intersects(filter_b.category)
            || filter_b.contact_mask.intersects(filter_a.category);
        if wants_contact && collider_a.overlaps(position_a.pos, collider_b, position_b.pos) {
            pairs.push(ContactEvent {
                a: entity_a,
                b: entity_b,
            });
        }
    }

    for pair in pairs {
        commands.trigger(pair);
    }
}
