use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Axis-aligned rectangular collider.
///
/// `offset` displaces the box relative to the entity's `MapPosition`. The
/// usual case here is a box centered on the position, see
/// [`BoxCollider::centered`].
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Collider of the given size with its top-left at the entity position.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    /// Collider of the given size centered on the entity position.
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::new(-width * 0.5, -height * 0.5),
        }
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Normalizes negative sizes to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// AABB as (x, y, width, height), used by the debug overlay.
    pub fn get_aabb(&self, position: Vector2) -> (f32, f32, f32, f32) {
        let (min, max) = self.aabb(position);
        (min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// AABB vs AABB overlap test against another collider at another
    /// entity position.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_box_straddles_the_position() {
        let c = BoxCollider::centered(10.0, 6.0);
        let (min, max) = c.aabb(Vector2::new(100.0, 50.0));
        assert_eq!(min.x, 95.0);
        assert_eq!(min.y, 47.0);
        assert_eq!(max.x, 105.0);
        assert_eq!(max.y, 53.0);
    }

    #[test]
    fn overlapping_boxes_are_detected() {
        let a = BoxCollider::centered(10.0, 10.0);
        let b = BoxCollider::centered(10.0, 10.0);
        assert!(a.overlaps(Vector2::new(0.0, 0.0), &b, Vector2::new(8.0, 0.0)));
        assert!(!a.overlaps(Vector2::new(0.0, 0.0), &b, Vector2::new(11.0, 0.0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = BoxCollider::centered(10.0, 10.0);
        let b = BoxCollider::centered(10.0, 10.0);
        // Strict comparison: sharing an edge is not a contact.
        assert!(!a.overlaps(Vector2::new(0.0, 0.0), &b, Vector2::new(10.0, 0.0)));
    }
}
