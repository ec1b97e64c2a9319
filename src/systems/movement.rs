//! Traversal movement system.
//!
//! Advances every [`MoveTo`](crate::components::moveto::MoveTo) component by
//! the frame delta, writes the interpolated position into
//! [`MapPosition`](crate::components::mapposition::MapPosition), and
//! triggers an [`ArrivalEvent`](crate::events::arrival::ArrivalEvent) the
//! frame a traversal completes. The consequences of arriving (despawn,
//! escape/loss) live in the arrival observer, not here.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::moveto::MoveTo;
use crate::resources::worldtime::WorldTime;

/// Linearly interpolate between two 2D vectors.
pub(crate) fn lerp_v2(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    Vector2 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

/// Advance `MoveTo` traversals and report completions.
///
/// The arrival event fires exactly once per traversal: the entity is
/// despawned by the arrival observer, so a finished component is never
/// stepped again. Positions are clamped to the destination on the final
/// frame.
pub fn move_to_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut MapPosition, &mut MoveTo)>,
    mut commands: Commands,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut position, mut tween) in query.iter_mut() {
        if tween.finished() {
            continue;
        }
        tween.elapsed += dt;
        position.pos = lerp_v2(tween.from, tween.to, tween.progress());
        if tween.finished() {
            commands.trigger(crate::events::arrival::ArrivalEvent { entity });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn lerp_v2_basic() {
        let a = Vector2 { x: 0.0, y: 0.0 };
        let b = Vector2 { x: 10.0, y: 20.0 };
        let result = lerp_v2(a, b, 0.5);
        assert!(approx_eq(result.x, 5.0));
        assert!(approx_eq(result.y, 10.0));
    }

    #[test]
    fn lerp_v2_at_boundaries() {
        let a = Vector2 { x: 1.0, y: 2.0 };
        let b = Vector2 { x: 11.0, y: 22.0 };

        let at_zero = lerp_v2(a, b, 0.0);
        assert!(approx_eq(at_zero.x, 1.0));
        assert!(approx_eq(at_zero.y, 2.0));

        let at_one = lerp_v2(a, b, 1.0);
        assert!(approx_eq(at_one.x, 11.0));
        assert!(approx_eq(at_one.y, 22.0));
    }

    #[test]
    fn lerp_v2_component_independence() {
        let a = Vector2 { x: 0.0, y: 100.0 };
        let b = Vector2 { x: 100.0, y: 0.0 };
        let result = lerp_v2(a, b, 0.25);
        assert!(approx_eq(result.x, 25.0));
        assert!(approx_eq(result.y, 75.0));
    }
}
