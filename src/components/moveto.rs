//! Straight-line traversal component.
//!
//! [`MoveTo`] is the explicit replacement for an engine-scheduled
//! "move then run completion blocks" action sequence: the component carries
//! the whole traversal (start, destination, duration, elapsed time) and the
//! [`move_to_system`](crate::systems::movement::move_to_system) advances it
//! each frame, triggering an
//! [`ArrivalEvent`](crate::events::arrival::ArrivalEvent) exactly once when
//! the destination is reached. What happens on arrival (despawn, loss) is
//! decided by observers, not by this component.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Linear interpolation from `from` to `to` over `duration` seconds.
#[derive(Component, Clone, Copy, Debug)]
pub struct MoveTo {
    /// Starting position.
    pub from: Vector2,
    /// Destination position.
    pub to: Vector2,
    /// Traversal duration in seconds. Must be > 0.
    pub duration: f32,
    /// Time already travelled, in seconds.
    pub elapsed: f32,
}

impl MoveTo {
    pub fn new(from: Vector2, to: Vector2, duration: f32) -> Self {
        MoveTo {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    /// Normalized progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// True once the full duration has elapsed.
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        let mut m = MoveTo::new(Vector2::zero(), Vector2::new(10.0, 0.0), 2.0);
        assert_eq!(m.progress(), 0.0);
        m.elapsed = 1.0;
        assert_eq!(m.progress(), 0.5);
        m.elapsed = 5.0;
        assert_eq!(m.progress(), 1.0);
        assert!(m.finished());
    }

    #[test]
    fn zero_duration_counts_as_finished_progress() {
        let m = MoveTo::new(Vector2::zero(), Vector2::zero(), 0.0);
        assert_eq!(m.progress(), 1.0);
    }
}
