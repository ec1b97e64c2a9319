//! Periodic monster spawn timer.

use bevy_ecs::prelude::Resource;

/// Fixed-period spawn clock for monsters.
///
/// [`tick`](MonsterSpawner::tick) accumulates frame time and reports how
/// many spawns are due, so a long frame (or a large test step) produces the
/// right number of monsters instead of at most one.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct MonsterSpawner {
    /// Seconds between spawns.
    pub interval: f32,
    elapsed: f32,
}

impl MonsterSpawner {
    pub fn new(interval: f32) -> Self {
        MonsterSpawner {
            interval,
            elapsed: 0.0,
        }
    }

    /// Advance the clock by `dt` seconds and return the number of spawns due.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if self.interval <= 0.0 {
            return 0;
        }
        self.elapsed += dt.max(0.0);
        let mut due = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            due += 1;
        }
        due
    }

    /// Restart the clock, dropping any accumulated time.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_due_before_the_interval() {
        let mut s = MonsterSpawner::new(1.0);
        assert_eq!(s.tick(0.4), 0);
        assert_eq!(s.tick(0.4), 0);
        assert_eq!(s.tick(0.4), 1);
    }

    #[test]
    fn long_steps_report_every_missed_spawn() {
        let mut s = MonsterSpawner::new(1.0);
        assert_eq!(s.tick(3.5), 3);
        assert_eq!(s.tick(0.5), 1);
    }

    #[test]
    fn reset_drops_accumulated_time() {
        let mut s = MonsterSpawner::new(1.0);
        s.tick(0.9);
        s.reset();
        assert_eq!(s.tick(0.9), 0);
    }

    #[test]
    fn non_positive_interval_never_spawns() {
        let mut s = MonsterSpawner::new(0.0);
        assert_eq!(s.tick(10.0), 0);
    }
}
