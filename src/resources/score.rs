//! Kill counter.
//!
//! The destroyed-monster count is an explicit resource owned by the world
//! rather than an ambient global. It only ever grows, and only the contact
//! resolver increments it.

use bevy_ecs::prelude::Resource;

/// Number of monsters destroyed this game.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Score {
    destroyed: u32,
}

impl Score {
    pub fn new() -> Self {
        Score { destroyed: 0 }
    }

    /// Current destroyed-monster count.
    pub fn destroyed(&self) -> u32 {
        self.destroyed
    }

    /// Record one kill and return the new count.
    pub fn record_kill(&mut self) -> u32 {
        self.destroyed += 1;
        self.destroyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kills_accumulate_one_at_a_time() {
        let mut score = Score::new();
        assert_eq!(score.destroyed(), 0);
        assert_eq!(score.record_kill(), 1);
        assert_eq!(score.record_kill(), 2);
        assert_eq!(score.destroyed(), 2);
    }
}
