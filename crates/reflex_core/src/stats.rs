//! Per-session counters

use serde::Serialize;

/// Score, shot counters and remaining time of one session
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SessionStats {
    pub score: u64,
    pub shots_fired: u32,
    pub hits: u32,
    /// Seconds left in the round, never negative
    pub time_remaining: f32,
}

impl SessionStats {
    /// Zeroed counters with a full timer
    pub fn new(duration_secs: f32) -> Self {
        Self {
            score: 0,
            shots_fired: 0,
            hits: 0,
            time_remaining: duration_secs.max(0.0),
        }
    }

    /// Hit percentage in `[0, 100]`, 0 when no shot was fired
    pub fn accuracy(&self) -> f64 {
        if self.shots_fired == 0 {
            return 0.0;
        }
        f64::from(self.hits) * 100.0 / f64::from(self.shots_fired)
    }

    pub fn misses(&self) -> u32 {
        self.shots_fired - self.hits
    }

    pub(crate) fn record_hit(&mut self, hit_score: u64) {
        self.shots_fired += 1;
        self.hits += 1;
        self.score = self.score.saturating_add(hit_score);
    }

    pub(crate) fn record_miss(&mut self, miss_penalty: u64) {
        self.shots_fired += 1;
        self.score = self.score.saturating_sub(miss_penalty);
    }

    /// Whole seconds to show on a countdown, rounded up
    pub fn seconds_left(&self) -> u32 {
        self.time_remaining.max(0.0).ceil() as u32
    }
}
