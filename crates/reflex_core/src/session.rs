//! Session state machine
//!
//! A session starts `Active`, counts down from the mode's duration and moves
//! to `GameOver` once the timer hits zero. Only a reset leaves `GameOver`.
//!
//! ```text
//! Active --(time_remaining == 0)--> GameOver --(reset)--> Active
//! ```

use reflex_math::{Rect, Vec2};

use crate::field::TargetField;
use crate::mode::{GameMode, ModeRules};
use crate::score::ScoreRecord;
use crate::snapshot::FrameSnapshot;
use crate::stats::SessionStats;
use crate::target::Target;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Active,
    GameOver,
}

/// What a click did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The target at `index` was hit and moved
    Hit { index: usize },
    Miss,
    /// The session is over; the click was not counted
    Ignored,
}

#[derive(Clone, Debug)]
pub struct SessionState {
    rules: ModeRules,
    field: TargetField,
    stats: SessionStats,
    phase: SessionPhase,
}

impl SessionState {
    pub fn new(rules: ModeRules, bounds: Rect, seed: u64) -> Self {
        let field = TargetField::new(&rules, bounds, seed);
        let stats = SessionStats::new(rules.duration_secs);
        log::info!(
            "{} session started ({}s, {} target(s))",
            rules.mode,
            rules.duration_secs,
            field.targets().len()
        );
        Self {
            rules,
            field,
            stats,
            phase: SessionPhase::Active,
        }
    }

    /// Register a click at `point`
    pub fn on_click(&mut self, point: Vec2) -> ClickOutcome {
        if self.phase == SessionPhase::GameOver {
            return ClickOutcome::Ignored;
        }

        match self.field.hit_test(point) {
            Some(index) => {
                self.stats.record_hit(self.rules.hit_score);
                self.field.respawn(index);
                log::debug!("Hit target {} at ({:.0}, {:.0})", index, point.x, point.y);
                ClickOutcome::Hit { index }
            }
            None => {
                self.stats.record_miss(self.rules.miss_penalty);
                log::debug!("Miss at ({:.0}, {:.0})", point.x, point.y);
                ClickOutcome::Miss
            }
        }
    }

    /// Advance the timer to `elapsed_secs` since the session (re)started
    ///
    /// Returns the round's record on the tick that ends it, `None` otherwise.
    pub fn on_tick(&mut self, elapsed_secs: f32) -> Option<ScoreRecord> {
        if self.phase == SessionPhase::GameOver {
            return None;
        }

        self.stats.time_remaining = (self.rules.duration_secs - elapsed_secs).max(0.0);
        if self.stats.time_remaining > 0.0 {
            return None;
        }

        self.phase = SessionPhase::GameOver;
        let accuracy = self.stats.accuracy();
        log::info!(
            "{} session over: score {}, accuracy {:.1}%, relaxed placements {}",
            self.rules.mode,
            self.stats.score,
            accuracy,
            self.field.relaxed_placements()
        );
        Some(ScoreRecord::now(self.stats.score, accuracy))
    }

    /// Start a new round after game over
    ///
    /// Returns `false` and does nothing while the session is still active.
    pub fn reset(&mut self) -> bool {
        if self.phase == SessionPhase::Active {
            return false;
        }
        self.stats = SessionStats::new(self.rules.duration_secs);
        self.field.relayout();
        self.phase = SessionPhase::Active;
        log::info!("{} session restarted", self.rules.mode);
        true
    }

    /// Change the play area; targets are laid out again
    pub fn resize(&mut self, bounds: Rect) {
        self.field.set_bounds(bounds);
    }

    /// Hit percentage in `[0, 100]`
    pub fn accuracy(&self) -> f64 {
        self.stats.accuracy()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    pub fn targets(&self) -> &[Target] {
        self.field.targets()
    }

    pub fn field(&self) -> &TargetField {
        &self.field
    }

    pub fn rules(&self) -> &ModeRules {
        &self.rules
    }

    pub fn mode(&self) -> GameMode {
        self.rules.mode
    }

    /// Capture the state for rendering
    pub fn snapshot(&self, crosshair: Vec2, sensitivity: f32) -> FrameSnapshot {
        FrameSnapshot {
            mode: self.rules.mode,
            bounds: self.field.bounds(),
            targets: self.field.targets().to_vec(),
            crosshair,
            stats: self.stats,
            accuracy: self.stats.accuracy(),
            phase: self.phase,
            sensitivity,
            guide_line_y: self.field.guide_line_y(),
        }
    }
}
