//! Immutable per-frame view handed to the renderer

use reflex_math::{Rect, Vec2};

use crate::mode::GameMode;
use crate::session::SessionPhase;
use crate::stats::SessionStats;
use crate::target::Target;

/// Everything needed to draw one frame
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub mode: GameMode,
    pub bounds: Rect,
    pub targets: Vec<Target>,
    pub crosshair: Vec2,
    pub stats: SessionStats,
    /// Hit percentage in `[0, 100]`
    pub accuracy: f64,
    pub phase: SessionPhase,
    pub sensitivity: f32,
    /// Height of the HeadShot guide line
    pub guide_line_y: Option<f32>,
}

impl FrameSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    /// One-line heads-up display text
    pub fn hud_line(&self) -> String {
        match self.phase {
            SessionPhase::Active => format!(
                "{} | Score: {} | Accuracy: {:.1}% | Time: {}s | Sensitivity: {:.1}",
                self.mode,
                self.stats.score,
                self.accuracy,
                self.stats.seconds_left(),
                self.sensitivity
            ),
            SessionPhase::GameOver => format!(
                "{} | Game over | Final score: {} | Accuracy: {:.1}% | R to restart, Esc for menu",
                self.mode, self.stats.score, self.accuracy
            ),
        }
    }
}
