//! Game modes and their rules
//!
//! The three modes share one session engine; they differ only in how targets
//! are placed and in a handful of constants collected in [`ModeRules`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Selectable game mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Six static targets on screen at once
    SixShot,
    /// A single target that jumps to a new spot on every hit
    QuickShot,
    /// A single target on a fixed-height line
    HeadShot,
}

impl GameMode {
    /// All modes in menu order
    pub const ALL: [GameMode; 3] = [GameMode::SixShot, GameMode::QuickShot, GameMode::HeadShot];

    /// Name used for display and as the score history key
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::SixShot => "SixShot",
            GameMode::QuickShot => "QuickShot",
            GameMode::HeadShot => "HeadShot",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownMode(s.to_string()))
    }
}

/// How a mode lays out and respawns its targets
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlacementStrategy {
    /// One target placed anywhere inside the margins
    SingleMoving,
    /// `count` targets placed with rejection sampling, each respawned in place
    MultiStatic { count: usize },
    /// One target whose y is `height_fraction` of the window height
    FixedHeight { height_fraction: f32 },
}

impl PlacementStrategy {
    /// Number of targets alive at any time
    pub fn target_count(&self) -> usize {
        match self {
            PlacementStrategy::SingleMoving => 1,
            PlacementStrategy::MultiStatic { count } => *count,
            PlacementStrategy::FixedHeight { .. } => 1,
        }
    }
}

/// Limits for the rejection-sampling placement loop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementLimits {
    /// Minimum center distance between targets, in multiples of the radius
    pub separation_factor: f32,
    /// Draws per target before the separation constraint is dropped
    pub max_attempts: u32,
}

impl Default for PlacementLimits {
    fn default() -> Self {
        Self {
            separation_factor: 4.0,
            max_attempts: 1000,
        }
    }
}

/// Constants that define one mode's session
#[derive(Clone, Debug, PartialEq)]
pub struct ModeRules {
    pub mode: GameMode,
    pub strategy: PlacementStrategy,
    /// Target radius in pixels
    pub target_radius: f32,
    /// Distance kept between targets and the window edges
    pub margin: f32,
    /// Round length in seconds
    pub duration_secs: f32,
    /// Points awarded per hit
    pub hit_score: u64,
    /// Points removed per miss (score never drops below zero)
    pub miss_penalty: u64,
    pub limits: PlacementLimits,
}

impl ModeRules {
    pub const DEFAULT_DURATION_SECS: f32 = 60.0;
    pub const DEFAULT_HIT_SCORE: u64 = 1000;
    pub const DEFAULT_MISS_PENALTY: u64 = 800;
    pub const DEFAULT_MARGIN: f32 = 100.0;

    /// Stock rules for a mode
    pub fn for_mode(mode: GameMode) -> Self {
        let (strategy, target_radius) = match mode {
            GameMode::SixShot => (PlacementStrategy::MultiStatic { count: 6 }, 7.0),
            GameMode::QuickShot => (PlacementStrategy::SingleMoving, 15.0),
            GameMode::HeadShot => (
                PlacementStrategy::FixedHeight {
                    height_fraction: 1.0 / 3.0,
                },
                20.0,
            ),
        };

        Self {
            mode,
            strategy,
            target_radius,
            margin: Self::DEFAULT_MARGIN,
            duration_secs: Self::DEFAULT_DURATION_SECS,
            hit_score: Self::DEFAULT_HIT_SCORE,
            miss_penalty: Self::DEFAULT_MISS_PENALTY,
            limits: PlacementLimits::default(),
        }
    }

    /// Builder: set round length
    pub fn with_duration(mut self, secs: f32) -> Self {
        self.duration_secs = secs;
        self
    }

    /// Builder: set hit score and miss penalty
    pub fn with_scoring(mut self, hit_score: u64, miss_penalty: u64) -> Self {
        self.hit_score = hit_score;
        self.miss_penalty = miss_penalty;
        self
    }

    /// Builder: set the placement attempt cap
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.limits.max_attempts = max_attempts;
        self
    }

    /// Minimum distance between two target centers
    pub fn min_separation(&self) -> f32 {
        self.limits.separation_factor * self.target_radius
    }
}
