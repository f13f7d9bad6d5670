//! Core session engine for the Reflex aim trainer
//!
//! This crate holds everything about a round that does not touch the window
//! or the GPU:
//!
//! - [`GameMode`] / [`ModeRules`] - Per-mode constants and placement strategy
//! - [`Target`] - A circular click target
//! - [`TargetField`] - Live targets plus the seeded placement RNG
//! - [`placement`] - Rejection-sampling placement and hit testing
//! - [`SessionState`] - Active / GameOver state machine with scoring and timer
//! - [`SessionStats`] - Score, shots, hits and remaining time
//! - [`ScoreRecord`] / [`ScoreRecordSink`] - Finished rounds and where they go
//! - [`JsonScoreStore`] - Score history persisted as JSON
//! - [`FrameSnapshot`] - Immutable per-frame view for the renderer

mod error;
mod mode;
mod target;
mod field;
mod stats;
mod session;
mod score;
mod score_store;
mod snapshot;

pub mod placement;

pub use error::{CoreError, Result};
pub use mode::{GameMode, ModeRules, PlacementLimits, PlacementStrategy};
pub use target::Target;
pub use field::TargetField;
pub use stats::SessionStats;
pub use session::{ClickOutcome, SessionPhase, SessionState};
pub use score::{HistorySummary, MemoryScoreSink, ScoreRecord, ScoreRecordSink};
pub use score_store::JsonScoreStore;
pub use snapshot::FrameSnapshot;

// Re-export commonly used types from reflex_math for convenience
pub use reflex_math::{Rect, Vec2};
