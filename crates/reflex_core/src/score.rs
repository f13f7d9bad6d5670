//! Score records and the sink they are appended to

use std::collections::BTreeMap;

use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One finished round
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// RFC 3339 local time, e.g. `2024-05-01T18:30:12+02:00`
    pub timestamp: String,
    pub score: u64,
    /// Hit percentage in `[0, 100]`
    #[serde(rename = "accuracy")]
    pub accuracy_percent: f64,
}

impl ScoreRecord {
    pub fn new(timestamp: impl Into<String>, score: u64, accuracy_percent: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            score,
            accuracy_percent,
        }
    }

    /// Record stamped with the current local time
    pub fn now(score: u64, accuracy_percent: f64) -> Self {
        let timestamp = Local::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        Self::new(timestamp, score, accuracy_percent)
    }
}

/// Append-only storage of score records, keyed by mode name
pub trait ScoreRecordSink {
    /// Append `record` to the history of `mode`
    fn append(&mut self, mode: &str, record: ScoreRecord) -> Result<()>;

    /// Records of `mode` in append order; empty if nothing is stored or the
    /// storage cannot be read
    fn history(&self, mode: &str) -> Vec<ScoreRecord>;
}

/// In-memory sink, used by tests and when no score file is configured
#[derive(Clone, Debug, Default)]
pub struct MemoryScoreSink {
    records: BTreeMap<String, Vec<ScoreRecord>>,
}

impl MemoryScoreSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records across all modes
    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScoreRecordSink for MemoryScoreSink {
    fn append(&mut self, mode: &str, record: ScoreRecord) -> Result<()> {
        self.records.entry(mode.to_string()).or_default().push(record);
        Ok(())
    }

    fn history(&self, mode: &str) -> Vec<ScoreRecord> {
        self.records.get(mode).cloned().unwrap_or_default()
    }
}

/// Aggregate view over one mode's history
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HistorySummary {
    pub runs: usize,
    pub best_score: u64,
    pub last_score: Option<u64>,
    pub mean_accuracy: f64,
}

impl HistorySummary {
    pub fn from_records(records: &[ScoreRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let total_accuracy: f64 = records.iter().map(|r| r.accuracy_percent).sum();
        Self {
            runs: records.len(),
            best_score: records.iter().map(|r| r.score).max().unwrap_or(0),
            last_score: records.last().map(|r| r.score),
            mean_accuracy: total_accuracy / records.len() as f64,
        }
    }
}
