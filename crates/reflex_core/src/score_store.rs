//! JSON file backed score history
//!
//! The file holds one object keyed by mode name, each value being the list
//! of records in append order:
//!
//! ```json
//! { "SixShot": [ { "timestamp": "...", "score": 1400, "accuracy": 60.0 } ] }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::score::{ScoreRecord, ScoreRecordSink};

type History = BTreeMap<String, Vec<ScoreRecord>>;

#[derive(Debug)]
pub struct JsonScoreStore {
    path: PathBuf,
    records: History,
}

impl JsonScoreStore {
    /// Open the store at `path`
    ///
    /// A missing file is an empty history. An unreadable or malformed file is
    /// logged and also treated as empty; it is only overwritten on the next
    /// append.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let records = match Self::load_from(&path) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("Could not read score history {}: {}", path.display(), e);
                History::new()
            }
        };
        Self { path, records }
    }

    /// Read the history file, returning an empty history if it does not exist
    pub fn load_from(path: &Path) -> Result<BTreeMap<String, Vec<ScoreRecord>>> {
        if !path.exists() {
            return Ok(History::new());
        }
        let bytes = fs::read(path)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(History::new());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_vec_pretty(&self.records)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl ScoreRecordSink for JsonScoreStore {
    fn append(&mut self, mode: &str, record: ScoreRecord) -> Result<()> {
        self.records.entry(mode.to_string()).or_default().push(record);
        self.persist()?;
        log::info!("Saved {} score to {}", mode, self.path.display());
        Ok(())
    }

    fn history(&self, mode: &str) -> Vec<ScoreRecord> {
        self.records.get(mode).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonScoreStore::open(dir.path().join("scores.json"));
        assert!(store.history("SixShot").is_empty());
    }

    #[test]
    fn test_append_creates_parent_dirs_and_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("scores.json");

        let mut store = JsonScoreStore::open(&path);
        store
            .append("QuickShot", ScoreRecord::new("t1", 4000, 80.0))
            .unwrap();
        store
            .append("QuickShot", ScoreRecord::new("t2", 5000, 90.0))
            .unwrap();

        let reopened = JsonScoreStore::open(&path);
        let history = reopened.history("QuickShot");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].score, 4000);
        assert_eq!(history[1].score, 5000);
    }

    #[test]
    fn test_reads_existing_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(
            &path,
            r#"{"HeadShot": [{"timestamp": "2024-01-02 03:04:05", "score": 7000, "accuracy": 87.5}]}"#,
        )
        .unwrap();

        let store = JsonScoreStore::open(&path);
        let history = store.history("HeadShot");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].score, 7000);
        assert_eq!(history[0].accuracy_percent, 87.5);
    }

    #[test]
    fn test_malformed_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonScoreStore::open(&path);
        assert!(store.history("SixShot").is_empty());
        assert!(JsonScoreStore::load_from(&path).is_err());
    }

    #[test]
    fn test_append_to_unwritable_location_errors() {
        let dir = tempdir().unwrap();
        // A regular file where the parent directory should be
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let mut store = JsonScoreStore::open(blocker.join("scores.json"));
        let result = store.append("SixShot", ScoreRecord::new("t", 1, 1.0));
        assert!(result.is_err());
        // The record is still visible for the rest of the run
        assert_eq!(store.history("SixShot").len(), 1);
    }
}
