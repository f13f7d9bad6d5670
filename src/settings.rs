//! Persisted player settings
//!
//! Only the sensitivity survives restarts. It is stored as a small JSON
//! document next to the score history.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings file unavailable: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Where the sensitivity setting is loaded from and saved to
pub trait SensitivityStore {
    /// The saved sensitivity, or `None` if nothing usable is stored
    fn load(&self) -> Option<f32>;

    fn save(&self, sensitivity: f32) -> Result<(), SettingsError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct SettingsFile {
    sensitivity: f32,
}

/// Sensitivity stored as `{"sensitivity": 1.0}`
#[derive(Debug, Clone)]
pub struct JsonSensitivityStore {
    path: PathBuf,
}

impl JsonSensitivityStore {
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SensitivityStore for JsonSensitivityStore {
    fn load(&self) -> Option<f32> {
        let bytes = fs::read(&self.path).ok()?;
        match serde_json::from_slice::<SettingsFile>(&bytes) {
            Ok(settings) => Some(settings.sensitivity),
            Err(e) => {
                log::warn!("Ignoring malformed settings {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&self, sensitivity: f32) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_vec_pretty(&SettingsFile { sensitivity })?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
