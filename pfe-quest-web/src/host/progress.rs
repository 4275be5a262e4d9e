//! localStorage-backed progression.

use pfe_quest_game::{ProgressTracker, StudentInfo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub const PROGRESS_KEY: &str = "pfe-quest.progress";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("browser storage failed: {0}")]
    Backend(String),
    #[error("stored progress is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Everything the campaign remembers between levels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(default)]
    pub student: StudentInfo,
    /// Latest score per level number.
    #[serde(default)]
    pub scores: BTreeMap<u8, u32>,
}

impl ProgressRecord {
    pub fn record(&mut self, level: u8, score: u32) {
        self.scores.insert(level, score);
    }

    #[must_use]
    pub fn completed_levels(&self) -> Vec<u8> {
        self.scores.keys().copied().collect()
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.scores.values().sum()
    }

    /// Parse a stored record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Corrupt`] when the text is not a record.
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Returns [`StorageError::Corrupt`] if serialization fails.
    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// [`ProgressTracker`] over `localStorage[PROGRESS_KEY]`.
///
/// Read failures fall back to an empty record; write failures are logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalProgress;

impl LocalProgress {
    /// # Errors
    ///
    /// Returns an error if storage is unreachable or holds a corrupt record.
    pub fn load(&self) -> Result<ProgressRecord, StorageError> {
        match read_raw()? {
            Some(json) => ProgressRecord::from_json(&json),
            None => Ok(ProgressRecord::default()),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    pub fn save(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        write_raw(&record.to_json()?)
    }

    /// The stored record, or an empty one when it cannot be read.
    #[must_use]
    pub fn load_or_default(&self) -> ProgressRecord {
        self.load().unwrap_or_else(|err| {
            log::warn!("progress unavailable, starting fresh: {err}");
            ProgressRecord::default()
        })
    }
}

impl ProgressTracker for LocalProgress {
    fn student_info(&self) -> StudentInfo {
        self.load_or_default().student
    }

    fn complete_level(&self, level: u8, score: u32) {
        let mut record = self.load_or_default();
        record.record(level, score);
        if let Err(err) = self.save(&record) {
            log::error!("could not save score for level {level}: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_raw() -> Result<Option<String>, StorageError> {
    use gloo::storage::{LocalStorage, Storage};
    LocalStorage::raw()
        .get_item(PROGRESS_KEY)
        .map_err(|err| StorageError::Backend(crate::dom::js_error_message(&err)))
}

#[cfg(target_arch = "wasm32")]
fn write_raw(json: &str) -> Result<(), StorageError> {
    use gloo::storage::{LocalStorage, Storage};
    LocalStorage::raw()
        .set_item(PROGRESS_KEY, json)
        .map_err(|err| StorageError::Backend(crate::dom::js_error_message(&err)))
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(clippy::unnecessary_wraps)]
fn read_raw() -> Result<Option<String>, StorageError> {
    Ok(None)
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(clippy::unnecessary_wraps)]
fn write_raw(json: &str) -> Result<(), StorageError> {
    log::debug!("progress not persisted outside the browser: {json}");
    Ok(())
}
