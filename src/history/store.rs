use anyhow::Result;
use chrono::Utc;
use std::path::{Path, PathBuf};

use super::storage::{load_history, save_history};
use super::types::{AssessmentRecord, HistoryState};
use crate::assessment::ResponseSet;

/// Where submitted assessments are kept.
///
/// Owned by the caller and handed to [`crate::submit::submit_assessment`];
/// the scoring engine never touches it.
pub trait AssessmentStore {
    /// Persist an assessment for a user and return its generated id
    fn save(&mut self, user_id: &str, responses: &ResponseSet, dosha_result: &str) -> Result<u64>;

    /// A user's assessments, newest first
    fn list_for_user(&self, user_id: &str) -> Result<Vec<AssessmentRecord>>;

    /// Every user's assessments, newest first
    fn list_all(&self) -> Result<Vec<AssessmentRecord>>;
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: HistoryState,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AssessmentStore for MemoryStore {
    fn save(&mut self, user_id: &str, responses: &ResponseSet, dosha_result: &str) -> Result<u64> {
        Ok(self.state.record(user_id, responses, dosha_result, Utc::now()))
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<AssessmentRecord>> {
        Ok(self.state.for_user(user_id))
    }

    fn list_all(&self) -> Result<Vec<AssessmentRecord>> {
        Ok(self.state.all())
    }
}

/// Store backed by a JSON file, rewritten atomically on every save.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    state: HistoryState,
}

impl JsonFileStore {
    /// Open the history file at `path`. A missing file starts an empty history.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let state = load_history(&path)?;
        tracing::debug!(
            path = %path.display(),
            records = state.assessments.len(),
            "opened assessment history"
        );
        Ok(Self { path, state })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AssessmentStore for JsonFileStore {
    fn save(&mut self, user_id: &str, responses: &ResponseSet, dosha_result: &str) -> Result<u64> {
        // Work on a copy so a failed write leaves the in-memory view matching the file
        let mut next = self.state.clone();
        let id = next.record(user_id, responses, dosha_result, Utc::now());
        save_history(&self.path, &next)?;
        self.state = next;
        tracing::debug!(id, user_id, "saved assessment");
        Ok(id)
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<AssessmentRecord>> {
        Ok(self.state.for_user(user_id))
    }

    fn list_all(&self) -> Result<Vec<AssessmentRecord>> {
        Ok(self.state.all())
    }
}
