//! Orchestration around the comparator and the import validator.
//!
//! Storage and word selection live outside this crate and are reached
//! through the [`WordSource`] and [`WordSink`] traits.

pub mod session;
pub mod upload;

use crate::types::{ImportError, WordPair};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use session::{PracticeSession, Score, SessionState};
pub use upload::{UploadResult, UploadState, UploadWorkflow};

/// Outcome of handing accepted words to a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReport {
    pub saved_count: usize,
    pub rejected_count: usize,
    /// Leading rejections; `rejected_count` may be larger.
    pub errors: Vec<ImportError>,
    pub processed_at: DateTime<Utc>,
}

impl SubmitReport {
    pub fn is_partial(&self) -> bool {
        self.rejected_count > 0 || !self.errors.is_empty()
    }
}

/// Receives validated word pairs for storage.
pub trait WordSink: Send {
    /// Store the words. Row numbers in the returned errors are 1-based
    /// positions in `words`.
    fn submit(&mut self, words: &[WordPair]) -> Result<SubmitReport, String>;
}

/// Supplies words for a practice session.
pub trait WordSource: Send {
    /// Pick up to `limit` words. The selection strategy is up to the source.
    fn fetch(&mut self, limit: usize) -> Result<Vec<WordPair>, String>;
}
