//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using ImportFailure.
pub type Result<T> = std::result::Result<T, ImportFailure>;

/// Failures that make a whole upload unusable.
///
/// Problems with individual rows are never reported here; they end up in
/// [`ImportBatchResult::errors`](crate::import::ImportBatchResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportFailure {
    #[error("missing header or data")]
    MissingHeaderOrData,

    #[error("missing required columns")]
    MissingColumns,

    #[error("upload cannot contain more than {limit} rows")]
    TooManyRows { limit: usize },

    #[error("no valid rows found")]
    EmptyBatch,
}

/// Errors raised by the upload workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("cannot {action} while {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    #[error("submission failed: {0}")]
    Sink(String),
}

/// Errors raised by a practice session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("answer is empty")]
    EmptyAnswer,

    #[error("cannot {action} while {state}")]
    InvalidState {
        state: &'static str,
        action: &'static str,
    },

    #[error("word source failed: {0}")]
    Source(String),
}
