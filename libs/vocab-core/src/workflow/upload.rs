//! Upload workflow: parse a spreadsheet, then hand the words to a store.
//!
//! ```text
//! Idle -> Parsing -> Validated -> Submitting -> Succeeded
//!                 |                          -> PartiallyRejected
//!                 -> ParseFailed
//! ```

use super::{SubmitReport, WordSink};
use crate::error::WorkflowError;
use crate::import::{parse_batch_with, ImportBatchResult};
use crate::types::{CellValue, ImportError, ImportOptions};
use serde::{Deserialize, Serialize};

/// Where an upload currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    Parsing,
    Validated(ImportBatchResult),
    ParseFailed(String),
    Submitting,
    Succeeded(UploadResult),
    /// Stored, but some rows were unusable or refused. Errors must be shown
    /// to the user.
    PartiallyRejected(UploadResult),
}

impl UploadState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Parsing => "parsing",
            Self::Validated(_) => "validated",
            Self::ParseFailed(_) => "parse_failed",
            Self::Submitting => "submitting",
            Self::Succeeded(_) => "succeeded",
            Self::PartiallyRejected(_) => "partially_rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::ParseFailed(_) | Self::Succeeded(_) | Self::PartiallyRejected(_)
        )
    }
}

/// Everything a finished upload has to report.
///
/// Row numbers in both error lists are 1-based data rows of the uploaded
/// file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    /// Rows the validator could not use. They never reached the sink.
    pub file_errors: Vec<ImportError>,
    pub report: SubmitReport,
}

impl UploadResult {
    pub fn is_partial(&self) -> bool {
        !self.file_errors.is_empty() || self.report.is_partial()
    }

    /// File rows plus sink rejections.
    pub fn rejected_count(&self) -> usize {
        self.file_errors.len() + self.report.rejected_count
    }
}

/// Drives one upload from raw rows to a submit report.
#[derive(Debug)]
pub struct UploadWorkflow {
    options: ImportOptions,
    state: UploadState,
}

impl UploadWorkflow {
    pub fn new(options: ImportOptions) -> Self {
        Self {
            options,
            state: UploadState::Idle,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Validate the rows. Ends in `Validated` or `ParseFailed`.
    pub fn parse(&mut self, rows: &[Vec<CellValue>]) -> Result<&UploadState, WorkflowError> {
        if !matches!(self.state, UploadState::Idle) {
            return Err(self.invalid("parse"));
        }

        self.state = UploadState::Parsing;
        self.state = match parse_batch_with(rows, &self.options) {
            Ok(batch) => UploadState::Validated(batch),
            Err(failure) => UploadState::ParseFailed(failure.to_string()),
        };
        Ok(&self.state)
    }

    /// Hand the validated words to `sink`.
    ///
    /// Validator errors are carried into the final state, and sink errors are
    /// renumbered from positions in the submitted list to file rows. A sink
    /// failure returns the workflow to `Validated` so the caller can
    /// retry.
    pub fn submit<S: WordSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<&UploadState, WorkflowError> {
        let batch = match std::mem::replace(&mut self.state, UploadState::Idle) {
            UploadState::Validated(batch) => batch,
            other => {
                self.state = other;
                return Err(self.invalid("submit"));
            }
        };

        tracing::info!(words = batch.accepted.len(), "submitting upload");
        self.state = UploadState::Submitting;

        let mut report = match sink.submit(&batch.accepted) {
            Ok(report) => report,
            Err(message) => {
                tracing::warn!(%message, "upload submission failed");
                self.state = UploadState::Validated(batch);
                return Err(WorkflowError::Sink(message));
            }
        };

        for error in &mut report.errors {
            error.row = batch.source_row(error.row).unwrap_or(error.row);
        }
        let result = UploadResult {
            file_errors: batch.errors,
            report,
        };

        self.state = if result.is_partial() {
            tracing::info!(
                saved = result.report.saved_count,
                rejected = result.rejected_count(),
                "upload partially rejected"
            );
            UploadState::PartiallyRejected(result)
        } else {
            tracing::info!(saved = result.report.saved_count, "upload stored");
            UploadState::Succeeded(result)
        };

        Ok(&self.state)
    }

    fn invalid(&self, action: &'static str) -> WorkflowError {
        WorkflowError::InvalidTransition {
            from: self.state.name(),
            action,
        }
    }
}
