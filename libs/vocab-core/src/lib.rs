//! Core vocabulary library shared by the command-line tools.
//!
//! Provides:
//! - Answer comparison with Spanish vowel-accent tolerance
//! - Spreadsheet import validation with per-row error reporting
//! - Upload and practice-session workflows
//! - Shared types (WordPair, PracticeMode, Verdict, etc.)

pub mod comparator;
pub mod error;
pub mod import;
pub mod types;
pub mod workflow;

pub use comparator::{evaluate, evaluate_any, fold_vowel_accents, normalize_whitespace};
pub use error::{ImportFailure, Result, SessionError, WorkflowError};
pub use import::{
    parse_batch, parse_batch_with, ColumnMap, ColumnRole, ImportBatchResult, ImportSummary,
};
pub use types::{
    CellValue, ComparisonOutcome, ImportError, ImportOptions, ImportRow, PracticeMode, Verdict,
    WordPair,
};
pub use workflow::{
    PracticeSession, Score, SessionState, SubmitReport, UploadResult, UploadState, UploadWorkflow,
    WordSink, WordSource,
};
