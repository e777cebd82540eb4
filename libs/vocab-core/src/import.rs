//! Bulk import of word pairs from spreadsheet rows.
//!
//! # Format
//! The first row is a header. Column order does not matter; the Spanish and
//! Bulgarian columns are found by their header text:
//! ```text
//! | Español  | Bulgarian Translation |
//! | aprender | уча                   |
//! |          |                       |   <- skipped
//! | hablar   | говоря                |
//! ```

use crate::error::{ImportFailure, Result};
use crate::types::{CellValue, ImportError, ImportOptions, ImportRow, WordPair};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Accepted normalized header spellings per column role.
const HEADER_SYNONYMS: [(ColumnRole, &[&str]); 2] = [
    (ColumnRole::Source, &["spanish", "español", "espanol"]),
    (
        ColumnRole::Target,
        &["bulgarian", "bulgariantranslation", "български"],
    ),
];

/// Which side of a word pair a column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    Source,
    Target,
}

impl ColumnRole {
    /// Resolve a raw header cell to a role.
    pub fn from_header(header: &str) -> Option<Self> {
        let normalized = normalize_header(header);
        HEADER_SYNONYMS
            .iter()
            .find(|(_, spellings)| spellings.contains(&normalized.as_str()))
            .map(|(role, _)| *role)
    }
}

/// Header positions of the two word columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    pub source: usize,
    pub target: usize,
}

impl ColumnMap {
    /// Find both columns in a header row. The first matching column wins.
    pub fn resolve(header: &[CellValue]) -> Option<Self> {
        let mut source = None;
        let mut target = None;

        for (idx, cell) in header.iter().enumerate() {
            match ColumnRole::from_header(&cell.to_clean_string()) {
                Some(ColumnRole::Source) if source.is_none() => source = Some(idx),
                Some(ColumnRole::Target) if target.is_none() => target = Some(idx),
                _ => {}
            }
        }

        Some(Self {
            source: source?,
            target: target?,
        })
    }

    fn extract(
        &self,
        row: usize,
        cells: &[CellValue],
    ) -> std::result::Result<ImportRow, ImportError> {
        let source = cells.get(self.source).unwrap_or(&CellValue::Empty);
        let target = cells.get(self.target).unwrap_or(&CellValue::Empty);

        for cell in [source, target] {
            if let CellValue::Error(code) = cell {
                return Err(ImportError {
                    row,
                    message: format!("cell contains a spreadsheet error: {}", code.trim()),
                });
            }
        }

        Ok(ImportRow {
            row,
            source: source.to_clean_string(),
            target: target.to_clean_string(),
        })
    }
}

/// Words extracted from an upload plus the rows that could not be used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportBatchResult {
    pub accepted: Vec<WordPair>,
    pub errors: Vec<ImportError>,
    /// File row of each accepted pair, parallel to `accepted`.
    #[serde(default)]
    pub rows: Vec<usize>,
}

impl ImportBatchResult {
    /// Record a row-level problem.
    pub fn reject(&mut self, row: usize, message: impl Into<String>) {
        self.errors.push(ImportError {
            row,
            message: message.into(),
        });
    }

    /// Accept a pair read from file row `row`.
    pub fn accept(&mut self, row: usize, pair: WordPair) {
        self.accepted.push(pair);
        self.rows.push(row);
    }

    /// File row of the accepted pair at 1-based `position`.
    pub fn source_row(&self, position: usize) -> Option<usize> {
        position
            .checked_sub(1)
            .and_then(|idx| self.rows.get(idx))
            .copied()
    }

    /// Aggregate view for the user: counts plus the first `max_errors` errors.
    pub fn summary(&self, max_errors: usize) -> ImportSummary {
        ImportSummary {
            accepted_count: self.accepted.len(),
            rejected_count: self.errors.len(),
            errors: self.errors.iter().take(max_errors).cloned().collect(),
        }
    }
}

/// Counts and leading errors of an import, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub accepted_count: usize,
    pub rejected_count: usize,
    pub errors: Vec<ImportError>,
}

/// Parse spreadsheet rows into word pairs using default limits.
pub fn parse_batch(rows: &[Vec<CellValue>]) -> Result<ImportBatchResult> {
    parse_batch_with(rows, &ImportOptions::default())
}

/// Parse spreadsheet rows into word pairs.
///
/// Fails only when the input as a whole is unusable. Rows with both word
/// cells blank are skipped without an error; rows with one blank side are
/// passed through and left for the word store to reject.
pub fn parse_batch_with(
    rows: &[Vec<CellValue>],
    options: &ImportOptions,
) -> Result<ImportBatchResult> {
    let Some((header, data)) = rows.split_first().filter(|(_, data)| !data.is_empty()) else {
        tracing::warn!(rows = rows.len(), "upload has no header or no data rows");
        return Err(ImportFailure::MissingHeaderOrData);
    };

    if data.len() > options.max_rows {
        tracing::warn!(
            rows = data.len(),
            limit = options.max_rows,
            "upload exceeds row limit"
        );
        return Err(ImportFailure::TooManyRows {
            limit: options.max_rows,
        });
    }

    let columns = ColumnMap::resolve(header).ok_or_else(|| {
        tracing::warn!(?header, "upload header lacks spanish/bulgarian columns");
        ImportFailure::MissingColumns
    })?;
    tracing::debug!(source = columns.source, target = columns.target, "resolved columns");

    let mut result = ImportBatchResult::default();
    let mut skipped = 0usize;

    for (idx, cells) in data.iter().enumerate() {
        let row = idx + 1;
        match columns.extract(row, cells) {
            Ok(extracted) if extracted.source.is_empty() && extracted.target.is_empty() => {
                skipped += 1;
            }
            Ok(extracted) => result.accept(
                extracted.row,
                WordPair {
                    source_text: extracted.source,
                    target_text: extracted.target,
                },
            ),
            Err(error) => result.errors.push(error),
        }
    }

    tracing::debug!(
        accepted = result.accepted.len(),
        rejected = result.errors.len(),
        skipped,
        "parsed upload"
    );

    if result.accepted.is_empty() {
        return Err(ImportFailure::EmptyBatch);
    }

    Ok(result)
}

/// NFC, trim, lowercase, and drop whitespace, `_` and `-`.
fn normalize_header(value: &str) -> String {
    value
        .trim()
        .nfc()
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .collect()
}
