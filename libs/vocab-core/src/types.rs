//! Core types shared by the comparator, the import validator and the workflows.

use serde::{Deserialize, Serialize};

/// A Spanish/Bulgarian translation pair.
///
/// `source_text` is the Spanish side and `target_text` the Bulgarian side.
/// Which side is asked and which is expected depends on the [`PracticeMode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    pub source_text: String,
    pub target_text: String,
}

impl WordPair {
    pub fn new(source_text: impl Into<String>, target_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
        }
    }

    /// True when both sides hold text after trimming.
    pub fn is_complete(&self) -> bool {
        !self.source_text.trim().is_empty() && !self.target_text.trim().is_empty()
    }
}

/// Practice direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeMode {
    /// Bulgarian prompt, Spanish answer.
    QuizBgToEs,
    /// Spanish prompt, Bulgarian answer.
    QuizEsToBg,
    /// Bulgarian sentence prompt, Spanish sentence answer.
    SentenceBgToEs,
}

impl Default for PracticeMode {
    fn default() -> Self {
        Self::QuizBgToEs
    }
}

impl PracticeMode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QuizBgToEs => "quiz_bg_to_es",
            Self::QuizEsToBg => "quiz_es_to_bg",
            Self::SentenceBgToEs => "sentence_bg_to_es",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "quiz_bg_to_es" => Some(Self::QuizBgToEs),
            "quiz_es_to_bg" => Some(Self::QuizEsToBg),
            "sentence_bg_to_es" => Some(Self::SentenceBgToEs),
            _ => None,
        }
    }

    /// Whether the expected answer is Spanish text.
    pub fn expects_spanish(&self) -> bool {
        matches!(self, Self::QuizBgToEs | Self::SentenceBgToEs)
    }

    /// Whether answers are whole sentences (edge punctuation is ignored).
    pub fn is_sentence(&self) -> bool {
        matches!(self, Self::SentenceBgToEs)
    }

    /// The side of the pair shown to the learner.
    pub fn prompt_for<'a>(&self, pair: &'a WordPair) -> &'a str {
        if self.expects_spanish() {
            &pair.target_text
        } else {
            &pair.source_text
        }
    }

    /// The side of the pair the learner must type.
    pub fn expected_for<'a>(&self, pair: &'a WordPair) -> &'a str {
        if self.expects_spanish() {
            &pair.source_text
        } else {
            &pair.target_text
        }
    }
}

impl std::fmt::Display for PracticeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict of an answer comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Exact,
    /// Correct, but accents, case or spacing differ.
    Warning,
    Wrong,
}

impl Verdict {
    /// Exact and warning both count as a correct answer.
    pub fn is_correct(self) -> bool {
        !matches!(self, Self::Wrong)
    }

    /// Learner-facing feedback line.
    pub fn message(self) -> &'static str {
        match self {
            Self::Exact => "Correct.",
            Self::Warning => "Correct, but be careful with accent or case.",
            Self::Wrong => "Incorrect. Review the expected answer and continue.",
        }
    }
}

/// Result of comparing a typed answer to the expected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    pub verdict: Verdict,
    /// The canonical expected answer, as given by the caller.
    pub canonical: String,
}

/// A raw spreadsheet cell as handed over by a reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Error value reported by the spreadsheet itself (e.g. `#REF!`).
    #[serde(skip_deserializing)]
    Error(String),
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Empty
    }
}

impl CellValue {
    /// Stringify and trim. Empty cells become an empty string.
    pub fn to_clean_string(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.trim().to_string(),
            Self::Error(code) => code.trim().to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// One data row after column extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRow {
    /// 1-based data row number; the header is row 0.
    pub row: usize,
    pub source: String,
    pub target: String,
}

/// A problem attributed to a single input row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportError {
    pub row: usize,
    pub message: String,
}

/// Limits applied to a bulk upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Maximum number of data rows in one upload.
    pub max_rows: usize,
    /// Maximum characters per word when stored.
    pub max_field_len: usize,
    /// How many row errors are reported back to the user.
    pub max_errors_reported: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            max_rows: 1000,
            max_field_len: 120,
            max_errors_reported: 20,
        }
    }
}
