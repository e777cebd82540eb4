//! JSON-file word book standing in for the remote word store.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vocab_core::{ImportError, ImportOptions, SubmitReport, WordPair, WordSink, WordSource};

/// A stored word, keyed by its lowercased Spanish text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredWord {
    pub word_id: String,
    pub spanish: String,
    pub bulgarian: String,
    pub updated_at: DateTime<Utc>,
}

impl StoredWord {
    pub fn to_pair(&self) -> WordPair {
        WordPair::new(self.spanish.clone(), self.bulgarian.clone())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WordBook {
    words: BTreeMap<String, StoredWord>,
    #[serde(skip)]
    options: ImportOptions,
}

impl WordBook {
    pub fn new(options: ImportOptions) -> Self {
        Self {
            words: BTreeMap::new(),
            options,
        }
    }

    /// Load a book from disk; a missing file is an empty book.
    pub fn load(path: &Path, options: ImportOptions) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "word book not found, starting empty");
            return Ok(Self::new(options));
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read word book {}", path.display()))?;
        let mut book: WordBook = serde_json::from_str(&content)
            .with_context(|| format!("invalid word book {}", path.display()))?;
        book.options = options;
        Ok(book)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("failed to write word book {}", path.display()))?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &StoredWord> {
        self.words.values()
    }

    pub fn get(&self, spanish: &str) -> Option<&StoredWord> {
        self.words.get(&spanish.trim().to_lowercase())
    }

    fn check(&self, pair: &WordPair) -> Result<(String, String), String> {
        let spanish = pair.source_text.trim();
        let bulgarian = pair.target_text.trim();

        if spanish.is_empty() || bulgarian.is_empty() {
            return Err("Both 'spanish' and 'bulgarian' are required.".to_string());
        }

        let max = self.options.max_field_len;
        if spanish.chars().count() > max || bulgarian.chars().count() > max {
            return Err(format!("Each field must be {max} characters or fewer."));
        }

        Ok((spanish.to_string(), bulgarian.to_string()))
    }
}

impl WordSink for WordBook {
    fn submit(&mut self, words: &[WordPair]) -> std::result::Result<SubmitReport, String> {
        if words.len() > self.options.max_rows {
            return Err(format!(
                "'items' cannot contain more than {} rows.",
                self.options.max_rows
            ));
        }

        let processed_at = Utc::now();
        let mut valid: BTreeMap<String, StoredWord> = BTreeMap::new();
        let mut errors = Vec::new();

        for (idx, pair) in words.iter().enumerate() {
            match self.check(pair) {
                Ok((spanish, bulgarian)) => {
                    let word_id = spanish.to_lowercase();
                    valid.insert(
                        word_id.clone(),
                        StoredWord {
                            word_id,
                            spanish,
                            bulgarian,
                            updated_at: processed_at,
                        },
                    );
                }
                Err(message) => errors.push(ImportError {
                    row: idx + 1,
                    message,
                }),
            }
        }

        let saved_count = valid.len();
        let rejected_count = errors.len();
        self.words.extend(valid);
        errors.truncate(self.options.max_errors_reported);

        tracing::debug!(saved_count, rejected_count, total = self.words.len(), "word book updated");
        Ok(SubmitReport {
            saved_count,
            rejected_count,
            errors,
            processed_at,
        })
    }
}

impl WordSource for WordBook {
    fn fetch(&mut self, limit: usize) -> std::result::Result<Vec<WordPair>, String> {
        Ok(self.words.values().take(limit).map(StoredWord::to_pair).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stores_complete_pairs() {
        let mut book = WordBook::default();
        let report = book
            .submit(&[WordPair::new("Aprender", "уча"), WordPair::new("hablar", "говоря")])
            .unwrap();
        assert_eq!(report.saved_count, 2);
        assert_eq!(report.rejected_count, 0);
        assert_eq!(book.get("aprender").unwrap().spanish, "Aprender");
    }

    #[test]
    fn rejects_one_sided_pairs() {
        let mut book = WordBook::default();
        let report = book
            .submit(&[WordPair::new("gato", ""), WordPair::new("perro", "куче")])
            .unwrap();
        assert_eq!(report.saved_count, 1);
        assert_eq!(
            report.errors,
            vec![ImportError {
                row: 1,
                message: "Both 'spanish' and 'bulgarian' are required.".to_string(),
            }]
        );
    }

    #[test]
    fn rejects_long_fields() {
        let mut book = WordBook::default();
        let long = "a".repeat(121);
        let report = book.submit(&[WordPair::new(long, "дълго")]).unwrap();
        assert_eq!(report.saved_count, 0);
        assert_eq!(report.errors[0].message, "Each field must be 120 characters or fewer.");
    }

    #[test]
    fn upserts_case_insensitively() {
        let mut book = WordBook::default();
        book.submit(&[WordPair::new("Casa", "къща"), WordPair::new("casa", "дом")])
            .unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("CASA").unwrap().bulgarian, "дом");

        book.submit(&[WordPair::new("CASA", "жилище")]).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("casa").unwrap().bulgarian, "жилище");
    }

    #[test]
    fn caps_reported_errors() {
        let options = ImportOptions {
            max_errors_reported: 2,
            ..ImportOptions::default()
        };
        let mut book = WordBook::new(options);
        let words: Vec<WordPair> = (0..5).map(|i| WordPair::new(format!("w{i}"), "")).collect();
        let report = book.submit(&words).unwrap();
        assert_eq!(report.rejected_count, 5);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn refuses_oversized_uploads() {
        let options = ImportOptions {
            max_rows: 1,
            ..ImportOptions::default()
        };
        let mut book = WordBook::new(options);
        let err = book
            .submit(&[WordPair::new("a", "б"), WordPair::new("b", "в")])
            .unwrap_err();
        assert_eq!(err, "'items' cannot contain more than 1 rows.");
    }

    #[test]
    fn saves_and_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("words.json");

        let mut book = WordBook::default();
        book.submit(&[WordPair::new("sol", "слънце")]).unwrap();
        book.save(&path).unwrap();

        let mut loaded = WordBook::load(&path, ImportOptions::default()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.fetch(10).unwrap(), vec![WordPair::new("sol", "слънце")]);
    }
}
