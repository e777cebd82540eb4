//! Settings shared by every command, read from flags, the environment or `.env`.

use std::path::PathBuf;

use clap::Args;
use vocab_core::ImportOptions;

#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Word book file
    #[arg(long, global = true, env = "VOCAB_BOOK", default_value = "words.json")]
    pub book: PathBuf,

    /// Maximum data rows per upload
    #[arg(long, global = true, env = "VOCAB_MAX_ROWS", default_value_t = 1000)]
    pub max_rows: usize,

    /// Maximum characters per stored word
    #[arg(long, global = true, env = "VOCAB_MAX_FIELD_LEN", default_value_t = 120)]
    pub max_field_len: usize,

    /// Row errors shown after an upload
    #[arg(long, global = true, env = "VOCAB_MAX_ERRORS", default_value_t = 20)]
    pub max_errors: usize,
}

impl Config {
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions {
            max_rows: self.max_rows,
            max_field_len: self.max_field_len,
            max_errors_reported: self.max_errors,
        }
    }
}
