//! The `vocab import` command.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use vocab_core::{ImportError, ImportSummary, SubmitReport, UploadState, UploadWorkflow};

use crate::config::Config;
use crate::reader::read_rows;
use crate::store::WordBook;

#[derive(Serialize)]
struct ImportOutput<'a> {
    file: ImportSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    store: Option<&'a SubmitReport>,
}

pub fn execute(config: &Config, file: PathBuf, dry_run: bool, json: bool) -> Result<()> {
    let rows = read_rows(&file).with_context(|| format!("failed to read {}", file.display()))?;
    let options = config.import_options();
    let max_errors = options.max_errors_reported;

    let mut workflow = UploadWorkflow::new(options.clone());
    let file_summary = match workflow.parse(&rows)? {
        UploadState::Validated(batch) => batch.summary(max_errors),
        UploadState::ParseFailed(message) => bail!("{}: {message}", file.display()),
        other => bail!("unexpected upload state: {}", other.name()),
    };

    if dry_run {
        if json {
            let output = ImportOutput {
                file: file_summary,
                store: None,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{} word pair(s) ready to import.", file_summary.accepted_count);
            print_errors(
                "Unusable rows in file",
                &file_summary.errors,
                file_summary.rejected_count,
            );
        }
        return Ok(());
    }

    let mut book = WordBook::load(&config.book, options)?;
    workflow.submit(&mut book)?;
    book.save(&config.book)?;

    let result = match workflow.state() {
        UploadState::Succeeded(result) | UploadState::PartiallyRejected(result) => result,
        other => bail!("unexpected upload state: {}", other.name()),
    };
    let report = &result.report;

    if json {
        let output = ImportOutput {
            file: file_summary,
            store: Some(report),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "Saved {} word(s), rejected {}. Word book now holds {} word(s).",
        report.saved_count,
        result.rejected_count(),
        book.len()
    );
    let file_errors = &result.file_errors;
    print_errors(
        "Unusable rows in file",
        &file_errors[..file_errors.len().min(max_errors)],
        file_errors.len(),
    );
    print_errors("Rejected words", &report.errors, report.rejected_count);

    Ok(())
}

/// Print a titled error list; `errors` may be a prefix of `total` errors.
fn print_errors(title: &str, errors: &[ImportError], total: usize) {
    if total == 0 {
        return;
    }

    println!("\n{title} ({total}):");
    for error in errors {
        println!("  row {}: {}", error.row, error.message);
    }
    if total > errors.len() {
        println!("  ... and {} more", total - errors.len());
    }
}
