//! The `vocab check` command.

use anyhow::{bail, Result};
use vocab_core::{evaluate, evaluate_any, PracticeMode, Verdict};

pub fn execute(
    mode: PracticeMode,
    answer: String,
    expected: String,
    alternatives: Vec<String>,
    json: bool,
) -> Result<()> {
    if answer.trim().is_empty() {
        bail!("answer is empty");
    }

    let outcome = if alternatives.is_empty() {
        evaluate(mode, answer.trim(), &expected)
    } else {
        evaluate_any(mode, answer.trim(), &expected, &alternatives)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("{}", outcome.verdict.message());
    if outcome.verdict != Verdict::Exact {
        println!("Expected: {}", outcome.canonical);
    }

    Ok(())
}
