//! The `vocab practice` command.

use std::io::{self, BufRead, IsTerminal};

use anyhow::{Context, Result};
use dialoguer::Input;
use vocab_core::{PracticeMode, PracticeSession, SessionError, SessionState, Verdict};

use crate::config::Config;
use crate::store::WordBook;

pub fn execute(config: &Config, mode: PracticeMode, limit: usize) -> Result<()> {
    let mut book = WordBook::load(&config.book, config.import_options())?;
    let mut session = PracticeSession::start(&mut book, mode, limit)?;

    if session.is_empty() {
        println!("No words to practice. Import some with `vocab import`.");
        return Ok(());
    }

    println!("Practicing {} word(s) ({mode}).", session.len());
    let mut answers = AnswerReader::new();

    while let Some(prompt) = session.current_prompt().map(str::to_string) {
        let Some(answer) = answers.next(&prompt)? else {
            println!("\nStopped early.");
            break;
        };

        let outcome = match session.submit(&answer) {
            Ok(outcome) => outcome,
            Err(SessionError::EmptyAnswer) => {
                println!("Please type an answer.");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        println!("{}", outcome.verdict.message());
        if outcome.verdict != Verdict::Exact {
            println!("Expected: {}", outcome.canonical);
        }

        if session.advance()? == &SessionState::Finished {
            break;
        }
    }

    let score = session.score();
    println!(
        "\nScore: {}/{} correct ({} exact, {} with accent or case slips).",
        score.correct(),
        session.len(),
        score.exact,
        score.warning
    );

    Ok(())
}

/// Reads answers from an interactive prompt, or line by line when piped.
struct AnswerReader {
    /// `None` when answering interactively.
    lines: Option<io::Lines<io::StdinLock<'static>>>,
}

impl AnswerReader {
    fn new() -> Self {
        let stdin = io::stdin();
        let lines = if stdin.is_terminal() {
            None
        } else {
            Some(stdin.lock().lines())
        };
        Self { lines }
    }

    /// `None` once input is exhausted.
    fn next(&mut self, prompt: &str) -> Result<Option<String>> {
        let Some(lines) = self.lines.as_mut() else {
            let answer: String = Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .context("failed to read answer")?;
            return Ok(Some(answer));
        };

        println!("{prompt}");
        match lines.next() {
            Some(line) => Ok(Some(line.context("failed to read answer")?)),
            None => Ok(None),
        }
    }
}
