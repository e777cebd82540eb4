//! Practice session state machine.

use super::WordSource;
use crate::comparator::evaluate;
use crate::error::SessionError;
use crate::types::{ComparisonOutcome, PracticeMode, Verdict, WordPair};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Largest batch a session pulls from its source.
pub const MAX_SESSION_WORDS: usize = 50;

/// Where a session currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Prompting { index: usize },
    Answered { index: usize, outcome: ComparisonOutcome },
    Finished,
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            Self::Prompting { .. } => "prompting",
            Self::Answered { .. } => "answered",
            Self::Finished => "finished",
        }
    }
}

/// Running tally of verdicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub exact: u32,
    pub warning: u32,
    pub wrong: u32,
}

impl Score {
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Exact => self.exact += 1,
            Verdict::Warning => self.warning += 1,
            Verdict::Wrong => self.wrong += 1,
        }
    }

    /// Exact and warning answers.
    pub fn correct(&self) -> u32 {
        self.exact + self.warning
    }

    pub fn total(&self) -> u32 {
        self.correct() + self.wrong
    }
}

/// A sequence of prompts drawn from a [`WordSource`].
#[derive(Debug, Clone)]
pub struct PracticeSession {
    pub id: Uuid,
    pub mode: PracticeMode,
    pub started_at: DateTime<Utc>,
    words: Vec<WordPair>,
    state: SessionState,
    score: Score,
}

impl PracticeSession {
    /// Pull up to `limit` words (clamped to `1..=50`) and start prompting.
    pub fn start<S: WordSource + ?Sized>(
        source: &mut S,
        mode: PracticeMode,
        limit: usize,
    ) -> Result<Self, SessionError> {
        let limit = limit.clamp(1, MAX_SESSION_WORDS);
        let words: Vec<WordPair> = source
            .fetch(limit)
            .map_err(SessionError::Source)?
            .into_iter()
            .filter(|pair| !mode.expected_for(pair).trim().is_empty())
            .take(limit)
            .collect();

        let session = Self::with_words(mode, words);
        tracing::debug!(
            id = %session.id,
            %mode,
            words = session.words.len(),
            "practice session started"
        );
        Ok(session)
    }

    /// Start a session over a fixed word list.
    pub fn with_words(mode: PracticeMode, words: Vec<WordPair>) -> Self {
        let state = if words.is_empty() {
            SessionState::Finished
        } else {
            SessionState::Prompting { index: 0 }
        };

        Self {
            id: Uuid::new_v4(),
            mode,
            started_at: Utc::now(),
            words,
            state,
            score: Score::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The word currently asked or just answered.
    pub fn current_word(&self) -> Option<&WordPair> {
        match self.state {
            SessionState::Prompting { index } | SessionState::Answered { index, .. } => {
                self.words.get(index)
            }
            SessionState::Finished => None,
        }
    }

    /// Text shown to the learner for the current word.
    pub fn current_prompt(&self) -> Option<&str> {
        self.current_word().map(|pair| self.mode.prompt_for(pair))
    }

    /// Check an answer for the current word.
    ///
    /// A blank answer is refused and the word stays open.
    pub fn submit(&mut self, answer: &str) -> Result<ComparisonOutcome, SessionError> {
        let SessionState::Prompting { index } = self.state else {
            return Err(self.invalid("submit"));
        };

        let answer = answer.trim();
        if answer.is_empty() {
            return Err(SessionError::EmptyAnswer);
        }

        let expected = self.mode.expected_for(&self.words[index]);
        let outcome = evaluate(self.mode, answer, expected);
        self.score.record(outcome.verdict);
        tracing::debug!(index, verdict = ?outcome.verdict, "answer checked");

        self.state = SessionState::Answered {
            index,
            outcome: outcome.clone(),
        };
        Ok(outcome)
    }

    /// Move past an answered word.
    pub fn advance(&mut self) -> Result<&SessionState, SessionError> {
        let SessionState::Answered { index, .. } = self.state else {
            return Err(self.invalid("advance"));
        };

        self.state = if index + 1 < self.words.len() {
            SessionState::Prompting { index: index + 1 }
        } else {
            tracing::debug!(
                id = %self.id,
                correct = self.score.correct(),
                total = self.score.total(),
                "practice session finished"
            );
            SessionState::Finished
        };
        Ok(&self.state)
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::InvalidState {
            state: self.state.name(),
            action,
        }
    }
}
