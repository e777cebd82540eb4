//! Answer comparison for typed practice sessions.
//!
//! Answers are checked in two passes. The *relaxed* form (collapsed
//! whitespace, lowercase, and for Spanish answers vowel accents removed)
//! decides right or wrong. The *strict* form (collapsed whitespace only)
//! then separates an exact answer from a sloppy one.

use crate::types::{ComparisonOutcome, PracticeMode, Verdict};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Base letters whose accents are ignored in Spanish answers.
///
/// `n` is deliberately absent: `ñ` and `n` are different letters.
const SPANISH_VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Characters stripped from both ends of a sentence answer.
const EDGE_PUNCTUATION: &[char] = &[
    ' ', '.', ',', '!', '?', ':', ';', '"', '\'', '(', ')', '[', ']', '{', '}', '¿', '¡',
];

/// Compare a typed answer to the expected answer.
///
/// Total over all inputs. Callers that want "empty answer" to be its own
/// state must check for it before calling.
pub fn evaluate(mode: PracticeMode, provided: &str, expected: &str) -> ComparisonOutcome {
    let verdict = if relaxed_form(mode, provided) != relaxed_form(mode, expected) {
        Verdict::Wrong
    } else if strict_form(mode, provided) != strict_form(mode, expected) {
        Verdict::Warning
    } else {
        Verdict::Exact
    };

    ComparisonOutcome {
        verdict,
        canonical: expected.to_string(),
    }
}

/// Compare a typed answer against a canonical answer and its accepted variants.
///
/// An exact match against any candidate wins over a relaxed match. The
/// canonical answer is always a candidate. The outcome reports the canonical
/// answer, or the first alternative when the canonical answer is blank.
pub fn evaluate_any(
    mode: PracticeMode,
    provided: &str,
    canonical: &str,
    alternatives: &[String],
) -> ComparisonOutcome {
    let canonical = canonical.trim();
    let mut candidates: Vec<&str> = alternatives
        .iter()
        .map(String::as_str)
        .filter(|candidate| !candidate.trim().is_empty())
        .collect();
    if !canonical.is_empty() && !candidates.contains(&canonical) {
        candidates.push(canonical);
    }

    let strict_answer = strict_form(mode, provided);
    let verdict = if candidates
        .iter()
        .any(|candidate| strict_form(mode, candidate) == strict_answer)
    {
        Verdict::Exact
    } else {
        let relaxed_answer = relaxed_form(mode, provided);
        if candidates
            .iter()
            .any(|candidate| relaxed_form(mode, candidate) == relaxed_answer)
        {
            Verdict::Warning
        } else {
            Verdict::Wrong
        }
    };

    let reported = if canonical.is_empty() {
        candidates.first().copied().unwrap_or_default()
    } else {
        canonical
    };

    ComparisonOutcome {
        verdict,
        canonical: reported.to_string(),
    }
}

/// Trim and collapse every whitespace run to a single space.
pub fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-preserving form used to tell `Exact` from `Warning`.
pub fn strict_form(mode: PracticeMode, value: &str) -> String {
    let collapsed = normalize_whitespace(value);
    let trimmed = if mode.is_sentence() {
        collapsed.trim_matches(EDGE_PUNCTUATION)
    } else {
        collapsed.as_str()
    };
    trimmed.nfc().collect()
}

/// Case-insensitive form used to tell `Wrong` from the rest.
pub fn relaxed_form(mode: PracticeMode, value: &str) -> String {
    let lowered = strict_form(mode, value).to_lowercase();
    if mode.expects_spanish() {
        fold_vowel_accents(&lowered)
    } else {
        lowered
    }
}

/// Remove diacritics sitting on `a e i o u`, keep every other mark.
///
/// Expects lowercase input.
pub fn fold_vowel_accents(value: &str) -> String {
    let mut rebuilt = String::with_capacity(value.len());
    let mut previous_base: Option<char> = None;

    for c in value.nfd() {
        if is_combining_mark(c) {
            if previous_base.is_some_and(|base| SPANISH_VOWELS.contains(&base)) {
                continue;
            }
            rebuilt.push(c);
            continue;
        }
        rebuilt.push(c);
        previous_base = Some(c);
    }

    rebuilt.nfc().collect()
}
