//! Per-letter feedback for an attempt
//!
//! Each position is judged on its own:
//! - Correct   = same letter at the same position of the target
//! - Misplaced = letter appears somewhere in the target
//! - Wrong     = an English letter absent from the target
//! - Unfilled  = anything else (the placeholder of an unused attempt)
//!
//! Letter multiplicity is not tracked: a letter that appears once in the
//! target is reported as `Misplaced` at every position it is guessed in
//! without a positional match.

/// Feedback kind for a single letter at a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClassification {
    Correct,
    Misplaced,
    Wrong,
    Unfilled,
}

/// A letter of an attempt together with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLetter {
    pub letter: char,
    pub classification: LetterClassification,
}

/// Classify every position of `attempt` against `target`
///
/// Both strings are expected to be the same length and in the same case. If
/// they differ in length the output is as long as the shorter one.
///
/// # Examples
/// ```
/// use wurdel::core::{LetterClassification::*, classify};
///
/// let kinds: Vec<_> = classify("GRAPE", "APPLE")
///     .iter()
///     .map(|c| c.classification)
///     .collect();
/// assert_eq!(kinds, [Wrong, Wrong, Misplaced, Misplaced, Correct]);
/// ```
#[must_use]
pub fn classify(attempt: &str, target: &str) -> Vec<ClassifiedLetter> {
    attempt
        .chars()
        .zip(target.chars())
        .map(|(letter, expected)| {
            let classification = if letter == expected {
                LetterClassification::Correct
            } else if target.contains(letter) {
                LetterClassification::Misplaced
            } else if letter.is_ascii_alphabetic() {
                LetterClassification::Wrong
            } else {
                LetterClassification::Unfilled
            };
            ClassifiedLetter {
                letter,
                classification,
            }
        })
        .collect()
}
