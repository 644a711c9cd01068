//! Running per-letter summary of a session

use super::classification::{ClassifiedLetter, LetterClassification};
use super::config::FILL_CHAR;

/// Most recent classification seen for each letter `A`-`Z`
///
/// Letters that have not been guessed yet map to `None`. Later observations
/// overwrite earlier ones, so a letter that was `Correct` in one attempt and
/// `Misplaced` in the next reads `Misplaced`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterStatusBoard {
    statuses: [Option<LetterClassification>; 26],
}

impl LetterStatusBoard {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statuses: [None; 26],
        }
    }

    /// Fold one classified attempt into the board, left to right
    pub fn record(&mut self, attempt: &[ClassifiedLetter]) {
        for classified in attempt {
            if classified.letter == FILL_CHAR {
                continue;
            }
            if let Some(slot) = letter_index(classified.letter) {
                self.statuses[slot] = Some(classified.classification);
            }
        }
    }

    /// Classification currently held for `letter`, in either case
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterClassification> {
        letter_index(letter).and_then(|slot| self.statuses[slot])
    }

    /// All 26 letters in alphabetical order with their status
    pub fn letters(&self) -> impl Iterator<Item = (char, Option<LetterClassification>)> + '_ {
        ('A'..='Z').zip(self.statuses.iter().copied())
    }
}

impl Default for LetterStatusBoard {
    fn default() -> Self {
        Self::new()
    }
}

fn letter_index(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| (upper as u8 - b'A') as usize)
}
