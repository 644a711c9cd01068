//! Word lists for the game
//!
//! Loading the candidate pool, picking a target from it, and preparing the
//! word-list artifact from arbitrary text.

mod embedded;
pub mod loader;
pub mod prepare;
pub mod selector;

use std::fmt;
use std::io;
use std::path::PathBuf;

pub use embedded::{WORDLIST, WORDLIST_COUNT};
pub use loader::WordListStore;
pub use prepare::prepare_words;
pub use selector::select_target;

/// Error type for startup failures around the word list
#[derive(Debug)]
pub enum WordListError {
    /// The artifact is missing or could not be read
    ArtifactUnreadable { path: PathBuf, source: io::Error },
    /// No word in the list has the configured length
    NoCandidateWords { word_length: usize },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArtifactUnreadable { path, source } => {
                write!(f, "Cannot read word list {}: {source}", path.display())
            }
            Self::NoCandidateWords { word_length } => {
                write!(f, "There are no {word_length} letter words in the word list")
            }
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ArtifactUnreadable { source, .. } => Some(source),
            Self::NoCandidateWords { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wordlist_count_matches_const() {
        assert_eq!(WORDLIST.len(), WORDLIST_COUNT);
    }

    #[test]
    fn wordlist_is_lowercase_alphabetic() {
        for &word in WORDLIST {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn wordlist_is_sorted_by_length_then_alphabet() {
        for pair in WORDLIST.windows(2) {
            assert!(
                (pair[0].len(), pair[0]) < (pair[1].len(), pair[1]),
                "'{}' should come before '{}'",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn wordlist_has_default_length_words() {
        assert!(WORDLIST.iter().any(|w| w.len() == 5));
    }

    #[test]
    fn no_candidate_message_names_length() {
        let err = WordListError::NoCandidateWords { word_length: 12 };
        assert_eq!(
            err.to_string(),
            "There are no 12 letter words in the word list"
        );
    }
}
