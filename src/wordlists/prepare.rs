//! Word-list artifact preparation
//!
//! Turns arbitrary text into the line-delimited list the game loads: tokens
//! made only of English letters, lowercased, deduplicated and sorted by length
//! then alphabetically. Real-word checking is out of reach here; any
//! alphabetic token is kept.

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Extract the sorted, unique, lowercase alphabetic tokens of `text`
///
/// # Examples
/// ```
/// use wurdel::wordlists::prepare_words;
///
/// let words = prepare_words("The cat sat on the Mat. 42 cats!");
/// assert_eq!(words, ["on", "cat", "sat", "the"]);
/// ```
#[must_use]
pub fn prepare_words(text: &str) -> Vec<String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let unique: FxHashSet<String> = tokens
        .par_iter()
        .filter(|token| token.chars().all(|c| c.is_ascii_alphabetic()))
        .map(|token| token.to_ascii_lowercase())
        .collect();

    let mut words: Vec<String> = unique.into_iter().collect();
    words.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    words
}

/// Write words one per line, without a trailing newline
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub fn write_wordlist<P: AsRef<Path>>(path: P, words: &[String]) -> io::Result<()> {
    fs::write(path, words.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordListStore;

    #[test]
    fn keeps_only_alphabetic_tokens() {
        let words = prepare_words("hello world! it's 2024 caf\u{e9} ok");
        assert_eq!(words, ["ok", "hello"]);
    }

    #[test]
    fn lowercases_and_deduplicates() {
        let words = prepare_words("Crane crane CRANE slate\nSlate\tapple");
        assert_eq!(words, ["apple", "crane", "slate"]);
    }

    #[test]
    fn sorts_by_length_then_alphabet() {
        let words = prepare_words("zebra a bee ant be an");
        assert_eq!(words, ["a", "an", "be", "ant", "bee", "zebra"]);
    }

    #[test]
    fn empty_text_gives_empty_list() {
        assert!(prepare_words("").is_empty());
        assert!(prepare_words("123 !!! ...").is_empty());
    }

    #[test]
    fn written_list_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordlist.txt");
        let words = prepare_words("The quick brown fox jumps over the lazy dog");

        write_wordlist(&path, &words).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.ends_with('\n'));
        let store = WordListStore::from_file(&path, 5).unwrap();
        assert_eq!(store.words(), ["brown", "jumps", "quick"]);
    }
}
