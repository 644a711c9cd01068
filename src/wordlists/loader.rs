//! Word list loading
//!
//! Reads the word-list artifact (or the embedded default) and keeps only the
//! words of the configured length. Entries are assumed to be lowercase and
//! alphabetic already; no further validation happens here.

use super::{WORDLIST, WordListError};
use std::fs;
use std::path::Path;
use tracing::info;

/// Candidate pool for one word length, read-only after load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListStore {
    word_length: usize,
    words: Vec<String>,
}

impl WordListStore {
    /// Load words from a file, one per line
    ///
    /// # Errors
    ///
    /// Returns `WordListError::ArtifactUnreadable` if the file cannot be read.
    ///
    /// # Examples
    /// ```no_run
    /// use wurdel::wordlists::WordListStore;
    ///
    /// let store = WordListStore::from_file("wordlist.txt", 5).unwrap();
    /// println!("Loaded {} words", store.len());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|source| WordListError::ArtifactUnreadable {
                path: path.to_path_buf(),
                source,
            })?;

        let store = Self::from_words(content.lines(), word_length);
        info!(
            path = %path.display(),
            word_length,
            words = store.len(),
            "word list loaded"
        );
        Ok(store)
    }

    /// Build a store from in-memory words, such as the embedded list
    ///
    /// # Examples
    /// ```
    /// use wurdel::wordlists::WordListStore;
    ///
    /// let store = WordListStore::from_words(["cat", "crane", "slate", "planet"], 5);
    /// assert_eq!(store.words(), ["crane", "slate"]);
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_string())
            .filter(|word| !word.is_empty() && word.chars().count() == word_length)
            .collect();

        Self { word_length, words }
    }

    /// Build a store from the word list compiled into the binary
    #[must_use]
    pub fn embedded(word_length: usize) -> Self {
        let store = Self::from_words(WORDLIST, word_length);
        info!(word_length, words = store.len(), "embedded word list loaded");
        store
    }

    /// Fail unless at least one word of the configured length was loaded
    ///
    /// # Errors
    ///
    /// Returns `WordListError::NoCandidateWords` for an empty pool.
    pub fn ensure_candidates(&self) -> Result<(), WordListError> {
        if self.words.is_empty() {
            return Err(WordListError::NoCandidateWords {
                word_length: self.word_length,
            });
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn filters_by_exact_length() {
        let store = WordListStore::from_words(["a", "to", "cat", "crane", "slate", "planet"], 5);
        assert_eq!(store.words(), ["crane", "slate"]);
        assert_eq!(store.word_length(), 5);
    }

    #[test]
    fn trims_and_skips_blank_lines() {
        let store = WordListStore::from_words(["  crane ", "", "   ", "slate\r"], 5);
        assert_eq!(store.words(), ["crane", "slate"]);
    }

    #[test]
    fn empty_pool_for_unused_length() {
        let store = WordListStore::from_words(WORDLIST, 12);
        assert!(store.is_empty());
    }

    #[test]
    fn empty_pool_fails_candidate_check() {
        let store = WordListStore::from_words(WORDLIST, 12);
        let err = store.ensure_candidates().unwrap_err();
        assert!(matches!(
            err,
            WordListError::NoCandidateWords { word_length: 12 }
        ));
        assert_eq!(
            err.to_string(),
            "There are no 12 letter words in the word list"
        );

        assert!(WordListStore::embedded(5).ensure_candidates().is_ok());
    }

    #[test]
    fn embedded_list_has_five_letter_words() {
        let store = WordListStore::embedded(5);
        assert!(!store.is_empty());
        assert!(store.words().iter().all(|w| w.len() == 5));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "at\ncat\ncrane\nslate\nplanet").unwrap();

        let store = WordListStore::from_file(file.path(), 5).unwrap();
        assert_eq!(store.words(), ["crane", "slate"]);
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = WordListStore::from_file(&path, 5).unwrap_err();
        assert!(matches!(
            err,
            WordListError::ArtifactUnreadable { path: ref p, .. } if *p == path
        ));
    }
}
