//! Word-list preparation command
//!
//! Builds the word-list artifact from an arbitrary text file.

use crate::wordlists::prepare::{prepare_words, write_wordlist};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Result of preparing a word list
#[derive(Debug)]
pub struct PrepareSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub total_words: usize,
    /// Number of words of each length
    pub by_length: BTreeMap<usize, usize>,
}

/// Read `input`, extract its words and write them to `output`
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// written.
pub fn run_prepare(input: &Path, output: &Path) -> Result<PrepareSummary> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));

    spinner.set_message(format!("Reading {}", input.display()));
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input text {}", input.display()))?;

    spinner.set_message("Extracting words");
    let words = prepare_words(&text);

    spinner.set_message(format!("Writing {}", output.display()));
    write_wordlist(output, &words)
        .with_context(|| format!("Failed to write word list {}", output.display()))?;
    spinner.finish_and_clear();

    let summary = PrepareSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        total_words: words.len(),
        by_length: count_by_length(&words),
    };
    info!(
        input = %input.display(),
        output = %output.display(),
        words = summary.total_words,
        "word list prepared"
    );

    Ok(summary)
}

fn count_by_length(words: &[String]) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    for word in words {
        *counts.entry(word.len()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordListStore;

    #[test]
    fn prepares_file_and_counts_lengths() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("book.txt");
        let output = dir.path().join("wordlist.txt");
        fs::write(&input, "It was the best of times, it was the worst of times.\n").unwrap();

        let summary = run_prepare(&input, &output).unwrap();

        // "times," and "times." carry punctuation and are dropped
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "it\nof\nthe\nwas\nbest\nworst"
        );
        assert_eq!(summary.total_words, 6);
        assert_eq!(summary.by_length.get(&2), Some(&2));
        assert_eq!(summary.by_length.get(&3), Some(&2));
        assert_eq!(summary.by_length.get(&5), Some(&1));

        let store = WordListStore::from_file(&output, 5).unwrap();
        assert_eq!(store.words(), ["worst"]);
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_prepare(&dir.path().join("nope.txt"), &dir.path().join("out.txt"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read input text"));
    }
}
