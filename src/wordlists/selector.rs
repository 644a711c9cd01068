//! Target word selection

use super::{WordListError, WordListStore};
use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::debug;

/// Pick a target uniformly at random from the store, uppercased
///
/// # Errors
///
/// Returns `WordListError::NoCandidateWords` if the store holds no words of
/// its configured length.
///
/// # Examples
/// ```
/// use wurdel::wordlists::{WordListStore, select_target};
///
/// let store = WordListStore::from_words(["crane"], 5);
/// let target = select_target(&store, &mut rand::rng()).unwrap();
/// assert_eq!(target, "CRANE");
/// ```
pub fn select_target<R: Rng + ?Sized>(
    store: &WordListStore,
    rng: &mut R,
) -> Result<String, WordListError> {
    let word = store
        .words()
        .choose(rng)
        .ok_or(WordListError::NoCandidateWords {
            word_length: store.word_length(),
        })?;

    debug!(candidates = store.len(), "target selected");
    Ok(word.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDLIST;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn selects_uppercased_member() {
        let store = WordListStore::from_words(["crane", "slate", "apple"], 5);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let target = select_target(&store, &mut rng).unwrap();
            assert!(
                store.words().iter().any(|w| w.to_uppercase() == target),
                "{target} not in store"
            );
        }
    }

    #[test]
    fn never_returns_other_length() {
        for length in 1..=5 {
            let store = WordListStore::from_words(WORDLIST, length);
            if store.is_empty() {
                continue;
            }
            let mut rng = StdRng::seed_from_u64(length as u64);
            for _ in 0..50 {
                let target = select_target(&store, &mut rng).unwrap();
                assert_eq!(target.chars().count(), length);
            }
        }
    }

    #[test]
    fn every_word_can_be_chosen() {
        let store = WordListStore::from_words(["crane", "slate", "apple"], 5);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = rustc_hash::FxHashSet::default();

        for _ in 0..200 {
            seen.insert(select_target(&store, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn empty_pool_is_no_candidate_words() {
        let store = WordListStore::from_words(WORDLIST, 12);
        let err = select_target(&store, &mut rand::rng()).unwrap_err();
        assert!(matches!(
            err,
            WordListError::NoCandidateWords { word_length: 12 }
        ));
    }
}
