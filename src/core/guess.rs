//! Structural validation of raw guesses

use std::fmt;

/// A guess that passed validation, held in uppercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess(String);

impl Guess {
    /// Get the guess as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reason a raw guess was turned down
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    DuplicateGuess(String),
    InvalidLength { expected: usize, actual: usize },
    InvalidCharacter(char),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateGuess(guess) => write!(f, "You've already guessed {guess}."),
            Self::InvalidLength { expected, .. } => {
                write!(f, "Your guess must be {expected} letters.")
            }
            Self::InvalidCharacter(c) => {
                write!(f, "Invalid letter: \"{c}\". Please stick to English letters.")
            }
        }
    }
}

impl std::error::Error for GuessError {}

/// Validate a raw guess against the session so far
///
/// Rules are checked in order and the first failure is reported:
/// 1. the uppercased guess must not repeat a previous guess
/// 2. it must be exactly `word_length` characters
/// 3. every character must be an English letter
///
/// # Errors
/// Returns the `GuessError` for the first rule that fails.
///
/// # Examples
/// ```
/// use wurdel::core::{GuessError, validate_guess};
///
/// let previous = vec!["CRANE".to_string()];
/// assert_eq!(validate_guess("slate", &previous, 5).unwrap().as_str(), "SLATE");
/// assert!(matches!(
///     validate_guess("crane", &previous, 5),
///     Err(GuessError::DuplicateGuess(_))
/// ));
/// ```
pub fn validate_guess(
    raw: &str,
    previous: &[String],
    word_length: usize,
) -> Result<Guess, GuessError> {
    let guess = raw.to_uppercase();

    if previous.iter().any(|prev| *prev == guess) {
        return Err(GuessError::DuplicateGuess(guess));
    }

    let actual = guess.chars().count();
    if actual != word_length {
        return Err(GuessError::InvalidLength {
            expected: word_length,
            actual,
        });
    }

    if let Some(invalid) = guess.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(GuessError::InvalidCharacter(invalid));
    }

    Ok(Guess(guess))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_uppercases() {
        let guess = validate_guess("CrAnE", &[], 5).unwrap();
        assert_eq!(guess.as_str(), "CRANE");
        assert_eq!(guess.to_string(), "CRANE");
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            validate_guess("cranes", &[], 5),
            Err(GuessError::InvalidLength {
                expected: 5,
                actual: 6
            })
        );
        assert!(matches!(
            validate_guess("", &[], 5),
            Err(GuessError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn rejects_first_non_letter() {
        assert_eq!(
            validate_guess("cr4n!", &[], 5),
            Err(GuessError::InvalidCharacter('4'))
        );
        assert_eq!(
            validate_guess("cr ne", &[], 5),
            Err(GuessError::InvalidCharacter(' '))
        );
        assert_eq!(
            validate_guess("crané", &[], 5),
            Err(GuessError::InvalidCharacter('É'))
        );
    }

    #[test]
    fn rejects_repeat_in_any_case() {
        let previous = vec!["CRANE".to_string(), "SLATE".to_string()];
        assert_eq!(
            validate_guess("slate", &previous, 5),
            Err(GuessError::DuplicateGuess("SLATE".to_string()))
        );
    }

    #[test]
    fn duplicate_checked_before_length() {
        // A previous guess is always the right length, so only a repeat of
        // an odd-length entry shows the ordering
        let previous = vec!["AB".to_string()];
        assert!(matches!(
            validate_guess("ab", &previous, 5),
            Err(GuessError::DuplicateGuess(_))
        ));
    }

    #[test]
    fn messages_are_distinct() {
        let messages = [
            GuessError::DuplicateGuess("CRANE".into()).to_string(),
            GuessError::InvalidLength {
                expected: 5,
                actual: 3,
            }
            .to_string(),
            GuessError::InvalidCharacter('3').to_string(),
        ];
        assert_eq!(messages[0], "You've already guessed CRANE.");
        assert_eq!(messages[1], "Your guess must be 5 letters.");
        assert_eq!(
            messages[2],
            "Invalid letter: \"3\". Please stick to English letters."
        );
    }
}
