//! Game configuration

use std::fmt;

/// Default number of letters in the target word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of attempts per game
pub const DEFAULT_TOTAL_GUESSES: usize = 6;

/// Placeholder character for attempts that have not been made yet
pub const FILL_CHAR: char = '_';

/// Word length and attempt budget for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub total_guesses: usize,
}

/// Error type for unusable configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWordLength,
    ZeroGuesses,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWordLength => write!(f, "Word length must be at least 1"),
            Self::ZeroGuesses => write!(f, "Number of guesses must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Create a configuration, rejecting empty words and empty attempt budgets
    ///
    /// # Errors
    /// Returns `ConfigError` if either value is zero.
    ///
    /// # Examples
    /// ```
    /// use wurdel::core::GameConfig;
    ///
    /// let config = GameConfig::new(6, 8).unwrap();
    /// assert_eq!(config.word_length, 6);
    /// assert!(GameConfig::new(0, 6).is_err());
    /// ```
    pub const fn new(word_length: usize, total_guesses: usize) -> Result<Self, ConfigError> {
        if word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if total_guesses == 0 {
            return Err(ConfigError::ZeroGuesses);
        }
        Ok(Self {
            word_length,
            total_guesses,
        })
    }

    /// An attempt slot that has not been filled yet
    #[must_use]
    pub fn placeholder(&self) -> String {
        FILL_CHAR.to_string().repeat(self.word_length)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            total_guesses: DEFAULT_TOTAL_GUESSES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five_by_six() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.total_guesses, 6);
    }

    #[test]
    fn zero_values_rejected() {
        assert_eq!(GameConfig::new(0, 6), Err(ConfigError::ZeroWordLength));
        assert_eq!(GameConfig::new(5, 0), Err(ConfigError::ZeroGuesses));
    }

    #[test]
    fn placeholder_matches_length() {
        let config = GameConfig::new(7, 6).unwrap();
        assert_eq!(config.placeholder(), "_______");
    }
}
