//! Game session state machine
//!
//! A session owns the target word, a fixed number of attempt slots, the index
//! of the slot being played and the outcome. Slots start as placeholders and
//! are filled one at a time; once the outcome is terminal the session accepts
//! nothing further.

use super::board::LetterStatusBoard;
use super::classification::{ClassifiedLetter, LetterClassification, classify};
use super::config::GameConfig;
use super::guess::{Guess, GuessError, validate_guess};
use std::fmt;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    /// An attempt matched the target exactly
    Won,
    /// Every attempt was used without a match
    Lost,
    /// The player left before the game was decided
    Interrupted,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Error type for misuse of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The session already reached a terminal outcome
    Finished(Outcome),
    /// A target or guess does not have the configured word length
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished(outcome) => write!(f, "Game is already over ({outcome:?})"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Expected a {expected} letter word, got {actual} letters")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Everything a renderer needs to draw the board at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub headline: String,
    /// One row per attempt slot, placeholders included
    pub rows: Vec<Vec<ClassifiedLetter>>,
    /// Alphabet-ordered letter statuses
    pub letters: Vec<(char, Option<LetterClassification>)>,
    pub outcome: Outcome,
    /// Only revealed once the game is over
    pub target: Option<String>,
}

impl Frame {
    /// Closing line for a finished game
    ///
    /// Returns `None` while the game is still in progress.
    #[must_use]
    pub fn verdict(&self) -> Option<String> {
        let target = self.target.as_deref()?;
        match self.outcome {
            Outcome::InProgress => None,
            Outcome::Won => Some(format!("Correct, the word is {target}")),
            Outcome::Lost | Outcome::Interrupted => Some(format!("Sorry, the word was {target}")),
        }
    }
}

/// A single game from target selection to outcome
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    target: String,
    attempts: Vec<String>,
    index: usize,
    completed: usize,
    outcome: Outcome,
    board: LetterStatusBoard,
}

impl GameSession {
    /// Start a session with every attempt slot blank
    ///
    /// # Errors
    /// Returns `SessionError::LengthMismatch` if the target does not have the
    /// configured word length.
    ///
    /// # Examples
    /// ```
    /// use wurdel::core::{GameConfig, GameSession, Outcome};
    ///
    /// let mut session = GameSession::new("apple", GameConfig::default()).unwrap();
    /// let guess = session.validate("grape").unwrap();
    /// assert_eq!(session.submit(&guess).unwrap(), Outcome::InProgress);
    ///
    /// let guess = session.validate("APPLE").unwrap();
    /// assert_eq!(session.submit(&guess).unwrap(), Outcome::Won);
    /// ```
    pub fn new(target: impl Into<String>, config: GameConfig) -> Result<Self, SessionError> {
        let target = target.into().to_uppercase();
        let actual = target.chars().count();
        if actual != config.word_length {
            return Err(SessionError::LengthMismatch {
                expected: config.word_length,
                actual,
            });
        }

        Ok(Self {
            config,
            target,
            attempts: vec![config.placeholder(); config.total_guesses],
            index: 0,
            completed: 0,
            outcome: Outcome::InProgress,
            board: LetterStatusBoard::new(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// All attempt slots, placeholders included
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[String] {
        &self.attempts
    }

    /// Attempts the player has actually made
    #[inline]
    #[must_use]
    pub fn completed_attempts(&self) -> &[String] {
        &self.attempts[..self.completed]
    }

    /// Index of the slot being played, or of the last slot played once finished
    #[inline]
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.index
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &LetterStatusBoard {
        &self.board
    }

    /// Validate a raw guess against this session's length and history
    ///
    /// # Errors
    /// Returns the `GuessError` for the first rule the guess breaks.
    pub fn validate(&self, raw: &str) -> Result<Guess, GuessError> {
        validate_guess(raw, self.completed_attempts(), self.config.word_length)
    }

    /// Record a validated guess in the current slot and advance the game
    ///
    /// # Errors
    /// Returns `SessionError::Finished` once the game is over, or
    /// `SessionError::LengthMismatch` for a guess validated under another
    /// word length.
    pub fn submit(&mut self, guess: &Guess) -> Result<Outcome, SessionError> {
        if self.outcome.is_finished() {
            return Err(SessionError::Finished(self.outcome));
        }
        let actual = guess.as_str().chars().count();
        if actual != self.config.word_length {
            return Err(SessionError::LengthMismatch {
                expected: self.config.word_length,
                actual,
            });
        }

        self.board.record(&classify(guess.as_str(), &self.target));
        self.attempts[self.index] = guess.as_str().to_string();
        self.completed += 1;

        if guess.as_str() == self.target {
            self.outcome = Outcome::Won;
        } else if self.index + 1 == self.config.total_guesses {
            self.outcome = Outcome::Lost;
        } else {
            self.index += 1;
        }

        Ok(self.outcome)
    }

    /// Stop a game in progress; a finished game keeps its outcome
    pub fn interrupt(&mut self) -> Outcome {
        if !self.outcome.is_finished() {
            self.outcome = Outcome::Interrupted;
        }
        self.outcome
    }

    /// Classification of every slot against the target
    #[must_use]
    pub fn classified_attempts(&self) -> Vec<Vec<ClassifiedLetter>> {
        self.attempts
            .iter()
            .map(|attempt| classify(attempt, &self.target))
            .collect()
    }

    /// Snapshot of the board for rendering
    #[must_use]
    pub fn frame(&self, headline: impl Into<String>) -> Frame {
        Frame {
            headline: headline.into(),
            rows: self.classified_attempts(),
            letters: self.board.letters().collect(),
            outcome: self.outcome,
            target: self.outcome.is_finished().then(|| self.target.clone()),
        }
    }
}
