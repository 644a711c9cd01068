//! Core game engine
//!
//! This module contains the rules of the game: guess validation, per-letter
//! classification, the letter status board and the session state machine.
//! Nothing here knows how a board is drawn or where a guess comes from.

mod board;
mod classification;
mod config;
mod game;
mod guess;
mod session;

pub use board::LetterStatusBoard;
pub use classification::{ClassifiedLetter, LetterClassification, classify};
pub use config::{ConfigError, DEFAULT_TOTAL_GUESSES, DEFAULT_WORD_LENGTH, FILL_CHAR, GameConfig};
pub use game::{GuessSource, PlayerInput, RenderSink, run_game};
pub use guess::{Guess, GuessError, validate_guess};
pub use session::{Frame, GameSession, Outcome, SessionError};
