//! Wurdel
//!
//! A terminal word-guessing game: guess the secret word within a fixed number
//! of attempts, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wurdel::core::{GameConfig, GameSession, LetterClassification, Outcome};
//!
//! let mut session = GameSession::new("apple", GameConfig::default()).unwrap();
//!
//! let guess = session.validate("grape").unwrap();
//! assert_eq!(session.submit(&guess).unwrap(), Outcome::InProgress);
//! assert_eq!(
//!     session.board().status('E'),
//!     Some(LetterClassification::Correct)
//! );
//! ```

// Game rules and session state
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
