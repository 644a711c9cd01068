//! Turn loop
//!
//! Drives a `GameSession` from its first attempt to its outcome. Input and
//! rendering are supplied by the caller through `GuessSource` and
//! `RenderSink`, so the same loop serves the line-mode and TUI frontends.
//! Both roles are taken by one frontend value because a terminal frontend
//! redraws while it collects input.

use super::guess::{Guess, GuessError};
use super::session::{Frame, GameSession, Outcome};
use std::io;
use tracing::{debug, info};

/// One response from the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    /// A raw guess, unmodified apart from the line terminator
    Guess(String),
    /// The player asked to stop (Ctrl-C, end of input)
    Interrupt,
}

/// Where raw guesses come from
pub trait GuessSource {
    /// Block until the player submits a line or interrupts
    ///
    /// # Errors
    /// Returns an I/O error if the underlying input cannot be read.
    fn next_input(&mut self) -> io::Result<PlayerInput>;
}

/// Where frames and rejection messages go
pub trait RenderSink {
    /// Draw the board at the start of a turn
    ///
    /// # Errors
    /// Returns an I/O error if the output cannot be written.
    fn render_turn(&mut self, frame: &Frame) -> io::Result<()>;

    /// Tell the player why a guess was turned down
    ///
    /// # Errors
    /// Returns an I/O error if the output cannot be written.
    fn reject(&mut self, error: &GuessError) -> io::Result<()>;

    /// Draw the final board once the game is over
    ///
    /// # Errors
    /// Returns an I/O error if the output cannot be written.
    fn render_game_over(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Play `session` to completion
///
/// Each turn renders the board, then asks `frontend` for guesses until one
/// passes validation, rendering every rejection. An interrupt raises the
/// cancellation flag, which is checked at the top of the next turn and ends
/// the game with `Outcome::Interrupted`. The final board is rendered exactly
/// once.
///
/// # Errors
/// Returns an I/O error from the frontend.
pub fn run_game<F>(session: &mut GameSession, frontend: &mut F) -> io::Result<Outcome>
where
    F: GuessSource + RenderSink + ?Sized,
{
    let mut cancelled = false;

    while !session.outcome().is_finished() {
        if cancelled {
            session.interrupt();
            break;
        }

        let turn = session.current_index() + 1;
        frontend.render_turn(&session.frame(format!("Guess {turn}")))?;

        let Some(guess) = next_valid_guess(session, frontend)? else {
            debug!(turn, "player interrupted");
            cancelled = true;
            continue;
        };

        session.submit(&guess).map_err(io::Error::other)?;
    }

    let outcome = session.outcome();
    info!(
        ?outcome,
        attempts = session.completed_attempts().len(),
        "game finished"
    );
    frontend.render_game_over(&session.frame("Game Over"))?;

    Ok(outcome)
}

/// Reprompt until a guess passes validation; `None` on interrupt
fn next_valid_guess<F>(session: &GameSession, frontend: &mut F) -> io::Result<Option<Guess>>
where
    F: GuessSource + RenderSink + ?Sized,
{
    loop {
        let raw = match frontend.next_input()? {
            PlayerInput::Guess(raw) => raw,
            PlayerInput::Interrupt => return Ok(None),
        };

        match session.validate(&raw) {
            Ok(guess) => return Ok(Some(guess)),
            Err(error) => {
                debug!(%error, "guess rejected");
                frontend.reject(&error)?;
            }
        }
    }
}
