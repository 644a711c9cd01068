//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: the board is printed with colored
//! letters and each guess is typed at a prompt.

use crate::core::{
    Frame, GameConfig, GameSession, GuessError, GuessSource, Outcome, PlayerInput, RenderSink,
    run_game,
};
use crate::output::{BoardPrinter, StyleGuide};
use crate::wordlists::{WordListStore, select_target};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::warn;

/// Reads one line per request from stdin
///
/// On a terminal, keys are read in raw mode so that Ctrl-C and Ctrl-D arrive
/// as `PlayerInput::Interrupt` instead of ending the process. Piped input is
/// read line by line and end of input counts as an interrupt.
///
/// No signal handler is installed: with piped stdin, SIGINT (Ctrl-C from the
/// terminal or `kill -INT`) still terminates the process without the
/// game-over view. Close the input instead to end a scripted game cleanly.
pub struct LineInput {
    raw_keys: bool,
}

impl LineInput {
    #[must_use]
    pub fn from_stdin() -> Self {
        Self {
            raw_keys: io::stdin().is_terminal(),
        }
    }

    /// Print `prompt` and wait for a line
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the terminal or stdin cannot be read.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<PlayerInput> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        if self.raw_keys {
            let _guard = RawMode::enable()?;
            read_keys(&mut stdout)
        } else {
            read_buffered(&mut io::stdin().lock())
        }
    }
}

/// Leaves raw mode when dropped, including on error paths
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "failed to leave raw mode");
        }
    }
}

fn read_keys(out: &mut impl Write) -> io::Result<PlayerInput> {
    let mut buffer = String::new();

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                write!(out, "\r\n")?;
                return Ok(PlayerInput::Interrupt);
            }
            KeyCode::Char('d')
                if key.modifiers.contains(KeyModifiers::CONTROL) && buffer.is_empty() =>
            {
                write!(out, "\r\n")?;
                return Ok(PlayerInput::Interrupt);
            }
            KeyCode::Enter => {
                write!(out, "\r\n")?;
                out.flush()?;
                return Ok(PlayerInput::Guess(buffer));
            }
            KeyCode::Backspace => {
                if buffer.pop().is_some() {
                    write!(out, "\u{8} \u{8}")?;
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                buffer.push(c);
                write!(out, "{c}")?;
            }
            _ => {}
        }
        out.flush()?;
    }
}

fn read_buffered(input: &mut impl BufRead) -> io::Result<PlayerInput> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(PlayerInput::Interrupt);
    }

    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(PlayerInput::Guess(line))
}

/// Line-mode frontend: printer for output, `LineInput` for guesses
pub struct LineConsole<W: Write> {
    printer: BoardPrinter<W>,
    input: LineInput,
}

impl LineConsole<io::Stdout> {
    #[must_use]
    pub fn stdout(style: StyleGuide) -> Self {
        let stdout = io::stdout();
        let clear = stdout.is_terminal();
        Self {
            printer: BoardPrinter::new(stdout, style).with_clear_screen(clear),
            input: LineInput::from_stdin(),
        }
    }
}

impl<W: Write> GuessSource for LineConsole<W> {
    fn next_input(&mut self) -> io::Result<PlayerInput> {
        self.input.read_line("\nGuess word: ")
    }
}

impl<W: Write> RenderSink for LineConsole<W> {
    fn render_turn(&mut self, frame: &Frame) -> io::Result<()> {
        self.printer.print_frame(frame)
    }

    fn reject(&mut self, error: &GuessError) -> io::Result<()> {
        self.printer.print_warning(&error.to_string())
    }

    fn render_game_over(&mut self, frame: &Frame) -> io::Result<()> {
        self.printer.print_frame(frame)?;
        self.printer.print_verdict(frame)
    }
}

/// Run the line-mode game until the player declines another round
///
/// # Errors
///
/// Returns an error if the word list has no candidates or on an I/O error
/// reading input or writing the board.
pub fn run_simple(store: &WordListStore, config: GameConfig, style: StyleGuide) -> Result<()> {
    let mut console = LineConsole::stdout(style);
    let mut rng = rand::rng();

    loop {
        let target = select_target(store, &mut rng)?;
        let mut session = GameSession::new(target, config)?;

        if run_game(&mut session, &mut console)? == Outcome::Interrupted {
            return Ok(());
        }

        match console.input.read_line("\nPlay again? (yes/no): ")? {
            PlayerInput::Guess(answer) if is_yes(&answer) => {}
            _ => return Ok(()),
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}
