//! Line-mode board printer

use super::formatters::{centering_pad, ruler};
use super::theme::StyleGuide;
use crate::commands::PrepareSummary;
use crate::core::{Frame, LetterClassification, Outcome};
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::fmt::Write as _;
use std::io::{self, Write};

/// Column width of the line-mode board
pub const DISPLAY_WIDTH: usize = 40;

/// Writes frames, warnings and verdicts to a terminal or any writer
pub struct BoardPrinter<W: Write> {
    out: W,
    style: StyleGuide,
    width: usize,
    clear_screen: bool,
}

impl<W: Write> BoardPrinter<W> {
    #[must_use]
    pub const fn new(out: W, style: StyleGuide) -> Self {
        Self {
            out,
            style,
            width: DISPLAY_WIDTH,
            clear_screen: false,
        }
    }

    /// Clear the screen before every frame
    #[must_use]
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Headline rule, every attempt row and the letter status line
    ///
    /// # Errors
    /// Returns an I/O error if the writer fails.
    pub fn print_frame(&mut self, frame: &Frame) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        writeln!(
            self.out,
            "{}",
            self.style.ruler.paint(&ruler(&frame.headline, self.width))
        )?;
        writeln!(self.out)?;

        for row in &frame.rows {
            let line = self.paint_letters(
                row.iter()
                    .map(|classified| (classified.letter, Some(classified.classification))),
            );
            writeln!(self.out, "{}{line}", centering_pad(row.len(), self.width))?;
        }

        let letters = self.paint_letters(frame.letters.iter().copied());
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}{letters}",
            centering_pad(frame.letters.len(), self.width)
        )?;
        self.out.flush()
    }

    /// A rejection or startup warning
    ///
    /// # Errors
    /// Returns an I/O error if the writer fails.
    pub fn print_warning(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", self.style.warning.paint(message))?;
        self.out.flush()
    }

    /// Closing line of a finished game; nothing while the game is running
    ///
    /// # Errors
    /// Returns an I/O error if the writer fails.
    pub fn print_verdict(&mut self, frame: &Frame) -> io::Result<()> {
        let Some(verdict) = frame.verdict() else {
            return Ok(());
        };
        let style = if frame.outcome == Outcome::Won {
            &self.style.correct
        } else {
            &self.style.lose
        };
        writeln!(self.out, "\n{}", style.paint(&verdict))?;
        self.out.flush()
    }

    fn paint_letters<I>(&self, letters: I) -> String
    where
        I: IntoIterator<Item = (char, Option<LetterClassification>)>,
    {
        let mut line = String::new();
        for (letter, status) in letters {
            let mut buf = [0; 4];
            let text = letter.encode_utf8(&mut buf);
            match self.style.letter_style(status) {
                Some(style) => {
                    let _ = write!(line, "{}", style.paint(text));
                }
                None => line.push(letter),
            }
        }
        line
    }
}

/// Print the result of preparing a word list
pub fn print_prepare_summary(summary: &PrepareSummary) {
    println!("\n{}", "═".repeat(DISPLAY_WIDTH).cyan());
    println!(" {} ", "WORD LIST PREPARED".bright_cyan().bold());
    println!("{}", "═".repeat(DISPLAY_WIDTH).cyan());

    println!("\n   Input:   {}", summary.input.display());
    println!("   Output:  {}", summary.output.display());
    println!(
        "   Words:   {}",
        summary.total_words.to_string().bright_yellow().bold()
    );

    let widest = summary.by_length.values().copied().max().unwrap_or(0);
    if widest == 0 {
        return;
    }

    println!("\n{}", "By length:".bright_cyan().bold());
    for (&length, &count) in &summary.by_length {
        let bar_width = (count * 24).div_ceil(widest);
        println!(
            "   {length:>2}: {}{} {count}",
            "█".repeat(bar_width).green(),
            "░".repeat(24 - bar_width).bright_black()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GameSession};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut BoardPrinter<Vec<u8>>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut printer = BoardPrinter::new(Vec::new(), StyleGuide::default());
        f(&mut printer).unwrap();
        String::from_utf8(printer.into_inner()).unwrap()
    }

    fn session_after(guesses: &[&str]) -> GameSession {
        let mut session = GameSession::new("APPLE", GameConfig::default()).unwrap();
        for raw in guesses {
            let guess = session.validate(raw).unwrap();
            session.submit(&guess).unwrap();
        }
        session
    }

    #[test]
    fn frame_lists_rows_and_alphabet() {
        let session = session_after(&["grape"]);
        let output = render(|p| p.print_frame(&session.frame("Guess 2")));
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].contains(" Guess 2 "));
        assert_eq!(lines[2].trim(), "GRAPE");
        assert_eq!(lines[3].trim(), "_____");
        assert_eq!(
            lines.last().unwrap().trim(),
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
        );
        // Ruler, blank, six rows, blank, alphabet
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn rows_are_centered() {
        let session = session_after(&[]);
        let output = render(|p| p.print_frame(&session.frame("Guess 1")));
        let row = output.lines().nth(2).unwrap();
        assert_eq!(row, format!("{}_____", " ".repeat(17)));
    }

    #[test]
    fn warning_is_printed_verbatim() {
        let output = render(|p| p.print_warning("Your guess must be 5 letters."));
        assert_eq!(output, "Your guess must be 5 letters.\n");
    }

    #[test]
    fn verdict_only_when_finished() {
        let running = session_after(&["grape"]);
        assert_eq!(render(|p| p.print_verdict(&running.frame("x"))), "");

        let won = session_after(&["grape", "apple"]);
        assert_eq!(
            render(|p| p.print_verdict(&won.frame("Game Over"))),
            "\nCorrect, the word is APPLE\n"
        );
    }

    #[test]
    fn clear_screen_emits_escape_codes() {
        colored::control::set_override(false);
        let session = session_after(&[]);
        let mut printer =
            BoardPrinter::new(Vec::new(), StyleGuide::default()).with_clear_screen(true);
        printer.print_frame(&session.frame("Guess 1")).unwrap();
        let output = String::from_utf8(printer.into_inner()).unwrap();
        assert!(output.starts_with('\u{1b}'));
    }
}
