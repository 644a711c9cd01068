//! Style guide for line-mode output
//!
//! Styles are plain values handed to the printer; nothing here is global.

use crate::core::LetterClassification;
use colored::{Color, ColoredString, Colorize};

/// Foreground, background and emphasis for a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dimmed: bool,
}

impl TextStyle {
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            bold: false,
            dimmed: false,
        }
    }

    #[must_use]
    pub const fn on(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn dimmed(mut self) -> Self {
        self.dimmed = true;
        self
    }

    /// Apply the style to `text`
    #[must_use]
    pub fn paint(&self, text: &str) -> ColoredString {
        let mut painted = ColoredString::from(text);
        if let Some(fg) = self.fg {
            painted = painted.color(fg);
        }
        if let Some(bg) = self.bg {
            painted = painted.on_color(bg);
        }
        if self.bold {
            painted = painted.bold();
        }
        if self.dimmed {
            painted = painted.dimmed();
        }
        painted
    }
}

const GREY: Color = Color::TrueColor {
    r: 0x66,
    g: 0x66,
    b: 0x66,
};

/// Every style the line-mode frontend uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleGuide {
    pub correct: TextStyle,
    pub misplaced: TextStyle,
    pub wrong: TextStyle,
    /// Placeholder letters of unused attempts
    pub bad: TextStyle,
    pub lose: TextStyle,
    pub warning: TextStyle,
    pub ruler: TextStyle,
}

impl StyleGuide {
    /// Style for a letter with the given status; `None` for unknown letters
    #[must_use]
    pub const fn letter_style(
        &self,
        status: Option<LetterClassification>,
    ) -> Option<&TextStyle> {
        match status {
            Some(LetterClassification::Correct) => Some(&self.correct),
            Some(LetterClassification::Misplaced) => Some(&self.misplaced),
            Some(LetterClassification::Wrong) => Some(&self.wrong),
            Some(LetterClassification::Unfilled) => Some(&self.bad),
            None => None,
        }
    }
}

impl Default for StyleGuide {
    fn default() -> Self {
        Self {
            correct: TextStyle::fg(Color::White).on(Color::Green).bold(),
            misplaced: TextStyle::fg(Color::White).on(Color::Yellow).bold(),
            wrong: TextStyle::fg(Color::White).on(GREY),
            bad: TextStyle::default().dimmed(),
            lose: TextStyle::fg(Color::White).on(Color::Red).bold(),
            warning: TextStyle::fg(Color::Red).on(Color::Yellow),
            ruler: TextStyle::fg(Color::Blue).bold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_styles_follow_classification() {
        let guide = StyleGuide::default();
        assert_eq!(
            guide.letter_style(Some(LetterClassification::Correct)),
            Some(&guide.correct)
        );
        assert_eq!(
            guide.letter_style(Some(LetterClassification::Unfilled)),
            Some(&guide.bad)
        );
        assert_eq!(guide.letter_style(None), None);
    }

    #[test]
    fn builder_sets_fields() {
        let style = TextStyle::fg(Color::Red).on(Color::Yellow).bold();
        assert_eq!(style.fg, Some(Color::Red));
        assert_eq!(style.bg, Some(Color::Yellow));
        assert!(style.bold);
        assert!(!style.dimmed);
    }

    #[test]
    fn paint_keeps_text() {
        let painted = StyleGuide::default().correct.paint("A");
        assert_eq!(&*painted, "A");
        assert_eq!(painted.fgcolor, Some(Color::White));
        assert_eq!(painted.bgcolor, Some(Color::Green));
    }
}
