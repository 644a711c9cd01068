//! Terminal output formatting
//!
//! Line-mode rendering of the board: the style guide, layout helpers and the
//! printer that writes frames to a terminal.

pub mod display;
pub mod formatters;
pub mod theme;

pub use display::{BoardPrinter, DISPLAY_WIDTH, print_prepare_summary};
pub use theme::{StyleGuide, TextStyle};
