//! Interactive TUI interface
//!
//! Full-screen frontend built on ratatui, driven by the same turn loop as
//! line mode.

mod app;
mod rendering;

pub use app::{App, InputMode, KeyAction, MessageStyle, Statistics, ViewState, run_tui};
