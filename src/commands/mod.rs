//! Command implementations

pub mod prepare;
pub mod simple;

pub use prepare::{PrepareSummary, run_prepare};
pub use simple::run_simple;
