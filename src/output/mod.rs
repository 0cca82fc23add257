//! Console output formatting
//!
//! Display utilities for standings, help and round summaries.

pub mod display;
pub mod formatters;

pub use display::{print_attempts, print_help, print_standings};
