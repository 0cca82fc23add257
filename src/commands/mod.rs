//! Command implementations

pub mod play;
pub mod standings;

pub use play::run_play;
pub use standings::{run_leaderboard, run_versus};
