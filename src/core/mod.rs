//! Core domain types for the word duel
//!
//! Letter budgets, players, the source word and the attempt log. Everything here is
//! pure game state with no I/O.

mod attempts;
mod letters;
mod player;
mod source_word;

pub use attempts::AttemptLog;
pub use letters::{LetterCounts, LetterViolation};
pub use player::{Player, PlayerNameError, Players, Seat};
pub use source_word::{SOURCE_WORD_LENGTH, SourceWord, SourceWordError};
