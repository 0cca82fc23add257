//! Word Duel
//!
//! A two-player terminal word game: both players build dictionary words out of the
//! letters of one long source word, against a per-turn clock, until someone runs out
//! of time or gives up.
//!
//! # Quick Start
//!
//! ```rust
//! use word_duel::core::{Seat, SourceWord};
//! use word_duel::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::from_words(["elephant", "pet"]);
//! let source = SourceWord::new("elephant", &lexicon).unwrap();
//!
//! assert!(source.budget().validate("pet").is_ok());
//! assert_eq!(Seat::winner_after(1), Seat::First);
//! ```

// Core domain types
pub mod core;

// Dictionary loading
pub mod lexicon;

// Turn clock and game loop
pub mod game;

// Result persistence and statistics
pub mod results;

// Console abstraction
pub mod console;

// Message tables
pub mod locale;

// Session settings
pub mod config;

// Command implementations
pub mod commands;

// Console output formatting
pub mod output;
