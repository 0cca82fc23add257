//! The source word every round is played from

use super::LetterCounts;
use crate::lexicon::Lexicon;
use derive_more::{Display, Error};
use std::fmt;
use std::ops::RangeInclusive;

/// Allowed source word length, in characters
pub const SOURCE_WORD_LENGTH: RangeInclusive<usize> = 8..=30;

/// A dictionary word chosen by the first player, together with its letter budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceWord {
    text: String,
    budget: LetterCounts,
}

/// Error type for rejected source words
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SourceWordError {
    #[display("'{word}' is not in the dictionary")]
    NotInLexicon { word: String },
    #[display("source word must be 8 to 30 letters long, got {len}")]
    InvalidLength { len: usize },
}

impl SourceWord {
    /// Accept `text` as the source word if the lexicon knows it and its length fits
    ///
    /// # Errors
    /// Returns `SourceWordError` if the word is unknown or outside [`SOURCE_WORD_LENGTH`].
    ///
    /// # Examples
    /// ```
    /// use word_duel::core::SourceWord;
    /// use word_duel::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["elephant", "pet"]);
    /// let source = SourceWord::new("Elephant", &lexicon).unwrap();
    /// assert_eq!(source.text(), "elephant");
    /// assert!(SourceWord::new("pet", &lexicon).is_err());
    /// ```
    pub fn new(text: &str, lexicon: &Lexicon) -> Result<Self, SourceWordError> {
        let text = text.trim().to_lowercase();

        if !lexicon.contains(&text) {
            return Err(SourceWordError::NotInLexicon { word: text });
        }

        let len = text.chars().count();
        if !SOURCE_WORD_LENGTH.contains(&len) {
            return Err(SourceWordError::InvalidLength { len });
        }

        let budget = LetterCounts::of(&text);
        Ok(Self { text, budget })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters available to both players for the whole game
    #[inline]
    #[must_use]
    pub const fn budget(&self) -> &LetterCounts {
        &self.budget
    }
}

impl fmt::Display for SourceWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
