//! Dictionary of playable words
//!
//! The lexicon is loaded once at startup and never changes afterwards.

pub mod loader;

pub use loader::{LexiconError, load_from_file};

use rustc_hash::FxHashSet;

/// Case-insensitive set of valid words
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: FxHashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from an iterator of words
    ///
    /// Entries are trimmed and lower-cased; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_duel::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["Elephant", " pet ", ""]);
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(lexicon.contains("ELEPHANT"));
    /// assert!(lexicon.contains("pet"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| {
                let trimmed = word.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_lowercase())
                }
            })
            .collect();

        Self { words }
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
