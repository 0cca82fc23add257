//! Words accepted during the current game

use rustc_hash::FxHashSet;

/// Accepted words in move order, with constant-time duplicate checks
///
/// Words are stored lower-cased, so membership is case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct AttemptLog {
    words: Vec<String>,
    seen: FxHashSet<String>,
}

impl AttemptLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `word` was already accepted in this game
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(&word.to_lowercase())
    }

    /// Record an accepted word
    ///
    /// Returns `false` and leaves the log untouched if the word was already used.
    pub fn push(&mut self, word: &str) -> bool {
        let word = word.to_lowercase();
        if !self.seen.insert(word.clone()) {
            return false;
        }
        self.words.push(word);
        true
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

    /// Accepted words in the order they were played
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}
