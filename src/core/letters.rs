//! Letter multiset counting and budget validation
//!
//! A word is reduced to a multiset of characters. The source word's multiset is the
//! budget every candidate has to fit into: a candidate may use each letter at most as
//! many times as the source word contains it.

use derive_more::{Display, Error};
use rustc_hash::FxHashMap;

/// Character frequencies of a word, iterated in order of first occurrence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    entries: Vec<(char, usize)>,
    index: FxHashMap<char, usize>,
}

/// Why a candidate word does not fit into a letter budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum LetterViolation {
    /// The letter exists in the source word but not often enough
    #[display("letter '{letter}' is used more times than the source word allows")]
    ExceedsFrequency { letter: char },
    /// The letter does not exist in the source word at all
    #[display("letter '{letter}' is not available in the source word")]
    UnavailableLetter { letter: char },
}

impl LetterCounts {
    /// Count every character of `word`
    ///
    /// # Examples
    /// ```
    /// use word_duel::core::LetterCounts;
    ///
    /// let counts = LetterCounts::of("banana");
    /// assert_eq!(counts.get('a'), 3);
    /// assert_eq!(counts.get('n'), 2);
    /// assert_eq!(counts.get('z'), 0);
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut counts = Self::default();
        for ch in word.chars() {
            if let Some(&slot) = counts.index.get(&ch) {
                counts.entries[slot].1 += 1;
            } else {
                counts.index.insert(ch, counts.entries.len());
                counts.entries.push((ch, 1));
            }
        }
        counts
    }

    /// Occurrences of `letter`, zero when absent
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> usize {
        self.index.get(&letter).map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Total number of letters counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Iterate `(letter, count)` pairs in order of first occurrence
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Check whether `candidate` can be spelled with the letters in `self`
    ///
    /// Distinct letters of the candidate are checked in order of first occurrence and
    /// the first violation found is returned.
    ///
    /// # Errors
    /// - [`LetterViolation::UnavailableLetter`] if the candidate uses a letter missing
    ///   from the budget
    /// - [`LetterViolation::ExceedsFrequency`] if it uses a letter more often than the
    ///   budget allows
    ///
    /// # Examples
    /// ```
    /// use word_duel::core::{LetterCounts, LetterViolation};
    ///
    /// let budget = LetterCounts::of("elephant");
    /// assert!(budget.validate("pet").is_ok());
    /// assert_eq!(
    ///     budget.validate("pepper"),
    ///     Err(LetterViolation::ExceedsFrequency { letter: 'p' })
    /// );
    /// ```
    pub fn validate(&self, candidate: &str) -> Result<(), LetterViolation> {
        let requested = Self::of(candidate);
        let mut valid_letters = 0;

        for (letter, count) in requested.iter() {
            let allowed = self.get(letter);
            if allowed == 0 {
                return Err(LetterViolation::UnavailableLetter { letter });
            }
            if count > allowed {
                return Err(LetterViolation::ExceedsFrequency { letter });
            }
            valid_letters += count;
        }

        debug_assert_eq!(valid_letters, candidate.chars().count());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn counts_follow_first_occurrence_order() {
        let counts = LetterCounts::of("mississippi");
        let order: Vec<_> = counts.iter().collect();
        assert_eq!(order, vec![('m', 1), ('i', 4), ('s', 4), ('p', 2)]);
        assert_eq!(counts.distinct(), 4);
        assert_eq!(counts.total(), 11);
    }

    #[test]
    fn counts_handle_cyrillic() {
        let counts = LetterCounts::of("молоко");
        assert_eq!(counts.get('о'), 3);
        assert_eq!(counts.get('м'), 1);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn empty_word_has_no_letters() {
        let counts = LetterCounts::of("");
        assert_eq!(counts.distinct(), 0);
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn elephant_allows_pet() {
        let budget = LetterCounts::of("elephant");
        assert_eq!(budget.get('e'), 2);
        assert!(budget.validate("pet").is_ok());
        assert!(budget.validate("plant").is_ok());
        assert!(budget.validate("elephant").is_ok());
    }

    #[test]
    fn frequency_overflow_is_reported() {
        let budget = LetterCounts::of("elephant");
        assert_eq!(
            budget.validate("peep"),
            Err(LetterViolation::ExceedsFrequency { letter: 'p' })
        );
    }

    #[test]
    fn missing_letter_is_reported() {
        let budget = LetterCounts::of("elephant");
        assert_eq!(
            budget.validate("zebra"),
            Err(LetterViolation::UnavailableLetter { letter: 'z' })
        );
    }

    #[test]
    fn first_violation_wins() {
        let budget = LetterCounts::of("elephant");
        // 'x' comes first and is missing, 'p' later would overflow
        assert_eq!(
            budget.validate("xppp"),
            Err(LetterViolation::UnavailableLetter { letter: 'x' })
        );
        // 'p' overflows before the missing 'z' is reached
        assert_eq!(
            budget.validate("ppz"),
            Err(LetterViolation::ExceedsFrequency { letter: 'p' })
        );
    }

    proptest! {
        #[test]
        fn validate_matches_multiset_inclusion(
            source in "[a-f]{8,16}",
            candidate in "[a-h]{1,10}",
        ) {
            let budget = LetterCounts::of(&source);
            let requested = LetterCounts::of(&candidate);
            let fits = requested.iter().all(|(letter, count)| count <= budget.get(letter));

            prop_assert_eq!(budget.validate(&candidate).is_ok(), fits);
            prop_assert_eq!(requested.total(), candidate.chars().count());
        }
    }
}
