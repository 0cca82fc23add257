//! Win tallies per player

use rustc_hash::FxHashMap;

/// Win counts keyed by player name
///
/// Players are kept in the order they were first seen, which is the tie-break order
/// of [`Standings::ranked`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standings {
    rows: Vec<(String, usize)>,
    index: FxHashMap<String, usize>,
}

impl Standings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one win for `name`
    pub fn record_win(&mut self, name: &str) {
        if let Some(&slot) = self.index.get(name) {
            self.rows[slot].1 += 1;
        } else {
            self.index.insert(name.to_string(), self.rows.len());
            self.rows.push((name.to_string(), 1));
        }
    }

    /// Wins of `name`, zero if never seen
    #[must_use]
    pub fn wins(&self, name: &str) -> usize {
        self.index.get(name).map_or(0, |&slot| self.rows[slot].1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(name, wins)` in order of first encounter
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.rows.iter().map(|(name, wins)| (name.as_str(), *wins))
    }

    /// Leaderboard order: most wins first, ties keep encounter order
    ///
    /// # Examples
    /// ```
    /// use word_duel::results::Standings;
    ///
    /// let standings: Standings = ["bo", "al", "al", "cy"].into_iter().collect();
    /// assert_eq!(standings.ranked(), vec![("al", 2), ("bo", 1), ("cy", 1)]);
    /// ```
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl<'a> FromIterator<&'a str> for Standings {
    fn from_iter<I: IntoIterator<Item = &'a str>>(winners: I) -> Self {
        let mut standings = Self::new();
        for winner in winners {
            standings.record_win(winner);
        }
        standings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wins_accumulate() {
        let mut standings = Standings::new();
        standings.record_win("ann");
        standings.record_win("ben");
        standings.record_win("ann");

        assert_eq!(standings.wins("ann"), 2);
        assert_eq!(standings.wins("ben"), 1);
        assert_eq!(standings.wins("cid"), 0);
        assert_eq!(standings.len(), 2);
    }

    #[test]
    fn ranking_is_stable_for_ties() {
        let standings: Standings = ["d", "c", "b", "a", "b", "a"].into_iter().collect();
        assert_eq!(
            standings.ranked(),
            vec![("b", 2), ("a", 2), ("d", 1), ("c", 1)]
        );
    }

    #[test]
    fn iteration_keeps_encounter_order() {
        let standings: Standings = ["z", "y", "z"].into_iter().collect();
        let order: Vec<_> = standings.iter().collect();
        assert_eq!(order, vec![("z", 2), ("y", 1)]);
    }

    #[test]
    fn empty_standings() {
        let standings = Standings::new();
        assert!(standings.is_empty());
        assert!(standings.ranked().is_empty());
    }
}
