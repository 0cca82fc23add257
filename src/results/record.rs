//! Finished game records

use super::Standings;
use serde::{Deserialize, Serialize};

/// Outcome of one completed game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameResult {
    player1: String,
    player2: String,
    winner: String,
}

impl GameResult {
    #[must_use]
    pub fn new(
        player1: impl Into<String>,
        player2: impl Into<String>,
        winner: impl Into<String>,
    ) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
            winner: winner.into(),
        }
    }

    #[must_use]
    pub fn player1(&self) -> &str {
        &self.player1
    }

    #[must_use]
    pub fn player2(&self) -> &str {
        &self.player2
    }

    #[must_use]
    pub fn winner(&self) -> &str {
        &self.winner
    }

    /// Whether this game was played between `a` and `b`, in either seating
    #[must_use]
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (self.player1 == a && self.player2 == b) || (self.player1 == b && self.player2 == a)
    }
}

/// All recorded games, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultHistory(Vec<GameResult>);

impl ResultHistory {
    #[must_use]
    pub fn new(records: Vec<GameResult>) -> Self {
        Self(records)
    }

    #[must_use]
    pub fn records(&self) -> &[GameResult] {
        &self.0
    }

    pub fn push(&mut self, result: GameResult) {
        self.0.push(result);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wins per player over every recorded game
    ///
    /// # Examples
    /// ```
    /// use word_duel::results::{GameResult, ResultHistory};
    ///
    /// let history = ResultHistory::new(vec![
    ///     GameResult::new("A", "B", "A"),
    ///     GameResult::new("A", "B", "B"),
    ///     GameResult::new("A", "C", "A"),
    /// ]);
    /// let wins = history.aggregate_wins();
    /// assert_eq!(wins.wins("A"), 2);
    /// assert_eq!(wins.wins("B"), 1);
    /// assert_eq!(wins.wins("C"), 0);
    /// ```
    #[must_use]
    pub fn aggregate_wins(&self) -> Standings {
        self.0.iter().map(GameResult::winner).collect()
    }

    /// Wins per player over the games `a` and `b` played against each other
    #[must_use]
    pub fn head_to_head_wins(&self, a: &str, b: &str) -> Standings {
        self.0
            .iter()
            .filter(|result| result.is_between(a, b))
            .map(GameResult::winner)
            .collect()
    }
}
