//! Players and their seats at the table

use derive_more::{Display, Error};
use std::fmt;

/// A player identified by an immutable display name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
}

/// Error type for rejected player names
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PlayerNameError {
    #[display("player name must not be empty")]
    Empty,
    #[display("player name must not contain whitespace")]
    ContainsWhitespace,
    #[display("player name '{name}' is already taken")]
    Taken { name: String },
}

impl Player {
    /// Create a player from a name typed at the prompt
    ///
    /// Surrounding whitespace is trimmed; whitespace inside the name is rejected.
    ///
    /// # Errors
    /// Returns `PlayerNameError` if the name is empty or contains whitespace.
    ///
    /// # Examples
    /// ```
    /// use word_duel::core::Player;
    ///
    /// let player = Player::new("  alice ").unwrap();
    /// assert_eq!(player.name(), "alice");
    ///
    /// assert!(Player::new("").is_err());
    /// assert!(Player::new("alice smith").is_err());
    /// ```
    pub fn new(name: impl AsRef<str>) -> Result<Self, PlayerNameError> {
        let name = name.as_ref().trim();

        if name.is_empty() {
            return Err(PlayerNameError::Empty);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(PlayerNameError::ContainsWhitespace);
        }

        Ok(Self {
            name: name.to_string(),
        })
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Position at the table; `First` always moves first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Seats in move order
    pub const ORDER: [Self; 2] = [Self::First, Self::Second];

    /// Seat of the winner after `accepted_attempts` words were accepted
    ///
    /// The player who was about to move when the game stopped is the one who failed.
    /// With an even count that is the first player, so the second player wins.
    ///
    /// # Examples
    /// ```
    /// use word_duel::core::Seat;
    ///
    /// assert_eq!(Seat::winner_after(0), Seat::Second);
    /// assert_eq!(Seat::winner_after(1), Seat::First);
    /// assert_eq!(Seat::winner_after(2), Seat::Second);
    /// ```
    #[must_use]
    pub const fn winner_after(accepted_attempts: usize) -> Self {
        if accepted_attempts % 2 == 0 {
            Self::Second
        } else {
            Self::First
        }
    }
}

/// The two players of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    first: Player,
    second: Player,
}

impl Players {
    /// Seat two players
    ///
    /// # Errors
    /// Returns `PlayerNameError::Taken` if both players share a name.
    pub fn new(first: Player, second: Player) -> Result<Self, PlayerNameError> {
        if first == second {
            return Err(PlayerNameError::Taken {
                name: second.name,
            });
        }
        Ok(Self { first, second })
    }

    #[must_use]
    pub const fn at(&self, seat: Seat) -> &Player {
        match seat {
            Seat::First => &self.first,
            Seat::Second => &self.second,
        }
    }

    #[must_use]
    pub const fn first(&self) -> &Player {
        &self.first
    }

    #[must_use]
    pub const fn second(&self) -> &Player {
        &self.second
    }
}
