//! In-game commands typed instead of a word

use derive_more::{Display, Error};
use std::str::FromStr;

/// Marks input as a command rather than a word
pub const COMMAND_PREFIX: char = '/';

/// A command a player can issue during their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    ShowWords,
    Score,
    TotalScore,
    Exit,
}

/// Error type for prefixed input that names no known command
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown command: {input}")]
pub struct UnknownCommand {
    pub input: String,
}

impl Command {
    /// All commands in the order `/help` lists them
    pub const ALL: [Self; 5] = [
        Self::Help,
        Self::ShowWords,
        Self::Score,
        Self::TotalScore,
        Self::Exit,
    ];

    /// The text a player types for this command, prefix included
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Help => "/help",
            Self::ShowWords => "/show-words",
            Self::Score => "/score",
            Self::TotalScore => "/total-score",
            Self::Exit => "/exit",
        }
    }

    /// Whether `input` should be routed to the command interpreter
    #[must_use]
    pub fn is_command(input: &str) -> bool {
        input.starts_with(COMMAND_PREFIX)
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    /// Parse a command token, ignoring case and surrounding whitespace
    ///
    /// # Examples
    /// ```
    /// use word_duel::game::Command;
    ///
    /// assert_eq!("/help".parse(), Ok(Command::Help));
    /// assert_eq!(" /EXIT ".parse(), Ok(Command::Exit));
    /// assert!("/dance".parse::<Command>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|command| command.token() == input)
            .ok_or(UnknownCommand { input })
    }
}
