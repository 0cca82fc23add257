//! Localized message tables
//!
//! The chosen table is passed explicitly to everything that talks to the players.

mod english;
mod russian;

use clap::ValueEnum;

/// Bilingual prompt shown before a language is known
pub const LANGUAGE_PROMPT: &str = "Выберите язык / Choose language: Русский(1), English(2)";

/// Bilingual error for an unrecognized language choice
pub const LANGUAGE_INPUT_ERROR: &str = "Ошибка ввода / Input Error";

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    Russian,
    English,
}

impl Language {
    /// Parse the answer to [`LANGUAGE_PROMPT`]
    ///
    /// # Examples
    /// ```
    /// use word_duel::locale::Language;
    ///
    /// assert_eq!(Language::from_choice(" 1 "), Some(Language::Russian));
    /// assert_eq!(Language::from_choice("2"), Some(Language::English));
    /// assert_eq!(Language::from_choice("3"), None);
    /// ```
    #[must_use]
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Russian),
            "2" => Some(Self::English),
            _ => None,
        }
    }

    /// Message table for this language
    #[must_use]
    pub const fn strings(self) -> &'static Strings {
        match self {
            Self::Russian => &russian::STRINGS,
            Self::English => &english::STRINGS,
        }
    }

    /// Dictionary file used when no path is configured
    #[must_use]
    pub const fn default_lexicon(self) -> &'static str {
        match self {
            Self::Russian => "data/russian.txt",
            Self::English => "data/english.txt",
        }
    }
}

/// Every message the game shows, in one language
///
/// Templates use `{name}` and `{seconds}` placeholders; use the formatting methods
/// rather than the raw fields for those.
#[derive(Debug)]
pub struct Strings {
    pub ask_first_player: &'static str,
    pub ask_second_player: &'static str,
    pub name_empty_error: &'static str,
    pub name_whitespace_error: &'static str,
    pub name_taken_error: &'static str,
    pub choose_source_word: &'static str,
    pub size_error: &'static str,
    pub ask_word: &'static str,
    pub word_not_in_dictionary: &'static str,
    pub player_move: &'static str,
    pub player_timed_out: &'static str,
    pub time_left: &'static str,
    pub time_is_up: &'static str,
    pub input_closed: &'static str,
    pub reuse_word_error: &'static str,
    pub reuse_letters_error: &'static str,
    pub availability_letters_error: &'static str,
    pub player_win: &'static str,
    pub used_words: &'static str,
    pub available_commands: &'static str,
    pub help_show_words: &'static str,
    pub help_score: &'static str,
    pub help_total_score: &'static str,
    pub help_exit: &'static str,
    pub wrong_command: &'static str,
    pub no_results: &'static str,
    pub best_players: &'static str,
}

impl Strings {
    /// "It is {name}'s move"
    #[must_use]
    pub fn player_move(&self, name: &str) -> String {
        self.player_move.replace("{name}", name)
    }

    #[must_use]
    pub fn player_timed_out(&self, name: &str) -> String {
        self.player_timed_out.replace("{name}", name)
    }

    #[must_use]
    pub fn player_win(&self, name: &str) -> String {
        self.player_win.replace("{name}", name)
    }

    #[must_use]
    pub fn time_left(&self, seconds: u64) -> String {
        self.time_left.replace("{seconds}", &seconds.to_string())
    }
}
