//! Session settings resolved from the command line

use crate::locale::Language;
use std::path::PathBuf;
use std::time::Duration;

/// Time each player has per turn unless configured otherwise
pub const DEFAULT_TURN_SECONDS: u64 = 20;

/// Longest turn a session may be configured with
pub const MAX_TURN_SECONDS: u64 = 3600;

/// Result file used unless configured otherwise
pub const DEFAULT_RESULTS_FILE: &str = "result.json";

/// Immutable settings for one run of the program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    /// Interface language; asked interactively when `None`
    pub language: Option<Language>,
    /// Dictionary file; the language default when `None`
    pub lexicon_path: Option<PathBuf>,
    pub results_path: PathBuf,
    pub turn_limit: Duration,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            language: None,
            lexicon_path: None,
            results_path: PathBuf::from(DEFAULT_RESULTS_FILE),
            turn_limit: Duration::from_secs(DEFAULT_TURN_SECONDS),
        }
    }
}

impl GameSettings {
    /// Turn limit for a configured number of seconds
    ///
    /// Returns `None` outside `1..=MAX_TURN_SECONDS`.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use word_duel::config::{GameSettings, MAX_TURN_SECONDS};
    ///
    /// assert_eq!(GameSettings::turn_limit_from_secs(20), Some(Duration::from_secs(20)));
    /// assert_eq!(GameSettings::turn_limit_from_secs(0), None);
    /// assert_eq!(GameSettings::turn_limit_from_secs(MAX_TURN_SECONDS + 1), None);
    /// ```
    #[must_use]
    pub fn turn_limit_from_secs(seconds: u64) -> Option<Duration> {
        (1..=MAX_TURN_SECONDS)
            .contains(&seconds)
            .then(|| Duration::from_secs(seconds))
    }

    /// Dictionary file to load for `language`
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use word_duel::config::GameSettings;
    /// use word_duel::locale::Language;
    ///
    /// let settings = GameSettings::default();
    /// assert_eq!(
    ///     settings.lexicon_path_for(Language::Russian),
    ///     Path::new("data/russian.txt")
    /// );
    /// ```
    #[must_use]
    pub fn lexicon_path_for(&self, language: Language) -> PathBuf {
        self.lexicon_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(language.default_lexicon()))
    }

    /// Language for non-interactive output
    #[must_use]
    pub fn language_or_default(&self) -> Language {
        self.language.unwrap_or(Language::English)
    }
}
