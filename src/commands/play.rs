//! Interactive game session
//!
//! Language selection, player registration and source word selection, followed by one
//! timed game.

use crate::config::GameSettings;
use crate::console::{Console, LineSource};
use crate::core::{Player, PlayerNameError, Players, SourceWord, SourceWordError};
use crate::game::{Game, GameContext, GameReport, TurnClock};
use crate::lexicon::{Lexicon, load_from_file};
use crate::locale::{LANGUAGE_INPUT_ERROR, LANGUAGE_PROMPT, Language, Strings};
use crate::results::ResultStore;
use anyhow::{Context, Result, anyhow};
use tracing::info;

/// Run one complete game reading from `input` and writing to `console`
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded, if input ends before the game
/// starts, or if the result cannot be saved.
pub fn run_play<S: LineSource, C: Console>(
    settings: &GameSettings,
    input: S,
    console: &mut C,
) -> Result<GameReport> {
    let mut clock = TurnClock::spawn(input).context("failed to start the input reader")?;

    let language = match settings.language {
        Some(language) => language,
        None => choose_language(&mut clock, console)?,
    };
    let strings = language.strings();

    let lexicon = load_from_file(settings.lexicon_path_for(language))?;
    let store = ResultStore::new(&settings.results_path);

    let players = register_players(&mut clock, console, strings)?;
    let source = choose_source_word(&mut clock, console, strings, &lexicon)?;
    info!(?language, source = %source, "starting game");

    let context = GameContext {
        lexicon: &lexicon,
        store: &store,
        strings,
        turn_limit: settings.turn_limit,
    };
    let report = Game::new(context, console, &mut clock, players, source).play()?;
    Ok(report)
}

fn prompt<C: Console>(clock: &mut TurnClock, console: &mut C, text: &str) -> Result<String> {
    console.print(&format!("{text} "));
    clock
        .read_line()
        .ok_or_else(|| anyhow!("input ended before the game started"))
}

fn choose_language<C: Console>(clock: &mut TurnClock, console: &mut C) -> Result<Language> {
    loop {
        let choice = prompt(clock, console, LANGUAGE_PROMPT)?;
        if let Some(language) = Language::from_choice(&choice) {
            return Ok(language);
        }
        console.error(&format!("\n{LANGUAGE_INPUT_ERROR}"));
    }
}

fn register_players<C: Console>(
    clock: &mut TurnClock,
    console: &mut C,
    strings: &Strings,
) -> Result<Players> {
    let first = ask_player(clock, console, strings, strings.ask_first_player)?;
    loop {
        let second = ask_player(clock, console, strings, strings.ask_second_player)?;
        match Players::new(first.clone(), second) {
            Ok(players) => return Ok(players),
            Err(err) => report_name_error(console, strings, &err),
        }
    }
}

fn ask_player<C: Console>(
    clock: &mut TurnClock,
    console: &mut C,
    strings: &Strings,
    question: &str,
) -> Result<Player> {
    loop {
        let name = prompt(clock, console, question)?;
        match Player::new(&name) {
            Ok(player) => return Ok(player),
            Err(err) => report_name_error(console, strings, &err),
        }
    }
}

fn report_name_error<C: Console>(console: &mut C, strings: &Strings, err: &PlayerNameError) {
    console.error(match err {
        PlayerNameError::Empty => strings.name_empty_error,
        PlayerNameError::ContainsWhitespace => strings.name_whitespace_error,
        PlayerNameError::Taken { .. } => strings.name_taken_error,
    });
}

fn choose_source_word<C: Console>(
    clock: &mut TurnClock,
    console: &mut C,
    strings: &Strings,
    lexicon: &Lexicon,
) -> Result<SourceWord> {
    console.line(strings.choose_source_word);
    loop {
        let Some(text) = clock.read_line() else {
            return Err(anyhow!("input ended before the game started"));
        };
        match SourceWord::new(&text, lexicon) {
            Ok(source) => return Ok(source),
            Err(SourceWordError::NotInLexicon { .. }) => {
                console.error(strings.word_not_in_dictionary);
            }
            Err(SourceWordError::InvalidLength { .. }) => console.error(strings.size_error),
        }
    }
}
