//! Turn engine and game loop
//!
//! Players alternate, first seat first. Each turn has a single deadline anchored when
//! the turn starts; commands, rejected words and empty lines all spend the same
//! budget. The first timeout, end of input or `/exit` ends the whole game.

use super::clock::{Awaited, TurnClock, seconds_left};
use super::command::Command;
use crate::console::Console;
use crate::core::{AttemptLog, LetterViolation, Players, Seat, SourceWord};
use crate::config::MAX_TURN_SECONDS;
use crate::lexicon::Lexicon;
use crate::locale::Strings;
use crate::output::{print_attempts, print_help, print_standings};
use crate::results::{GameResult, ResultStore, StoreError};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Immutable collaborators shared by every game of a session
#[derive(Debug, Clone, Copy)]
pub struct GameContext<'a> {
    pub lexicon: &'a Lexicon,
    pub store: &'a ResultStore,
    pub strings: &'a Strings,
    pub turn_limit: Duration,
}

/// Why a game stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The player to move ran out of time
    TimedOut,
    /// The player to move typed `/exit`
    Exited,
    /// Input ended while waiting for the player to move
    InputClosed,
}

/// Result of one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The word was accepted and the turn passes to the other player
    Accepted(String),
    /// The game is over
    Ended(GameEnd),
}

/// Everything known about a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub result: GameResult,
    pub end: GameEnd,
    pub attempts: Vec<String>,
}

enum Flow {
    Continue,
    Exit,
}

/// One game between two players on one source word
pub struct Game<'a, C: Console> {
    context: GameContext<'a>,
    console: &'a mut C,
    clock: &'a mut TurnClock,
    players: Players,
    source: SourceWord,
    attempts: AttemptLog,
}

impl<'a, C: Console> Game<'a, C> {
    pub fn new(
        context: GameContext<'a>,
        console: &'a mut C,
        clock: &'a mut TurnClock,
        players: Players,
        source: SourceWord,
    ) -> Self {
        Self {
            context,
            console,
            clock,
            players,
            source,
            attempts: AttemptLog::new(),
        }
    }

    /// Play turns until the game ends, then announce and save the result
    ///
    /// # Errors
    /// Returns `StoreError` if the result cannot be saved.
    #[instrument(skip_all, fields(
        source = %self.source,
        first = self.players.first().name(),
        second = self.players.second().name(),
    ))]
    pub fn play(mut self) -> Result<GameReport, StoreError> {
        info!("game started");

        let end = 'game: loop {
            for seat in Seat::ORDER {
                if let TurnOutcome::Ended(end) = self.play_turn(seat) {
                    break 'game end;
                }
            }
        };

        let winner = self.players.at(Seat::winner_after(self.attempts.len()));
        let result = GameResult::new(
            self.players.first().name(),
            self.players.second().name(),
            winner.name(),
        );
        info!(?end, winner = winner.name(), attempts = self.attempts.len(), "game over");

        let strings = self.context.strings;
        self.console.success(&strings.player_win(winner.name()));
        print_attempts(&mut *self.console, strings, self.attempts.words());
        self.context.store.append(result.clone())?;

        Ok(GameReport {
            result,
            end,
            attempts: self.attempts.words().to_vec(),
        })
    }

    /// Run one turn for the player in `seat`
    pub fn play_turn(&mut self, seat: Seat) -> TurnOutcome {
        let strings = self.context.strings;
        let name = self.players.at(seat).name().to_string();
        let limit = self
            .context
            .turn_limit
            .min(Duration::from_secs(MAX_TURN_SECONDS));
        let deadline = Instant::now() + limit;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                self.console.line(&strings.player_timed_out(&name));
                return TurnOutcome::Ended(GameEnd::TimedOut);
            }

            self.console.highlight(&format!("\n{}", strings.player_move(&name)));
            self.console.line(&strings.time_left(seconds_left(remaining)));
            self.console.line(strings.ask_word);

            let input = match self.clock.await_input(deadline) {
                Awaited::Line(line) => line.trim().to_lowercase(),
                Awaited::TimedOut => {
                    info!(player = %name, "turn timed out");
                    self.console.line(strings.time_is_up);
                    self.console.line(&strings.player_timed_out(&name));
                    return TurnOutcome::Ended(GameEnd::TimedOut);
                }
                Awaited::Closed => {
                    info!(player = %name, "input closed");
                    self.console.error(strings.input_closed);
                    return TurnOutcome::Ended(GameEnd::InputClosed);
                }
            };

            if input.is_empty() {
                continue;
            }

            if Command::is_command(&input) {
                match self.run_command(&input) {
                    Flow::Continue => continue,
                    Flow::Exit => return TurnOutcome::Ended(GameEnd::Exited),
                }
            }

            if self.try_word(&input) {
                debug!(player = %name, word = %input, "word accepted");
                return TurnOutcome::Accepted(input);
            }
        }
    }

    /// Validate a word and record it; reports the reason to the console on rejection
    fn try_word(&mut self, word: &str) -> bool {
        let strings = self.context.strings;

        if !self.context.lexicon.contains(word) {
            self.console.error(strings.word_not_in_dictionary);
            return false;
        }

        if self.attempts.contains(word) {
            self.console.error(strings.reuse_word_error);
            return false;
        }

        match self.source.budget().validate(word) {
            Ok(()) => self.attempts.push(word),
            Err(violation) => {
                debug!(%violation, word, "word rejected");
                self.console.error(match violation {
                    LetterViolation::ExceedsFrequency { .. } => strings.reuse_letters_error,
                    LetterViolation::UnavailableLetter { .. } => {
                        strings.availability_letters_error
                    }
                });
                false
            }
        }
    }

    fn run_command(&mut self, input: &str) -> Flow {
        let strings = self.context.strings;

        let command = match input.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                debug!(%err, "unknown command");
                self.console.error(strings.wrong_command);
                return Flow::Continue;
            }
        };

        match command {
            Command::Help => print_help(&mut *self.console, strings),
            Command::ShowWords => {
                print_attempts(&mut *self.console, strings, self.attempts.words());
            }
            Command::Score => {
                let standings = self.context.store.load_all().head_to_head_wins(
                    self.players.first().name(),
                    self.players.second().name(),
                );
                print_standings(&mut *self.console, strings, &standings);
            }
            Command::TotalScore => {
                let standings = self.context.store.load_all().aggregate_wins();
                print_standings(&mut *self.console, strings, &standings);
            }
            Command::Exit => return Flow::Exit,
        }

        Flow::Continue
    }
}
