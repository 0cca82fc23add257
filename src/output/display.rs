//! Display functions shared by in-game commands and the CLI

use super::formatters::{attempts_line, help_row, standings_row};
use crate::console::Console;
use crate::game::Command;
use crate::locale::Strings;
use crate::results::Standings;

/// Print a leaderboard, or an error if nobody has won yet
pub fn print_standings<C: Console + ?Sized>(
    console: &mut C,
    strings: &Strings,
    standings: &Standings,
) {
    if standings.is_empty() {
        console.error(strings.no_results);
        return;
    }

    console.success(&format!("\n{}", strings.best_players));
    for (name, wins) in standings.ranked() {
        console.highlight(&standings_row(name, wins));
    }
}

/// Print the words used so far in the round
pub fn print_attempts<C: Console + ?Sized>(console: &mut C, strings: &Strings, words: &[String]) {
    console.line(&attempts_line(strings.used_words, words));
}

/// Print the list of in-game commands
pub fn print_help<C: Console + ?Sized>(console: &mut C, strings: &Strings) {
    console.line(&format!("\n{}", strings.available_commands));
    for command in Command::ALL {
        let description = match command {
            Command::Help => continue,
            Command::ShowWords => strings.help_show_words,
            Command::Score => strings.help_score,
            Command::TotalScore => strings.help_total_score,
            Command::Exit => strings.help_exit,
        };
        console.line(&help_row(command.token(), description));
    }
}
