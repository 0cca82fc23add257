//! Offline statistics from the result file

use crate::console::Console;
use crate::locale::Strings;
use crate::output::print_standings;
use crate::results::{ResultStore, Standings};

/// Print wins of every player across all recorded games
pub fn run_leaderboard<C: Console>(
    store: &ResultStore,
    strings: &Strings,
    console: &mut C,
) -> Standings {
    let standings = store.load_all().aggregate_wins();
    print_standings(console, strings, &standings);
    standings
}

/// Print wins of `first` and `second` in the games they played against each other
pub fn run_versus<C: Console>(
    store: &ResultStore,
    strings: &Strings,
    first: &str,
    second: &str,
    console: &mut C,
) -> Standings {
    let standings = store.load_all().head_to_head_wins(first, second);
    print_standings(console, strings, &standings);
    standings
}
