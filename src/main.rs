//! Word Duel - CLI
//!
//! Two players, one long source word, twenty seconds per move.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use word_duel::{
    commands::{run_leaderboard, run_play, run_versus},
    config::{DEFAULT_RESULTS_FILE, DEFAULT_TURN_SECONDS, GameSettings, MAX_TURN_SECONDS},
    console::{StdinSource, Terminal},
    locale::Language,
    results::ResultStore,
};

#[derive(Parser)]
#[command(
    name = "word_duel",
    about = "Two-player word game: build words from the letters of a source word against the clock",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Interface language; asked interactively when omitted
    #[arg(short, long, global = true, value_enum)]
    language: Option<Language>,

    /// Dictionary file, one word per line (default: data/<language>.txt)
    #[arg(short = 'd', long, global = true)]
    lexicon: Option<PathBuf>,

    /// File that stores finished games
    #[arg(short, long, global = true, default_value = DEFAULT_RESULTS_FILE)]
    results: PathBuf,

    /// Seconds each player has per turn
    #[arg(short, long, global = true, default_value_t = DEFAULT_TURN_SECONDS)]
    turn_seconds: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default)
    Play,

    /// Show total wins of every player
    Leaderboard,

    /// Show wins of two players against each other
    Versus {
        /// First player name
        first: String,

        /// Second player name
        second: String,
    },
}

impl Cli {
    fn settings(&self) -> Result<GameSettings> {
        let turn_limit = GameSettings::turn_limit_from_secs(self.turn_seconds).ok_or_else(|| {
            anyhow!("--turn-seconds must be between 1 and {MAX_TURN_SECONDS}")
        })?;

        Ok(GameSettings {
            language: self.language,
            lexicon_path: self.lexicon.clone(),
            results_path: self.results.clone(),
            turn_limit,
        })
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let settings = cli.settings()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let mut terminal = Terminal::new();

    match command {
        Commands::Play => {
            run_play(&settings, StdinSource, &mut terminal)?;
        }
        Commands::Leaderboard => {
            let store = ResultStore::new(&settings.results_path);
            let strings = settings.language_or_default().strings();
            run_leaderboard(&store, strings, &mut terminal);
        }
        Commands::Versus { first, second } => {
            let store = ResultStore::new(&settings.results_path);
            let strings = settings.language_or_default().strings();
            run_versus(&store, strings, &first, &second, &mut terminal);
        }
    }

    Ok(())
}
