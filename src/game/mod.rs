//! Turn timing, command handling and the game loop

pub mod clock;
mod command;
mod engine;

pub use clock::{Awaited, TurnClock};
pub use command::{COMMAND_PREFIX, Command, UnknownCommand};
pub use engine::{Game, GameContext, GameEnd, GameReport, TurnOutcome};
