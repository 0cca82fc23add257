//! Console capabilities used by the game
//!
//! Output goes through [`Console`], input comes from a [`LineSource`]. The split lets the
//! turn clock move the input side onto its own reader thread while the game keeps
//! writing from the main thread.

mod terminal;
#[cfg(test)]
pub(crate) mod testing;

pub use terminal::{StdinSource, Terminal};

use std::io;

/// Styled text output
pub trait Console {
    /// Write text without a trailing newline
    fn print(&mut self, text: &str);

    /// Write a line of plain text
    fn line(&mut self, text: &str);

    /// Write a line that reports a problem
    fn error(&mut self, text: &str);

    /// Write a line that reports a success
    fn success(&mut self, text: &str);

    /// Write a line that should stand out
    fn highlight(&mut self, text: &str);
}

/// Blocking line-based input
pub trait LineSource: Send + 'static {
    /// Read the next line without its line terminator
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    /// Returns any I/O error raised by the underlying reader.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}
