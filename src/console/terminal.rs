//! Terminal-backed console

use super::{Console, LineSource};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Writes to stdout, colouring errors red, successes green and highlights yellow
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Console for Terminal {
    fn print(&mut self, text: &str) {
        print!("{text}");
        // Prompt text must be visible before the reader blocks
        let _ = io::stdout().flush();
    }

    fn line(&mut self, text: &str) {
        println!("{text}");
    }

    fn error(&mut self, text: &str) {
        println!("{}", text.red());
    }

    fn success(&mut self, text: &str) {
        println!("{}", text.green());
    }

    fn highlight(&mut self, text: &str) {
        println!("{}", text.yellow());
    }
}

/// Decode one raw input line, replacing invalid UTF-8 and dropping the terminator
fn decode_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches(['\r', '\n'])
        .to_string()
}

/// Reads lines from stdin
#[derive(Debug, Default)]
pub struct StdinSource;

impl LineSource for StdinSource {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        if io::stdin().lock().read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        Ok(Some(decode_line(&bytes)))
    }
}
