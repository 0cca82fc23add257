//! Formatting utilities for console output

/// Render the words of a round as `"<prefix>word word ]"`
#[must_use]
pub fn attempts_line(prefix: &str, words: &[String]) -> String {
    let mut line = String::from(prefix);
    for word in words {
        line.push_str(word);
        line.push(' ');
    }
    line.push(']');
    line
}

/// One leaderboard row
#[must_use]
pub fn standings_row(name: &str, wins: usize) -> String {
    format!("\t{name} - {wins}")
}

/// One `/help` entry
#[must_use]
pub fn help_row(token: &str, description: &str) -> String {
    format!("{token} - {description}")
}
