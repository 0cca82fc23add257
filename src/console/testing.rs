//! Test doubles for console input and output

use super::{Console, LineSource};
use std::collections::VecDeque;
use std::io;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Style {
    Plain,
    Error,
    Success,
    Highlight,
}

/// Console that keeps every write for later inspection
#[derive(Debug, Default)]
pub(crate) struct RecordingConsole {
    pub(crate) entries: Vec<(Style, String)>,
}

impl RecordingConsole {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn texts(&self, style: Style) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(s, _)| *s == style)
            .map(|(_, text)| text.as_str())
            .collect()
    }

    pub(crate) fn contains(&self, style: Style, needle: &str) -> bool {
        self.texts(style).iter().any(|text| text.contains(needle))
    }

    pub(crate) fn count(&self, style: Style, needle: &str) -> usize {
        self.texts(style)
            .iter()
            .filter(|text| text.contains(needle))
            .count()
    }

    pub(crate) fn transcript(&self) -> String {
        self.entries
            .iter()
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Console for RecordingConsole {
    fn print(&mut self, text: &str) {
        self.entries.push((Style::Plain, text.to_string()));
    }

    fn line(&mut self, text: &str) {
        self.entries.push((Style::Plain, text.to_string()));
    }

    fn error(&mut self, text: &str) {
        self.entries.push((Style::Error, text.to_string()));
    }

    fn success(&mut self, text: &str) {
        self.entries.push((Style::Success, text.to_string()));
    }

    fn highlight(&mut self, text: &str) {
        self.entries.push((Style::Highlight, text.to_string()));
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Step {
    Line(String),
    Pause(Duration),
    Fail(io::ErrorKind),
}

/// What a scripted source does once its steps run out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Exhausted {
    Close,
    Hang,
}

/// Line source that replays a fixed script
#[derive(Debug)]
pub(crate) struct ScriptedSource {
    steps: VecDeque<Step>,
    exhausted: Exhausted,
}

impl ScriptedSource {
    pub(crate) fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            steps: lines.into_iter().map(|l| Step::Line(l.into())).collect(),
            exhausted: Exhausted::Close,
        }
    }

    pub(crate) fn steps(steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into(),
            exhausted: Exhausted::Close,
        }
    }

    pub(crate) fn then_hang(mut self) -> Self {
        self.exhausted = Exhausted::Hang;
        self
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        loop {
            match self.steps.pop_front() {
                Some(Step::Line(line)) => return Ok(Some(line)),
                Some(Step::Pause(duration)) => thread::sleep(duration),
                Some(Step::Fail(kind)) => return Err(io::Error::from(kind)),
                None if self.exhausted == Exhausted::Hang => thread::park(),
                None => return Ok(None),
            }
        }
    }
}
