//! Deadline-bounded input
//!
//! A dedicated reader thread owns the [`LineSource`] and answers read requests. Every
//! request carries a generation number and every reply echoes it back together with
//! the instant the line arrived. The game thread waits on the reply channel until the
//! turn deadline. A read abandoned after a timeout keeps running on the reader thread;
//! its reply comes back with an old generation and is dropped, so a late line can never
//! leak into a later request.

use crate::console::LineSource;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Consecutive read errors tolerated before the input counts as closed
const MAX_READ_FAILURES: u32 = 3;

/// Outcome of waiting for one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Awaited {
    /// A line arrived before the deadline
    Line(String),
    /// The deadline passed first
    TimedOut,
    /// The input stream ended
    Closed,
}

#[derive(Debug)]
struct Reply {
    generation: u64,
    line: Option<String>,
    arrived: Instant,
}

/// Races player input against per-turn deadlines
#[derive(Debug)]
pub struct TurnClock {
    requests: Sender<u64>,
    replies: Receiver<Reply>,
    generation: u64,
}

impl TurnClock {
    /// Spawn the reader thread for `source`
    ///
    /// # Errors
    /// Returns an error if the reader thread cannot be spawned.
    pub fn spawn<S: LineSource>(mut source: S) -> std::io::Result<Self> {
        let (request_tx, request_rx) = mpsc::channel::<u64>();
        let (reply_tx, reply_rx) = mpsc::channel();

        thread::Builder::new()
            .name("input-reader".to_string())
            .spawn(move || {
                let mut failures = 0;
                for generation in request_rx {
                    let line = match source.read_line() {
                        Ok(line) => {
                            failures = 0;
                            line
                        }
                        Err(err) if failures < MAX_READ_FAILURES => {
                            failures += 1;
                            warn!(%err, failures, "unreadable input line, treating it as empty");
                            Some(String::new())
                        }
                        Err(err) => {
                            warn!(%err, "input keeps failing, treating it as closed");
                            None
                        }
                    };
                    let reply = Reply {
                        generation,
                        line,
                        arrived: Instant::now(),
                    };
                    if reply_tx.send(reply).is_err() {
                        break;
                    }
                }
                debug!("input reader stopped");
            })?;

        Ok(Self {
            requests: request_tx,
            replies: reply_rx,
            generation: 0,
        })
    }

    /// Wait for one line until `deadline`
    ///
    /// A line that arrives after the deadline counts as a timeout, even if it is
    /// received before this call notices the deadline has passed.
    pub fn await_input(&mut self, deadline: Instant) -> Awaited {
        let generation = self.request();

        loop {
            let Some(remaining) = deadline.checked_duration_since(Instant::now()) else {
                return Awaited::TimedOut;
            };

            match self.replies.recv_timeout(remaining) {
                Ok(reply) => {
                    if let Some(awaited) = settle(reply, generation, Some(deadline)) {
                        return awaited;
                    }
                }
                Err(RecvTimeoutError::Timeout) => return Awaited::TimedOut,
                Err(RecvTimeoutError::Disconnected) => return Awaited::Closed,
            }
        }
    }

    /// Wait for one line with no deadline
    ///
    /// Returns `None` once the input stream has ended.
    pub fn read_line(&mut self) -> Option<String> {
        let generation = self.request();

        loop {
            let Ok(reply) = self.replies.recv() else {
                return None;
            };
            match settle(reply, generation, None) {
                Some(Awaited::Line(line)) => return Some(line),
                Some(_) => return None,
                None => {}
            }
        }
    }

    fn request(&mut self) -> u64 {
        self.generation += 1;
        // A dead reader shows up as a disconnected reply channel
        let _ = self.requests.send(self.generation);
        self.generation
    }
}

/// Decide what a reply means for the request `generation`
///
/// Returns `None` for replies that answer an earlier, abandoned request.
fn settle(reply: Reply, generation: u64, deadline: Option<Instant>) -> Option<Awaited> {
    if reply.generation != generation {
        debug!(
            stale = reply.generation,
            current = generation,
            "discarding input from an abandoned read"
        );
        return None;
    }

    if deadline.is_some_and(|deadline| reply.arrived > deadline) {
        debug!("input arrived after the deadline");
        return Some(Awaited::TimedOut);
    }

    Some(reply.line.map_or(Awaited::Closed, Awaited::Line))
}

/// Whole seconds left before `deadline`, rounded up
///
/// Any time left at all shows as at least one second.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use word_duel::game::clock::seconds_left;
///
/// assert_eq!(seconds_left(Duration::from_millis(1)), 1);
/// assert_eq!(seconds_left(Duration::from_millis(19_001)), 20);
/// assert_eq!(seconds_left(Duration::from_secs(20)), 20);
/// assert_eq!(seconds_left(Duration::ZERO), 0);
/// ```
#[must_use]
pub fn seconds_left(remaining: Duration) -> u64 {
    remaining.as_millis().div_ceil(1000) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::{ScriptedSource, Step};
    use std::io;

    #[test]
    fn line_before_deadline_is_delivered() {
        let mut clock = TurnClock::spawn(ScriptedSource::lines(["pet"])).unwrap();
        let deadline = Instant::now() + Duration::from_secs(5);
        assert_eq!(clock.await_input(deadline), Awaited::Line("pet".to_string()));
    }

    #[test]
    fn read_error_yields_empty_line_and_reading_continues() {
        let source = ScriptedSource::steps(vec![
            Step::Fail(io::ErrorKind::InvalidData),
            Step::Line("pet".to_string()),
        ]);
        let mut clock = TurnClock::spawn(source).unwrap();
        let deadline = Instant::now() + Duration::from_secs(5);

        assert_eq!(clock.await_input(deadline), Awaited::Line(String::new()));
        assert_eq!(clock.await_input(deadline), Awaited::Line("pet".to_string()));
    }

    #[test]
    fn persistent_read_errors_close_the_input() {
        let source = ScriptedSource::steps(vec![
            Step::Fail(io::ErrorKind::BrokenPipe);
            MAX_READ_FAILURES as usize + 1
        ]);
        let mut clock = TurnClock::spawn(source).unwrap();

        for _ in 0..MAX_READ_FAILURES {
            assert_eq!(clock.read_line().as_deref(), Some(""));
        }
        assert_eq!(clock.read_line(), None);
    }

    #[test]
    fn end_of_input_is_closed() {
        let mut clock = TurnClock::spawn(ScriptedSource::lines(Vec::<String>::new())).unwrap();
        let deadline = Instant::now() + Duration::from_secs(5);
        assert_eq!(clock.await_input(deadline), Awaited::Closed);
    }

    #[test]
    fn silence_times_out() {
        let source = ScriptedSource::lines(Vec::<String>::new()).then_hang();
        let mut clock = TurnClock::spawn(source).unwrap();

        let started = Instant::now();
        let deadline = started + Duration::from_millis(50);
        assert_eq!(clock.await_input(deadline), Awaited::TimedOut);
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn past_deadline_times_out_immediately() {
        let mut clock = TurnClock::spawn(ScriptedSource::lines(["pet"])).unwrap();
        let deadline = Instant::now() - Duration::from_millis(1);
        assert_eq!(clock.await_input(deadline), Awaited::TimedOut);
    }

    #[test]
    fn late_line_is_discarded_from_next_request() {
        let source = ScriptedSource::steps(vec![
            Step::Pause(Duration::from_millis(150)),
            Step::Line("late".to_string()),
            Step::Line("fresh".to_string()),
        ]);
        let mut clock = TurnClock::spawn(source).unwrap();

        let deadline = Instant::now() + Duration::from_millis(30);
        assert_eq!(clock.await_input(deadline), Awaited::TimedOut);

        let deadline = Instant::now() + Duration::from_secs(5);
        assert_eq!(clock.await_input(deadline), Awaited::Line("fresh".to_string()));
    }

    #[test]
    fn reply_one_millisecond_late_is_timeout() {
        let deadline = Instant::now();
        let reply = Reply {
            generation: 3,
            line: Some("pet".to_string()),
            arrived: deadline + Duration::from_millis(1),
        };
        assert_eq!(settle(reply, 3, Some(deadline)), Some(Awaited::TimedOut));
    }

    #[test]
    fn reply_for_old_generation_is_ignored() {
        let reply = Reply {
            generation: 2,
            line: Some("pet".to_string()),
            arrived: Instant::now(),
        };
        assert_eq!(settle(reply, 3, None), None);
    }

    #[test]
    fn unbounded_read_returns_lines_then_none() {
        let mut clock = TurnClock::spawn(ScriptedSource::lines(["1", "ann"])).unwrap();
        assert_eq!(clock.read_line().as_deref(), Some("1"));
        assert_eq!(clock.read_line().as_deref(), Some("ann"));
        assert_eq!(clock.read_line(), None);
    }

    #[test]
    fn seconds_round_up() {
        assert_eq!(seconds_left(Duration::from_millis(999)), 1);
        assert_eq!(seconds_left(Duration::from_millis(1000)), 1);
        assert_eq!(seconds_left(Duration::from_millis(1001)), 2);
    }
}
