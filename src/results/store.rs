//! JSON file persistence for game results

use super::{GameResult, ResultHistory};
use derive_more::{Display, Error};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Error type for result persistence
#[derive(Debug, Display, Error)]
pub enum StoreError {
    #[display("failed to read results from {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("results file {} is not valid JSON: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[display("failed to encode results: {source}")]
    Encode { source: serde_json::Error },
    #[display("failed to write results to {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Append-only history of finished games stored as a pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every recorded game
    ///
    /// A missing or unreadable file yields an empty history.
    #[must_use]
    pub fn load_all(&self) -> ResultHistory {
        match self.read() {
            Ok(history) => history,
            Err(err) => {
                warn!(%err, "ignoring unreadable results file");
                ResultHistory::default()
            }
        }
    }

    /// Record a finished game
    ///
    /// The whole history is rewritten through a temporary sibling file that is renamed
    /// over the original, so a crash mid-write leaves the previous file intact.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the existing file cannot be read or parsed, or if the
    /// new history cannot be written. An existing file is never replaced by a history
    /// that lost its records.
    #[instrument(skip_all, fields(path = %self.path.display(), winner = result.winner()))]
    pub fn append(&self, result: GameResult) -> Result<(), StoreError> {
        let mut history = self.read()?;
        history.push(result);

        let json = serde_json::to_string_pretty(&history)
            .map_err(|source| StoreError::Encode { source })?;

        let staging = self.staging_path();
        fs::write(&staging, json).map_err(|source| StoreError::Write {
            path: staging.clone(),
            source,
        })?;
        fs::rename(&staging, &self.path).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        info!(games = history.len(), "result saved");
        Ok(())
    }

    fn read(&self) -> Result<ResultHistory, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no results file yet");
                return Ok(ResultHistory::default());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if json.trim().is_empty() {
            return Ok(ResultHistory::default());
        }

        serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
