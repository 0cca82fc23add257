//! Lexicon loading from newline-delimited word lists

use super::Lexicon;
use derive_more::{Display, Error};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Error type for lexicon loading
#[derive(Debug, Display, Error)]
pub enum LexiconError {
    #[display("dictionary file {} not found", path.display())]
    NotFound { path: PathBuf },
    #[display("failed to read dictionary file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
}

/// Load a lexicon from a file with one word per line
///
/// # Errors
///
/// Returns `LexiconError::NotFound` if the file does not exist, or
/// `LexiconError::Read` for any other I/O failure.
///
/// # Examples
/// ```no_run
/// use word_duel::lexicon::load_from_file;
///
/// let lexicon = load_from_file("data/english.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon, LexiconError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LexiconError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LexiconError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let lexicon = Lexicon::from_words(content.lines());
    info!(words = lexicon.len(), "lexicon loaded");
    Ok(lexicon)
}
