//! TOML-backed persistence for the score history.
//!
//! Loading is deliberately forgiving: a missing, unreadable or corrupt file
//! yields an empty history so a damaged store can never keep the game from
//! starting. Saving reports failures to the caller, which logs and plays on.

use std::{fs, io, path::Path};

use crown_rush_system_scoreboard::ScoreHistory;
use thiserror::Error;

/// Failures that can occur while writing the score history to disk.
#[derive(Debug, Error)]
pub(crate) enum ScoreStoreError {
    /// The history file could not be written.
    #[error("failed to write score history")]
    Io(#[from] io::Error),
    /// The history could not be encoded as TOML.
    #[error("failed to encode score history")]
    Encode(#[from] toml::ser::Error),
}

/// Reads the score history from the given path, degrading to an empty
/// history when the file is missing or unparseable.
pub(crate) fn load(path: &Path) -> ScoreHistory {
    let Ok(contents) = fs::read_to_string(path) else {
        return ScoreHistory::default();
    };

    match toml::from_str(&contents) {
        Ok(history) => history,
        Err(error) => {
            eprintln!(
                "ignoring corrupt score history at {}: {error}",
                path.display()
            );
            ScoreHistory::default()
        }
    }
}

/// Writes the score history to the given path.
pub(crate) fn save(path: &Path, history: &ScoreHistory) -> Result<(), ScoreStoreError> {
    let contents = toml::to_string_pretty(history)?;
    fs::write(path, contents)?;
    Ok(())
}
