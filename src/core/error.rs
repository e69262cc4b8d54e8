//! Error types.
//!
//! A wrong guess is never an error; it is recorded as a failed attempt.
//! These types cover building a game (catalog, config), calling the engine
//! in the wrong phase, and cue playback, which the engine logs and drops.

use std::path::PathBuf;

use thiserror::Error;

use super::session::Phase;

/// Problems building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("language {0:?} appears more than once in the catalog")]
    DuplicateName(String),

    #[error("catalog entry has an empty language name")]
    EmptyName,

    #[error("catalog has {available} entries but a round needs {required}")]
    TooSmall { available: usize, required: usize },
}

/// Problems loading or validating a `GameConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// A guess submitted while the session is not accepting guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guesses are not accepted while the selection is being revealed")]
    StillRevealing,

    #[error("the game is over; start a new session to keep playing")]
    GameOver,
}

impl GuessError {
    /// The rejection matching a phase, or `None` if guessing is allowed.
    #[must_use]
    pub fn for_phase(phase: Phase) -> Option<Self> {
        match phase {
            Phase::Revealing => Some(GuessError::StillRevealing),
            Phase::Guessing => None,
            Phase::GameOver => Some(GuessError::GameOver),
        }
    }
}

/// Cue playback failure raised by a `CuePlayer`.
#[derive(Debug, Error)]
pub enum CueError {
    #[error("audio backend unavailable: {0}")]
    Unavailable(String),

    #[error("cue output failed: {0}")]
    Io(#[from] std::io::Error),
}
