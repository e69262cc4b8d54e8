//! Core game types: catalog, selection, attempts, sessions, RNG, configuration.
//!
//! Nothing in here decides whether a guess is right. The rules live in
//! `rules`; this module holds the data they operate on.

pub mod attempt;
pub mod catalog;
pub mod config;
pub mod error;
pub mod rng;
pub mod selection;
pub mod session;

pub use attempt::{Attempt, Outcome};
pub use catalog::{Catalog, LanguageColorPair};
pub use config::{CueAssets, GameConfig};
pub use error::{CatalogError, ConfigError, CueError, GuessError};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRandom};
pub use selection::RoundSelection;
pub use session::{GameOverReason, GameSession, Phase, SessionId};
