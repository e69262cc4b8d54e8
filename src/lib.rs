//! # color-recall
//!
//! A memory game engine. The player is shown a random set of programming
//! languages paired with colors, the set is hidden, and the player must
//! recall each language's color. Too many failures or attempts end the game.
//!
//! ## Design
//!
//! 1. **Explicit ownership**: `GameEngine` owns exactly one live
//!    `GameSession`. Restarting replaces the session value; nothing is
//!    reset in place.
//!
//! 2. **Injectable randomness**: selections are drawn through the
//!    `RandomSource` trait. `GameRng` is seeded and reproducible,
//!    `ScriptedRandom` pins an exact order.
//!
//! 3. **No hidden clocks**: the reveal phase ends when the presenter feeds
//!    elapsed time or reports a deadline keyed to the session id.
//!
//! 4. **Cues never fail the game**: cue playback errors are logged and
//!    dropped.
//!
//! ## Modules
//!
//! - `core`: catalog, selection, attempts, sessions, RNG, configuration, errors
//! - `rules`: guess judging, the engine, presenter views
//! - `cues`: audio cue players
//! - `presenter`: line-oriented terminal front-end
//! - `logging`: subscriber setup for binaries

pub mod core;
pub mod cues;
pub mod logging;
pub mod presenter;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Attempt, Outcome,
    Catalog, LanguageColorPair,
    CueAssets, GameConfig,
    CatalogError, ConfigError, CueError, GuessError,
    GameRng, GameRngState, RandomSource, ScriptedRandom,
    RoundSelection,
    GameOverReason, GameSession, Phase, SessionId,
};

pub use crate::rules::{check_game_over, judge_guess, GameEngine, GuessReport, RevealDeadline, SessionView};

pub use crate::cues::{play_quietly, BellCues, Cue, CuePlayer, RecordingCues, SilentCues};

pub use crate::presenter::TerminalPresenter;
