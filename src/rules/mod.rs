//! Game rules and the engine that applies them.
//!
//! - `judge`: pure guess evaluation and the game-over check
//! - `engine`: `GameEngine`, the owner of the live session
//! - `view`: read-only snapshots for whatever draws the game

pub mod engine;
pub mod judge;
pub mod view;

pub use engine::{GameEngine, GuessReport, RevealDeadline};
pub use judge::{check_game_over, judge_guess};
pub use view::SessionView;
