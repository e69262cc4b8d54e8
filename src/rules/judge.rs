//! Guess evaluation.
//!
//! Both functions are pure so they can be tested without an engine.

use im::Vector;

use crate::core::attempt::{Attempt, Outcome};
use crate::core::config::GameConfig;
use crate::core::selection::RoundSelection;
use crate::core::session::GameOverReason;

/// Judge one guess against the selection and the attempts so far.
///
/// 1. A language already present in the log fails, whatever the color.
/// 2. The language is looked up case-sensitively; unknown names fail.
/// 3. The color is compared case-insensitively.
///
/// Empty strings are ordinary guesses and simply fail.
#[must_use]
pub fn judge_guess(selection: &RoundSelection, attempts: &Vector<Attempt>, language: &str, color: &str) -> Outcome {
    if attempts.iter().any(|a| a.language == language) {
        return Outcome::Failed;
    }

    match selection.find(language) {
        Some(pair) if pair.color_matches(color) => Outcome::Success,
        _ => Outcome::Failed,
    }
}

/// Check whether the log has hit a limit.
///
/// Either limit ends the game. When both are hit at once the failure limit
/// is reported.
#[must_use]
pub fn check_game_over(attempts: &Vector<Attempt>, config: &GameConfig) -> Option<GameOverReason> {
    let failed = attempts.iter().filter(|a| a.outcome == Outcome::Failed).count();

    if failed >= config.max_failures {
        Some(GameOverReason::TooManyFailures)
    } else if attempts.len() >= config.max_attempts {
        Some(GameOverReason::AttemptLimit)
    } else {
        None
    }
}
