//! Game session state.
//!
//! A `GameSession` is one play-through: a fixed selection, the reveal flag,
//! the attempt log and the game-over flag. It is a plain value owned by the
//! engine. Restarting builds a new session with a new `SessionId` rather
//! than clearing this one.
//!
//! ## Phases
//!
//! ```text
//! Revealing --(reveal elapsed)--> Guessing --(limit hit)--> GameOver
//! ```
//!
//! `Guessing` loops on each guess that does not hit a limit. `GameOver` is
//! terminal for the session.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::attempt::{Attempt, Outcome};
use super::selection::RoundSelection;

/// Identity of a session within one engine.
///
/// Reveal deadlines carry the id of the session that scheduled them, so a
/// deadline from a replaced session can be recognized and ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Selection is visible; guesses are not accepted.
    Revealing,
    /// Selection is hidden; guesses are accepted.
    Guessing,
    /// A limit was reached. Only a new session continues play.
    GameOver,
}

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Failed attempts reached the failure limit.
    TooManyFailures,
    /// Total attempts reached the attempt limit.
    AttemptLimit,
}

impl std::fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOverReason::TooManyFailures => f.write_str("too many failed attempts"),
            GameOverReason::AttemptLimit => f.write_str("attempt limit reached"),
        }
    }
}

/// One play-through.
///
/// Mutated only through the engine. Fields are read through accessors so
/// the invariants (fixed selection, append-only log, one-way flags) hold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    id: SessionId,
    selection: RoundSelection,
    reveal_phase: bool,
    reveal_elapsed: Duration,
    attempts: Vector<Attempt>,
    game_over: Option<GameOverReason>,
}

impl GameSession {
    /// Start a session in the reveal phase with an empty log.
    #[must_use]
    pub fn new(id: SessionId, selection: RoundSelection) -> Self {
        Self {
            id,
            selection,
            reveal_phase: true,
            reveal_elapsed: Duration::ZERO,
            attempts: Vector::new(),
            game_over: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn selection(&self) -> &RoundSelection {
        &self.selection
    }

    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.reveal_phase
    }

    /// Reveal time accumulated through elapsed-time ticks.
    #[must_use]
    pub fn reveal_elapsed(&self) -> Duration {
        self.reveal_elapsed
    }

    #[must_use]
    pub fn attempts(&self) -> &Vector<Attempt> {
        &self.attempts
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.game_over.is_some()
    }

    #[must_use]
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.game_over.is_some() {
            Phase::GameOver
        } else if self.reveal_phase {
            Phase::Revealing
        } else {
            Phase::Guessing
        }
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.attempts.iter().filter(|a| a.outcome == Outcome::Failed).count()
    }

    #[must_use]
    pub fn success_count(&self) -> usize {
        self.attempts.len() - self.failed_count()
    }

    /// Whether a language was already guessed this session (exact match).
    #[must_use]
    pub fn has_guessed(&self, language: &str) -> bool {
        self.attempts.iter().any(|a| a.language == language)
    }

    // === Transitions (engine only) ===

    /// Hide the selection. Returns false if it was already hidden.
    pub(crate) fn end_reveal(&mut self) -> bool {
        std::mem::replace(&mut self.reveal_phase, false)
    }

    pub(crate) fn add_reveal_time(&mut self, elapsed: Duration) -> Duration {
        self.reveal_elapsed = self.reveal_elapsed.saturating_add(elapsed);
        self.reveal_elapsed
    }

    /// Append an attempt, numbering it after the current log.
    pub(crate) fn record(&mut self, language: &str, color: &str, outcome: Outcome) -> &Attempt {
        let sequence = u32::try_from(self.attempts.len() + 1).unwrap_or(u32::MAX);
        self.attempts.push_back(Attempt::new(sequence, language, color, outcome));
        &self.attempts[self.attempts.len() - 1]
    }

    /// Mark the session over. The first reason sticks.
    pub(crate) fn terminate(&mut self, reason: GameOverReason) {
        self.game_over.get_or_insert(reason);
    }
}
