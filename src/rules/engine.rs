//! The game engine.
//!
//! `GameEngine` owns the configuration, the random source, the cue player
//! and exactly one live `GameSession`. Everything that changes the session
//! goes through it:
//!
//! - `advance` / `end_reveal_phase`: leave the reveal phase
//! - `submit_guess`: judge, record, cue, check limits
//! - `reset_session`: replace the session wholesale
//!
//! ## Reveal timing
//!
//! The engine never sleeps or spawns timers. A presenter either feeds
//! elapsed time through `advance`, or schedules its own timer from
//! `reveal_deadline()` and calls `end_reveal_phase` with the session id it
//! was given. A deadline that outlives its session is ignored.
//!
//! ```
//! use std::time::Duration;
//! use color_recall::{GameEngine, Outcome, Phase};
//!
//! let mut engine = GameEngine::seeded(7);
//! assert_eq!(engine.phase(), Phase::Revealing);
//!
//! engine.advance(Duration::from_secs(4));
//! assert_eq!(engine.phase(), Phase::Guessing);
//!
//! let report = engine.submit_guess("Cobol", "grey").unwrap();
//! assert_eq!(report.attempt.outcome, Outcome::Failed);
//! ```

use std::time::Duration;

use im::Vector;

use crate::core::attempt::Attempt;
use crate::core::config::GameConfig;
use crate::core::error::{ConfigError, GuessError};
use crate::core::rng::{GameRng, RandomSource};
use crate::core::selection::RoundSelection;
use crate::core::session::{GameOverReason, GameSession, Phase, SessionId};
use crate::cues::{play_quietly, Cue, CuePlayer, SilentCues};

use super::judge::{check_game_over, judge_guess};
use super::view::SessionView;

/// A pending reveal-phase end, tied to the session that scheduled it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealDeadline {
    pub session: SessionId,
    /// Time left before the reveal should end.
    pub remaining: Duration,
}

/// Result of a guess the engine accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessReport {
    /// The attempt just recorded.
    pub attempt: Attempt,
    /// Full attempt log after recording.
    pub attempts: Vector<Attempt>,
    /// Whether this guess ended the session.
    pub terminated: bool,
    pub game_over: Option<GameOverReason>,
}

/// Owner of the live session and its transition rules.
pub struct GameEngine {
    config: GameConfig,
    rng: Box<dyn RandomSource>,
    cues: Box<dyn CuePlayer>,
    session: GameSession,
}

impl GameEngine {
    /// Build an engine and start its first session.
    ///
    /// Fails only if the config is invalid.
    pub fn new(
        config: GameConfig,
        rng: impl RandomSource + 'static,
        cues: impl CuePlayer + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng: Box<dyn RandomSource> = Box::new(rng);
        let session = Self::initialize_session(&config, rng.as_mut(), SessionId::new(1));

        Ok(Self {
            config,
            rng,
            cues: Box::new(cues),
            session,
        })
    }

    /// Default rules, a seeded RNG and no sound.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        let config = GameConfig::default();
        let mut rng: Box<dyn RandomSource> = Box::new(GameRng::new(seed));
        let session = Self::initialize_session(&config, rng.as_mut(), SessionId::new(1));

        Self {
            config,
            rng,
            cues: Box::new(SilentCues),
            session,
        }
    }

    /// Draw a selection and build a fresh session in the reveal phase.
    fn initialize_session(config: &GameConfig, rng: &mut dyn RandomSource, id: SessionId) -> GameSession {
        let selection = RoundSelection::draw(&config.catalog, config.selection_size, rng);
        tracing::info!(session = %id, size = selection.len(), "session started");
        GameSession::new(id, selection)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session.id()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView::capture(&self.session, &self.config)
    }

    // === Reveal phase ===

    /// End the reveal phase of `session`.
    ///
    /// No-op if `session` is not the live session or the reveal already
    /// ended. Returns whether the phase changed.
    pub fn end_reveal_phase(&mut self, session: SessionId) -> bool {
        if session != self.session.id() {
            tracing::debug!(stale = %session, live = %self.session.id(), "ignoring stale reveal deadline");
            return false;
        }
        let ended = self.session.end_reveal();
        if ended {
            tracing::debug!(session = %session, "reveal phase ended");
        }
        ended
    }

    /// Feed elapsed wall-clock time.
    ///
    /// Ends the reveal once the accumulated time reaches the configured
    /// reveal duration. Returns whether the phase changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.session.is_revealing() {
            return false;
        }
        let total = self.session.add_reveal_time(elapsed);
        if total >= self.config.reveal_duration() {
            self.end_reveal_phase(self.session.id())
        } else {
            false
        }
    }

    /// The pending reveal end for the live session, if still revealing.
    #[must_use]
    pub fn reveal_deadline(&self) -> Option<RevealDeadline> {
        if !self.session.is_revealing() {
            return None;
        }
        Some(RevealDeadline {
            session: self.session.id(),
            remaining: self.config.reveal_duration().saturating_sub(self.session.reveal_elapsed()),
        })
    }

    // === Guessing ===

    /// Judge and record a guess.
    ///
    /// Rejected without touching state while revealing or after game over.
    /// Every accepted guess is recorded, requests a cue, and may end the
    /// session.
    pub fn submit_guess(&mut self, language: &str, color: &str) -> Result<GuessReport, GuessError> {
        if let Some(err) = GuessError::for_phase(self.session.phase()) {
            tracing::debug!(session = %self.session.id(), %err, "guess rejected");
            return Err(err);
        }

        let outcome = judge_guess(self.session.selection(), self.session.attempts(), language, color);
        let attempt = self.session.record(language, color, outcome).clone();
        tracing::debug!(
            session = %self.session.id(),
            sequence = attempt.sequence,
            language,
            %outcome,
            "guess recorded"
        );

        play_quietly(self.cues.as_mut(), Cue::from(outcome));

        let game_over = check_game_over(self.session.attempts(), &self.config);
        if let Some(reason) = game_over {
            self.session.terminate(reason);
            tracing::info!(
                session = %self.session.id(),
                attempts = self.session.attempts().len(),
                failed = self.session.failed_count(),
                %reason,
                "game over"
            );
        }

        Ok(GuessReport {
            attempt,
            attempts: self.session.attempts().clone(),
            terminated: game_over.is_some(),
            game_over,
        })
    }

    // === Restart ===

    /// Discard the live session and start a new one.
    ///
    /// The new session has a new id, a freshly drawn selection and an empty
    /// log. Returns the new id.
    pub fn reset_session(&mut self) -> SessionId {
        let previous = self.session.id();
        let id = previous.next();
        tracing::debug!(previous = %previous, "discarding session");
        self.session = Self::initialize_session(&self.config, self.rng.as_mut(), id);
        id
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
