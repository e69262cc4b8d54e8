//! Audio feedback cues.
//!
//! The engine asks for a cue after every guess and moves on. Playback is
//! fire-and-forget: a `CuePlayer` may fail, and `play_quietly` logs the
//! failure and drops it so it can never change game state.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::core::attempt::Outcome;
use crate::core::config::CueAssets;
use crate::core::error::CueError;

/// Which clip to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Success,
    Failure,
}

impl From<Outcome> for Cue {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Cue::Success,
            Outcome::Failed => Cue::Failure,
        }
    }
}

/// Something that can play a cue.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue) -> Result<(), CueError>;
}

impl<P: CuePlayer + ?Sized> CuePlayer for Box<P> {
    fn play(&mut self, cue: Cue) -> Result<(), CueError> {
        (**self).play(cue)
    }
}

/// Request a cue, logging and suppressing any failure.
///
/// Returns whether the cue played.
pub fn play_quietly(player: &mut dyn CuePlayer, cue: Cue) -> bool {
    match player.play(cue) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(?cue, error = %err, "cue playback failed");
            false
        }
    }
}

/// Plays nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentCues;

impl CuePlayer for SilentCues {
    fn play(&mut self, _cue: Cue) -> Result<(), CueError> {
        Ok(())
    }
}

/// Rings the terminal bell: once for success, twice for failure.
///
/// Stands in for the configured audio clips on a plain terminal.
#[derive(Debug)]
pub struct BellCues<W: Write> {
    out: W,
    assets: CueAssets,
}

impl<W: Write> BellCues<W> {
    pub fn new(out: W, assets: CueAssets) -> Self {
        Self { out, assets }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CuePlayer for BellCues<W> {
    fn play(&mut self, cue: Cue) -> Result<(), CueError> {
        let (clip, bells) = match cue {
            Cue::Success => (&self.assets.success, "\x07"),
            Cue::Failure => (&self.assets.failure, "\x07\x07"),
        };
        tracing::trace!(clip = %clip.display(), "playing cue");
        self.out.write_all(bells.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Records requested cues into a shared log.
///
/// Clones share the same log, so a test can hand one clone to the engine
/// and inspect the other.
#[derive(Clone, Debug, Default)]
pub struct RecordingCues {
    played: Rc<RefCell<Vec<Cue>>>,
}

impl RecordingCues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues requested so far, in order.
    #[must_use]
    pub fn played(&self) -> Vec<Cue> {
        self.played.borrow().clone()
    }
}

impl CuePlayer for RecordingCues {
    fn play(&mut self, cue: Cue) -> Result<(), CueError> {
        self.played.borrow_mut().push(cue);
        Ok(())
    }
}
