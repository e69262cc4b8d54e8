//! Line-oriented terminal front-end.
//!
//! Reads guesses from any `BufRead`, writes the game to any `Write`, and
//! waits out the reveal through a caller-supplied function, so the whole
//! loop runs in tests without a terminal or a real clock.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::core::session::Phase;
use crate::rules::{GameEngine, SessionView};

const CLEAR: &str = "\x1b[2J\x1b[H";

/// Drives a `GameEngine` from text input.
pub struct TerminalPresenter<R, W, S> {
    input: R,
    output: W,
    sleep: S,
    clear_screen: bool,
}

impl<R: BufRead, W: Write, S: FnMut(Duration)> TerminalPresenter<R, W, S> {
    pub fn new(input: R, output: W, sleep: S) -> Self {
        Self {
            input,
            output,
            sleep,
            clear_screen: true,
        }
    }

    /// Hide the selection by printing blank lines instead of an ANSI clear.
    #[must_use]
    pub fn without_clear(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Play sessions until input ends or the player declines a rematch.
    ///
    /// Returns the number of sessions played.
    pub fn run(&mut self, engine: &mut GameEngine) -> io::Result<usize> {
        let mut played = 0;
        loop {
            played += 1;
            if !self.play_session(engine)? {
                return Ok(played);
            }
            if !self.ask_play_again()? {
                return Ok(played);
            }
            engine.reset_session();
        }
    }

    /// Play one session. Returns false if input ended early.
    fn play_session(&mut self, engine: &mut GameEngine) -> io::Result<bool> {
        self.reveal(engine)?;

        while engine.phase() == Phase::Guessing {
            let Some(language) = self.prompt("Programming Language: ")? else {
                return Ok(false);
            };
            let Some(color) = self.prompt("Color Name: ")? else {
                return Ok(false);
            };

            match engine.submit_guess(&language, &color) {
                Ok(report) => {
                    writeln!(self.output, "{} {}", report.attempt.outcome.mark(), report.attempt.outcome)?;
                }
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                }
            }
            self.render_attempts(&engine.view())?;
        }

        let view = engine.view();
        match view.game_over {
            Some(reason) => writeln!(self.output, "Game Over! ({reason})")?,
            None => writeln!(self.output, "Game Over!")?,
        }
        Ok(true)
    }

    fn reveal(&mut self, engine: &mut GameEngine) -> io::Result<()> {
        let view = engine.view();
        writeln!(self.output, "Memorize these colors:")?;
        for pair in view.revealed.iter().flatten() {
            writeln!(self.output, "  {:<12} {}", pair.name, pair.color)?;
        }
        self.output.flush()?;

        if let Some(deadline) = engine.reveal_deadline() {
            (self.sleep)(deadline.remaining);
            engine.end_reveal_phase(deadline.session);
        }

        if self.clear_screen {
            write!(self.output, "{CLEAR}")?;
        } else {
            writeln!(self.output, "{}", "\n".repeat(40))?;
        }
        Ok(())
    }

    fn render_attempts(&mut self, view: &SessionView) -> io::Result<()> {
        write!(self.output, "{}", view.attempt_table())?;
        if !view.terminated {
            writeln!(
                self.output,
                "{} failures left, {} attempts left",
                view.failures_left, view.attempts_left
            )?;
        }
        Ok(())
    }

    /// Prompt until a non-empty line arrives. `None` on end of input.
    ///
    /// Only the trailing newline is stripped; the rest is passed on as typed.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        loop {
            write!(self.output, "{label}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim_end_matches(&['\r', '\n'][..]);
            if !line.is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
    }

    fn ask_play_again(&mut self) -> io::Result<bool> {
        let Some(answer) = self.prompt("Play Again? [y/n] ")? else {
            return Ok(false);
        };
        Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}
