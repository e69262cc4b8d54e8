//! Read-only session snapshots for presenters.

use std::fmt::Write as _;

use im::Vector;
use serde::Serialize;

use crate::core::attempt::Attempt;
use crate::core::catalog::LanguageColorPair;
use crate::core::config::GameConfig;
use crate::core::session::{GameOverReason, GameSession, Phase, SessionId};

/// What a presenter may show.
///
/// The selection is only present while revealing. Cloning the attempt log
/// is O(1), so taking a view after every event is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub session: SessionId,
    pub phase: Phase,
    pub revealed: Option<Vec<LanguageColorPair>>,
    pub attempts: Vector<Attempt>,
    pub terminated: bool,
    pub game_over: Option<GameOverReason>,
    pub failures_left: usize,
    pub attempts_left: usize,
}

impl SessionView {
    #[must_use]
    pub fn capture(session: &GameSession, config: &GameConfig) -> Self {
        let revealed = session.is_revealing().then(|| session.selection().entries().to_vec());

        Self {
            session: session.id(),
            phase: session.phase(),
            revealed,
            attempts: session.attempts().clone(),
            terminated: session.is_terminated(),
            game_over: session.game_over_reason(),
            failures_left: config.max_failures.saturating_sub(session.failed_count()),
            attempts_left: config.max_attempts.saturating_sub(session.attempts().len()),
        }
    }

    /// Render the attempt log as a plain-text table.
    ///
    /// One row per attempt: number, language, the color as typed, and a
    /// ✓/✗ mark.
    #[must_use]
    pub fn attempt_table(&self) -> String {
        let lang_width = self
            .attempts
            .iter()
            .map(|a| a.language.chars().count())
            .chain(std::iter::once("Language".len()))
            .max()
            .unwrap_or(0);
        let color_width = self
            .attempts
            .iter()
            .map(|a| a.color.chars().count())
            .chain(std::iter::once("Color".len()))
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        let _ = writeln!(out, "{:>7}  {:<lang_width$}  {:<color_width$}  Status", "Attempt", "Language", "Color");
        for a in &self.attempts {
            let _ = writeln!(
                out,
                "{:>7}  {:<lang_width$}  {:<color_width$}  {}",
                a.sequence,
                a.language,
                a.color,
                a.outcome.mark()
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attempt::Outcome;
    use crate::core::selection::RoundSelection;

    fn session() -> GameSession {
        let selection = RoundSelection::from_entries(vec![
            LanguageColorPair::new("Go", "cyan"),
            LanguageColorPair::new("Ruby", "red"),
        ]);
        GameSession::new(SessionId::new(3), selection)
    }

    #[test]
    fn test_selection_only_visible_while_revealing() {
        let config = GameConfig::default();
        let mut s = session();

        let view = SessionView::capture(&s, &config);
        assert_eq!(view.phase, Phase::Revealing);
        assert_eq!(view.revealed.as_ref().map(Vec::len), Some(2));

        s.end_reveal();
        let view = SessionView::capture(&s, &config);
        assert_eq!(view.phase, Phase::Guessing);
        assert!(view.revealed.is_none());
    }

    #[test]
    fn test_remaining_counts() {
        let config = GameConfig::default();
        let mut s = session();
        s.end_reveal();
        s.record("Go", "cyan", Outcome::Success);
        s.record("Java", "red", Outcome::Failed);

        let view = SessionView::capture(&s, &config);
        assert_eq!(view.failures_left, 4);
        assert_eq!(view.attempts_left, 18);
        assert!(!view.terminated);
    }

    #[test]
    fn test_attempt_table() {
        let config = GameConfig::default();
        let mut s = session();
        s.end_reveal();
        s.record("Go", "cyan", Outcome::Success);
        s.record("TypeScript", "blue", Outcome::Failed);

        let table = SessionView::capture(&s, &config).attempt_table();
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Attempt  Language"));
        assert_eq!(lines[1], "      1  Go          cyan   ✓");
        assert_eq!(lines[2], "      2  TypeScript  blue   ✗");
    }
}
