//! Attempt log entries.

use serde::{Deserialize, Serialize};

/// Result of judging a single guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failed,
}

impl Outcome {
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Single-character mark used in the attempt table.
    #[must_use]
    pub fn mark(self) -> char {
        match self {
            Outcome::Success => '✓',
            Outcome::Failed => '✗',
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Success => f.write_str("success"),
            Outcome::Failed => f.write_str("failed"),
        }
    }
}

/// One recorded guess.
///
/// The guess strings are stored exactly as typed. `sequence` is the
/// 1-based position of this attempt in its session's log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub sequence: u32,
    pub language: String,
    pub color: String,
    pub outcome: Outcome,
}

impl Attempt {
    #[must_use]
    pub fn new(sequence: u32, language: impl Into<String>, color: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            sequence,
            language: language.into(),
            color: color.into(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_marks() {
        assert_eq!(Outcome::Success.mark(), '✓');
        assert_eq!(Outcome::Failed.mark(), '✗');
        assert!(Outcome::Success.is_success());
        assert!(!Outcome::Failed.is_success());
    }

    #[test]
    fn test_outcome_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Outcome::Failed).unwrap(), "\"failed\"");
        assert_eq!(Outcome::Success.to_string(), "success");
    }

    #[test]
    fn test_attempt_keeps_raw_strings() {
        let attempt = Attempt::new(1, "  Go ", "CYAN", Outcome::Failed);
        assert_eq!(attempt.language, "  Go ");
        assert_eq!(attempt.color, "CYAN");
        assert_eq!(attempt.sequence, 1);
    }
}
