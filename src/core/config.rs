//! Game configuration.
//!
//! Defaults reproduce the shipped game: ten pairs per round, a four second
//! reveal, and the session ends after five failures or twenty attempts.
//! A config can be loaded from JSON; missing fields take their defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::error::ConfigError;

/// Tunable rules and assets for a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of pairs drawn into each round.
    pub selection_size: usize,

    /// How long the selection stays visible, in milliseconds.
    pub reveal_millis: u64,

    /// Failed attempts that end the session.
    pub max_failures: usize,

    /// Total attempts that end the session.
    pub max_attempts: usize,

    /// Audio clips for the success and failure cues.
    pub cues: CueAssets,

    /// Catalog to draw from.
    pub catalog: Catalog,
}

/// Where a cue player finds its clips. The engine never opens these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CueAssets {
    pub success: PathBuf,
    pub failure: PathBuf,
}

impl Default for CueAssets {
    fn default() -> Self {
        Self {
            success: PathBuf::from("./sounds/yay.mp3"),
            failure: PathBuf::from("./sounds/game-over.mp3"),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            selection_size: 10,
            reveal_millis: 4000,
            max_failures: 5,
            max_attempts: 20,
            cues: CueAssets::default(),
            catalog: Catalog::standard(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_selection_size(mut self, size: usize) -> Self {
        self.selection_size = size;
        self
    }

    #[must_use]
    pub fn with_reveal_duration(mut self, duration: Duration) -> Self {
        self.reveal_millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_max_failures(mut self, max: usize) -> Self {
        self.max_failures = max;
        self
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max: usize) -> Self {
        self.max_attempts = max;
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn reveal_duration(&self) -> Duration {
        Duration::from_millis(self.reveal_millis)
    }

    /// Check the limits are usable and the catalog can fill a round.
    ///
    /// A zero reveal duration is allowed: the reveal ends on the first tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selection_size == 0 {
            return Err(ConfigError::Zero { field: "selection_size" });
        }
        if self.max_failures == 0 {
            return Err(ConfigError::Zero { field: "max_failures" });
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::Zero { field: "max_attempts" });
        }
        self.catalog.ensure_supports(self.selection_size)?;
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CatalogError;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.selection_size, 10);
        assert_eq!(config.reveal_duration(), Duration::from_millis(4000));
        assert_eq!(config.max_failures, 5);
        assert_eq!(config.max_attempts, 20);
        assert_eq!(config.cues.success, PathBuf::from("./sounds/yay.mp3"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_selection_size(4)
            .with_reveal_duration(Duration::from_secs(1))
            .with_max_failures(2)
            .with_max_attempts(3);

        assert_eq!(config.selection_size, 4);
        assert_eq!(config.reveal_millis, 1000);
        assert_eq!(config.max_failures, 2);
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn test_zero_limits_rejected() {
        let err = GameConfig::new().with_max_failures(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Zero { field: "max_failures" }));

        let err = GameConfig::new().with_max_attempts(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Zero { field: "max_attempts" }));

        let err = GameConfig::new().with_selection_size(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Zero { field: "selection_size" }));
    }

    #[test]
    fn test_selection_larger_than_catalog_rejected() {
        let err = GameConfig::new().with_selection_size(11).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Catalog(CatalogError::TooSmall { available: 10, required: 11 })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json_str(r#"{"reveal_millis": 1500, "max_attempts": 8}"#).unwrap();

        assert_eq!(config.reveal_millis, 1500);
        assert_eq!(config.max_attempts, 8);
        assert_eq!(config.max_failures, 5);
        assert_eq!(config.catalog, Catalog::standard());
    }

    #[test]
    fn test_json_custom_catalog() {
        let json = r#"{
            "selection_size": 2,
            "catalog": {"entries": [
                {"name": "Go", "color": "cyan"},
                {"name": "Zig", "color": "gold"},
                {"name": "Nim", "color": "yellow"}
            ]}
        }"#;
        let config = GameConfig::from_json_str(json).unwrap();

        assert_eq!(config.catalog.len(), 3);
        assert_eq!(config.selection_size, 2);
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(GameConfig::from_json_str("{not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
