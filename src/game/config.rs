use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::INITIAL_SNAKE_LENGTH;

/// How a head landing on the left edge is wrapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnWrap {
    /// Column 0 is treated like a negative column and sent to `cols - 1`,
    /// so the left-most column is only reachable by wrapping off the right edge.
    #[default]
    Legacy,
    /// Only columns below 0 wrap, mirroring the row rule.
    Strict,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub cols: usize,
    /// Milliseconds between two simulation ticks
    pub tick_interval_ms: u64,
    /// Left-edge wrap policy
    pub column_wrap: ColumnWrap,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 30,
            cols: 20,
            tick_interval_ms: 250,
            column_wrap: ColumnWrap::Legacy,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Default::default()
        }
    }

    /// Load a configuration from a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: GameConfig = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < INITIAL_SNAKE_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "rows must be at least {INITIAL_SNAKE_LENGTH}, got {}",
                self.rows
            )));
        }
        if self.cols < 2 {
            return Err(ConfigError::Invalid(format!(
                "cols must be at least 2, got {}",
                self.cols
            )));
        }
        if self.rows > i32::MAX as usize || self.cols > i32::MAX as usize {
            return Err(ConfigError::Invalid("grid is too large".to_string()));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.rows, 30);
        assert_eq!(config.cols, 20);
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert_eq!(config.column_wrap, ColumnWrap::Legacy);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.rows, 15);
        assert_eq!(config.cols, 12);
        assert_eq!(config.tick_interval_ms, 250);
    }

    #[test]
    fn test_validation() {
        assert!(GameConfig::new(3, 20).validate().is_err());
        assert!(GameConfig::new(4, 1).validate().is_err());
        assert!(GameConfig::new(4, 2).validate().is_ok());

        let config = GameConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rows = 12\ncolumn_wrap = \"strict\"").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.rows, 12);
        assert_eq!(config.cols, 20);
        assert_eq!(config.column_wrap, ColumnWrap::Strict);
    }

    #[test]
    fn test_load_rejects_bad_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rows = \"many\"").unwrap();
        assert!(matches!(
            GameConfig::from_file(file.path()),
            Err(ConfigError::Parse(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rows = 2").unwrap();
        assert!(matches!(
            GameConfig::from_file(file.path()),
            Err(ConfigError::Invalid(_))
        ));

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            GameConfig::from_file(&dir.path().join("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
