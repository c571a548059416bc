use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::Cell;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Configuration for the game
///
/// The defaults are the classic board: a 20x20 grid, one tick every 200ms,
/// the snake starting alone at (10, 10) and the first food at (15, 15).
/// Every field may be omitted from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per side of the square grid
    pub grid_size: usize,
    /// Milliseconds between two ticks
    pub tick_interval_ms: u64,
    /// Where the snake starts
    pub initial_head: Cell,
    /// Where the first food sits
    pub initial_food: Cell,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            tick_interval_ms: 200,
            initial_head: Cell::new(10, 10),
            initial_food: Cell::new(15, 15),
        }
    }
}

impl GameConfig {
    /// Parse a TOML document, then validate it
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::Invalid("grid_size must be at least 1".into()));
        }
        if self.grid_size > i32::MAX as usize {
            return Err(ConfigError::Invalid(format!(
                "grid_size {} does not fit grid coordinates",
                self.grid_size
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be greater than 0".into(),
            ));
        }
        if !self.initial_head.is_within(self.grid_size) {
            return Err(ConfigError::Invalid(format!(
                "initial_head ({}, {}) lies outside a {}x{} grid",
                self.initial_head.x, self.initial_head.y, self.grid_size, self.grid_size
            )));
        }
        if !self.initial_food.is_within(self.grid_size) {
            return Err(ConfigError::Invalid(format!(
                "initial_food ({}, {}) lies outside a {}x{} grid",
                self.initial_food.x, self.initial_food.y, self.grid_size, self.grid_size
            )));
        }
        if self.initial_food == self.initial_head {
            return Err(ConfigError::Invalid(
                "initial_food must not start under the snake".into(),
            ));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.tick_interval(), Duration::from_millis(200));
        assert_eq!(config.initial_head, Cell::new(10, 10));
        assert_eq!(config.initial_food, Cell::new(15, 15));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str("tick_interval_ms = 120\n").unwrap();
        assert_eq!(config.tick_interval_ms, 120);
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.initial_head, Cell::new(10, 10));
    }

    #[test]
    fn test_full_toml() {
        let text = r#"
            grid_size = 12
            tick_interval_ms = 150
            initial_head = { x = 3, y = 4 }
            initial_food = { x = 8, y = 8 }
        "#;
        let config = GameConfig::from_toml_str(text).unwrap();
        assert_eq!(config.grid_size, 12);
        assert_eq!(config.initial_head, Cell::new(3, 4));
        assert_eq!(config.initial_food, Cell::new(8, 8));
    }

    #[test]
    fn test_rejects_out_of_grid_cells() {
        let err = GameConfig::from_toml_str("grid_size = 10\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_toml_str("initial_food = { x = -1, y = 0 }\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_zero_values() {
        let config = GameConfig {
            grid_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = GameConfig::from_toml_str("grid_size = \"big\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load(Path::new("/nonexistent/wasd_snake.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
