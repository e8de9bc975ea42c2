//! Configuration file support for choicemate.
//!
//! Configuration is loaded from `~/.config/choicemate/config.toml` with the
//! following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Configuration file
//! 3. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/choicemate/config.toml
//! spin_duration_ms = 2000
//! flicker_interval_ms = 100
//! greeting = "Hello !"
//!
//! # Extra categories; a name matching a built-in replaces its list
//! [[categories]]
//! name = "Movies"
//! choices = ["Alien", "Heat", "Arrival"]
//!
//! [[categories]]
//! name = "Custom"
//! choices = ["Tea", "Coffee"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::{ConfigError, ConfigResult};
use crate::spin::SpinTiming;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Total spin duration in milliseconds
    pub spin_duration_ms: Option<u64>,

    /// Flicker cadence in milliseconds
    pub flicker_interval_ms: Option<u64>,

    /// Greeting shown in the header
    pub greeting: Option<String>,

    /// User categories merged into the seeded catalog
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
}

/// A user-defined category
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryConfig {
    /// Category name; matching a built-in name replaces its word list
    pub name: String,

    /// Choice strings, in order
    #[serde(default)]
    pub choices: Vec<String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if the file doesn't exist or can't be
    /// parsed.
    pub fn load() -> Self {
        Self::load_or_default(&Self::config_path())
    }

    /// Load configuration from an explicit path, warning and defaulting on
    /// failure.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load_path(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    /// Load and parse a config file.
    pub fn load_path(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadFailed(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseFailed(path.to_path_buf(), e))
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("choicemate")
            .join("config.toml")
    }

    /// Spin timing with config overrides applied.
    pub fn spin_timing(&self) -> SpinTiming {
        let defaults = SpinTiming::default();
        SpinTiming::from_millis(
            self.spin_duration_ms
                .unwrap_or(defaults.duration.as_millis() as u64),
            self.flicker_interval_ms
                .unwrap_or(defaults.flicker_interval.as_millis() as u64),
        )
    }

    /// Merge user categories into a catalog.
    pub fn apply_categories(&self, catalog: &mut Catalog) {
        for category in &self.categories {
            catalog.insert_category(&category.name, category.choices.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.spin_duration_ms.is_none());
        assert!(config.flicker_interval_ms.is_none());
        assert!(config.greeting.is_none());
        assert!(config.categories.is_empty());
        assert_eq!(config.spin_timing(), SpinTiming::default());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            spin_duration_ms = 1000
            flicker_interval_ms = 50
            greeting = "Hi there"

            [[categories]]
            name = "Movies"
            choices = ["Alien", "Heat"]
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.spin_duration_ms, Some(1000));
        assert_eq!(config.flicker_interval_ms, Some(50));
        assert_eq!(config.greeting, Some("Hi there".to_string()));
        assert_eq!(config.categories.len(), 1);
        assert_eq!(config.spin_timing().flicker_count(), 20);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: Config = toml::from_str("flicker_interval_ms = 200").unwrap();
        let timing = config.spin_timing();
        assert_eq!(timing.duration.as_millis(), 2000);
        assert_eq!(timing.flicker_interval.as_millis(), 200);
        assert_eq!(timing.flicker_count(), 10);
    }

    #[test]
    fn test_apply_categories() {
        let toml = r#"
            [[categories]]
            name = "Custom"
            choices = ["Tea", "Coffee"]

            [[categories]]
            name = "Movies"
            choices = ["Alien"]
        "#;
        let config: Config = toml::from_str(toml).unwrap();

        let mut catalog = Catalog::seeded();
        config.apply_categories(&mut catalog);

        assert_eq!(catalog.choices("Custom"), ["Tea", "Coffee"]);
        assert_eq!(catalog.choices("Movies"), ["Alien"]);
        assert_eq!(catalog.names().last().unwrap(), &"Movies");
    }
}
