//! Settings file handling
//!
//! Loads and validates the TOML settings file that binds pointer gestures to
//! keyboard keys.

use crate::emitter;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Validation failures that must stop the program before monitoring starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("movement threshold must be positive (got {0})")]
    NonPositiveThreshold(i32),

    #[error("unknown key name '{1}' for '{0}'")]
    UnknownKey(&'static str, String),
}

/// Gesture-to-key bindings and tuning, loaded once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Minimum time in milliseconds between two directional key presses
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Accumulated movement (in device units) required to fire a direction
    #[serde(default = "default_threshold")]
    pub threshold: i32,

    /// Key emitted on left click
    #[serde(default = "default_left_click")]
    pub left_click: String,

    /// Key emitted on right click
    #[serde(default = "default_right_click")]
    pub right_click: String,

    /// Key emitted on middle click
    #[serde(default = "default_middle_click")]
    pub middle_click: String,

    /// Keys emitted for each movement direction
    #[serde(default = "default_up")]
    pub up: String,
    #[serde(default = "default_down")]
    pub down: String,
    #[serde(default = "default_left")]
    pub left: String,
    #[serde(default = "default_right")]
    pub right: String,

    /// Input device to monitor (empty = auto-detect)
    #[serde(default = "default_device")]
    pub device: String,
}

fn default_debounce_ms() -> u64 {
    1000
}

fn default_threshold() -> i32 {
    10
}

fn default_left_click() -> String {
    "enter".to_string()
}

fn default_right_click() -> String {
    "esc".to_string()
}

fn default_middle_click() -> String {
    "tab".to_string()
}

fn default_up() -> String {
    "up".to_string()
}

fn default_down() -> String {
    "down".to_string()
}

fn default_left() -> String {
    "left".to_string()
}

fn default_right() -> String {
    "right".to_string()
}

fn default_device() -> String {
    "/dev/input/event0".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            threshold: default_threshold(),
            left_click: default_left_click(),
            right_click: default_right_click(),
            middle_click: default_middle_click(),
            up: default_up(),
            down: default_down(),
            left: default_left(),
            right: default_right(),
            device: default_device(),
        }
    }
}

impl Config {
    /// Get the default settings file path
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("trackpad2key");

        fs::create_dir_all(&config_dir)?;
        Ok(config_dir.join("settings.toml"))
    }

    /// Load settings from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {:?}", path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {:?}", path))?;
        info!("Loaded settings from {:?}", path);
        Ok(config)
    }

    /// Write a default settings file
    pub fn write_default(path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(&Config::default())?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write settings file: {:?}", path))?;
        info!("Created default settings file at {:?}", path);
        Ok(())
    }

    /// Check the invariants the translator and emitter rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threshold <= 0 {
            return Err(ConfigError::NonPositiveThreshold(self.threshold));
        }
        for (field, name) in self.bound_keys() {
            if emitter::lookup_key(name).is_none() {
                return Err(ConfigError::UnknownKey(field, name.to_string()));
            }
        }
        Ok(())
    }

    /// All configured key names, with the field each one came from.
    pub fn bound_keys(&self) -> [(&'static str, &str); 7] {
        [
            ("left_click", &self.left_click),
            ("right_click", &self.right_click),
            ("middle_click", &self.middle_click),
            ("up", &self.up),
            ("down", &self.down),
            ("left", &self.left),
            ("right", &self.right),
        ]
    }

    /// The debounce interval as a duration.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.debounce_ms, 1000);
        assert_eq!(config.threshold, 10);
        assert_eq!(config.left_click, "enter");
        assert_eq!(config.device, "/dev/input/event0");
    }

    #[test]
    fn test_config_deserialization() {
        let toml = r#"
debounce_ms = 500
threshold = 20
left_click = "space"
device = "/dev/input/event5"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.threshold, 20);
        assert_eq!(config.left_click, "space");
        // Unspecified fields fall back to defaults
        assert_eq!(config.right_click, "esc");
        assert_eq!(config.up, "up");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("threshold = 10"));
        assert!(toml.contains("middle_click = \"tab\""));
    }

    #[test]
    fn test_validate_rejects_non_positive_threshold() {
        let mut config = Config::default();
        config.threshold = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveThreshold(0))
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_key() {
        let mut config = Config::default();
        config.middle_click = "hyper".to_string();
        match config.validate() {
            Err(ConfigError::UnknownKey(field, name)) => {
                assert_eq!(field, "middle_click");
                assert_eq!(name, "hyper");
            }
            other => panic!("expected UnknownKey, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_debounce_duration() {
        let mut config = Config::default();
        config.debounce_ms = 250;
        assert_eq!(config.debounce(), Duration::from_millis(250));
    }
}
