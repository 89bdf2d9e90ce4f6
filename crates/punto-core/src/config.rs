//! Configuration management for Punto Medio.
//!
//! Loads configuration from ${PUNTO_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for configuration and log directories.
    //!
    //! PUNTO_HOME resolution order:
    //! 1. PUNTO_HOME environment variable (if set)
    //! 2. ~/.config/punto (default)
    //! 3. ./.punto when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the Punto Medio home directory.
    pub fn punto_home() -> PathBuf {
        if let Ok(home) = std::env::var("PUNTO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".punto"),
            |h| h.join(".config").join("punto"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        punto_home().join("config.toml")
    }

    /// Returns the directory the interactive mode writes its log file to.
    pub fn logs_dir() -> PathBuf {
        punto_home().join("logs")
    }
}

/// Gesture thresholds, in touch pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub feed_dead_zone_px: f32,
    pub feed_open_threshold_px: f32,
    pub detail_dead_zone_px: f32,
    /// Fraction of the viewport width that commits a dismiss drag.
    pub dismiss_ratio: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            feed_dead_zone_px: 10.0,
            feed_open_threshold_px: 60.0,
            detail_dead_zone_px: 8.0,
            dismiss_ratio: 0.3,
        }
    }
}

/// Slide durations for the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub enter_ms: u64,
    pub drag_exit_ms: u64,
    pub back_exit_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enter_ms: 350,
            drag_exit_ms: 250,
            back_exit_ms: 350,
        }
    }
}

impl AnimationConfig {
    pub fn enter(&self) -> Duration {
        Duration::from_millis(self.enter_ms)
    }

    pub fn drag_exit(&self) -> Duration {
        Duration::from_millis(self.drag_exit_ms)
    }

    pub fn back_exit(&self) -> Duration {
        Duration::from_millis(self.back_exit_ms)
    }
}

/// Search input configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Terminal cell geometry used to turn mouse positions into touch pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub cell_width_px: f32,
    pub cell_height_px: f32,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            cell_width_px: 8.0,
            cell_height_px: 16.0,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Events dataset to load instead of the bundled one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,

    #[serde(default)]
    pub gestures: GestureConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub terminal: TerminalConfig,
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config
            .check()
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Rejects values the navigation model cannot work with.
    fn check(&self) -> Result<()> {
        let gestures = &self.gestures;
        if !(gestures.dismiss_ratio > 0.0 && gestures.dismiss_ratio <= 1.0) {
            anyhow::bail!(
                "gestures.dismiss_ratio must be in (0, 1], got {}",
                gestures.dismiss_ratio
            );
        }
        if gestures.feed_dead_zone_px < 0.0 || gestures.detail_dead_zone_px < 0.0 {
            anyhow::bail!("gesture dead zones must not be negative");
        }
        if self.terminal.cell_width_px <= 0.0 || self.terminal.cell_height_px <= 0.0 {
            anyhow::bail!("terminal cell size must be positive");
        }
        Ok(())
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}
