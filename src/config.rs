//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::CONFIG_DIR_NAME;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Dataset used when no `--data` flag is given
    #[serde(default)]
    pub dataset: Option<PathBuf>,
}

/// UI timing and interaction settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// How long a toast stays visible
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    /// Quiet period before a search edit is applied
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    /// Minimum horizontal mouse drag, in cells, that counts as a swipe
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: u16,
    /// How long a card stays highlighted after being copied
    #[serde(default = "default_copied_flash_ms")]
    pub copied_flash_ms: u64,
}

const fn default_toast_duration_ms() -> u64 {
    2000
}

const fn default_search_debounce_ms() -> u64 {
    300
}

const fn default_swipe_threshold() -> u16 {
    8
}

const fn default_copied_flash_ms() -> u64 {
    500
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            toast_duration_ms: default_toast_duration_ms(),
            search_debounce_ms: default_search_debounce_ms(),
            swipe_threshold: default_swipe_threshold(),
            copied_flash_ms: default_copied_flash_ms(),
        }
    }
}

impl UiConfig {
    /// Toast visibility window.
    #[must_use]
    pub const fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Search debounce window.
    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Copied-card highlight window.
    #[must_use]
    pub const fn copied_flash(&self) -> Duration {
        Duration::from_millis(self.copied_flash_ms)
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/AscendantCards/config.toml`
/// - macOS: `~/Library/Application Support/AscendantCards/config.toml`
/// - Windows: `%APPDATA%\AscendantCards\config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `search_debounce_ms` is non-zero
    /// - `swipe_threshold` is non-zero
    /// - `toast_duration_ms` is non-zero
    pub fn validate(&self) -> Result<()> {
        if self.ui.search_debounce_ms == 0 {
            anyhow::bail!("ui.search_debounce_ms must be greater than zero");
        }
        if self.ui.swipe_threshold == 0 {
            anyhow::bail!("ui.swipe_threshold must be greater than zero");
        }
        if self.ui.toast_duration_ms == 0 {
            anyhow::bail!("ui.toast_duration_ms must be greater than zero");
        }
        Ok(())
    }

    /// Resolves which dataset file to open.
    ///
    /// Priority: explicit CLI path, then `paths.dataset`, then
    /// `ascendants.json` in the working directory.
    #[must_use]
    pub fn resolve_dataset(&self, cli_path: Option<&Path>) -> PathBuf {
        cli_path
            .map(Path::to_path_buf)
            .or_else(|| self.paths.dataset.clone())
            .unwrap_or_else(|| PathBuf::from(crate::constants::DEFAULT_DATASET_FILE))
    }
}
