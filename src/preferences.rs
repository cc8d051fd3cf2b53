//! Persistence of the last selected category.
//!
//! Exactly one value is stored. The file-backed store keeps it in
//! `preferences.toml` next to the application config; the in-memory store is
//! used by tests and by `--no-persist` sessions.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::Config;

/// File name of the preference file inside the config directory.
pub const PREFERENCES_FILE: &str = "preferences.toml";

/// Read/write access to the saved category.
pub trait PreferenceStore {
    /// Returns the previously saved category name, if any.
    fn get(&self) -> Option<String>;

    /// Saves `name`, replacing any previous value.
    fn set(&mut self, name: &str) -> Result<()>;
}

/// On-disk shape of `preferences.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selected_ascendant: Option<String>,
}

/// Preference store backed by a TOML file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Creates a store that reads and writes `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location.
    ///
    /// - Linux: `~/.config/AscendantCards/preferences.toml`
    /// - macOS: `~/Library/Application Support/AscendantCards/preferences.toml`
    /// - Windows: `%APPDATA%\AscendantCards\preferences.toml`
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(Config::config_dir()?.join(PREFERENCES_FILE)))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<PreferenceFile> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences: {}", self.path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse preferences: {}", self.path.display()))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        match self.read() {
            Ok(file) => file.selected_ascendant,
            Err(e) => {
                warn!("ignoring unreadable preferences: {e:#}");
                None
            }
        }
    }

    /// Writes through a temp file + rename.
    fn set(&mut self, name: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create preferences directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string(&PreferenceFile {
            selected_ascendant: Some(name.to_string()),
        })
        .context("Failed to serialize preferences")?;

        let temp_path = self.path.with_extension("toml.tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp preferences: {}", temp_path.display()))?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to rename preferences to: {}", self.path.display()))?;

        debug!(category = name, "saved selected category");
        Ok(())
    }
}

/// Preference store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    value: Option<String>,
}

impl MemoryPreferenceStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Creates a store that already holds `name`.
    #[must_use]
    pub fn with_value(name: impl Into<String>) -> Self {
        Self {
            value: Some(name.into()),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self) -> Option<String> {
        self.value.clone()
    }

    fn set(&mut self, name: &str) -> Result<()> {
        self.value = Some(name.to_string());
        Ok(())
    }
}
