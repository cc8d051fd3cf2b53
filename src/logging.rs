//! Tracing setup.
//!
//! The terminal belongs to the UI, so log output goes to a file in the
//! config directory instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::constants::APP_BINARY_NAME;

/// Default log file location: `<config_dir>/ascendant-cards.log`.
pub fn default_log_path() -> Result<PathBuf> {
    Ok(Config::config_dir()?.join(format!("{APP_BINARY_NAME}.log")))
}

/// Builds the filter: `RUST_LOG` when set, otherwise `quiet_level`, or
/// `debug` with `verbose`.
#[must_use]
pub fn env_filter(verbose: bool, quiet_level: &str) -> EnvFilter {
    let fallback = if verbose { "debug" } else { quiet_level };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into())
}

/// Installs the global subscriber writing to `path`.
///
/// Fails if the file cannot be opened or a subscriber is already set.
pub fn init_file_logging(path: &Path, verbose: bool) -> Result<()> {
    let file = open_log_file(path)?;

    tracing_subscriber::registry()
        .with(env_filter(verbose, "info"))
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()
        .context("Failed to install tracing subscriber")?;
    Ok(())
}

/// Installs a stderr subscriber for the headless commands.
///
/// Only warnings are shown unless `verbose` or `RUST_LOG` says otherwise.
pub fn init_stderr_logging(verbose: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(verbose, "warn"))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to install tracing subscriber")?;
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}
