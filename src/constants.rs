//! Application-wide constants.
//!
//! This module defines names and fixed values shared between the TUI,
//! the CLI subcommands and the persistence helpers.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Ascendant Cards";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "ascendant-cards";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "AscendantCards";

/// Dataset file looked up in the working directory when nothing else is configured.
pub const DEFAULT_DATASET_FILE: &str = "ascendants.json";

/// Category selected on startup whenever the dataset contains it.
///
/// This intentionally wins over the saved preference.
pub const DEFAULT_CATEGORY: &str = "Aries";

/// Sentinel marking an absent MKS or Digbala value.
pub const ABSENT_SENTINEL: &str = "—";

/// Delimiter between meaning segments.
pub const MEANING_DELIMITER: &str = " / ";
