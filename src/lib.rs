//! Ascendant Cards Library
//!
//! Loads ascendant house tables from a JSON document and presents them as a
//! searchable card grid in the terminal, with clipboard export, category
//! navigation and a persisted last-selected ascendant.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod data;
pub mod export;
pub mod logging;
pub mod models;
pub mod preferences;
pub mod shortcuts;
pub mod tui;
