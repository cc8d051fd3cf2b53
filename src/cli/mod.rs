//! CLI command handlers.
//!
//! Headless, scriptable access to the dataset: the same text the clipboard
//! receives, without starting the terminal UI.

pub mod categories;
pub mod common;
pub mod print;

// Re-export types used by main.rs and tests
pub use categories::CategoriesArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use print::PrintArgs;
