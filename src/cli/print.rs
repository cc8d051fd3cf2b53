//! Print command: the headless counterpart of printing the card page.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::data::DataStore;
use crate::export::format_records;
use crate::models::{category_label, Record};
use crate::tui::filter::{normalize_query, NO_RESULTS_MESSAGE};

/// Print the cards of one ascendant as plain text
#[derive(Debug, Clone, Default, Args)]
pub struct PrintArgs {
    /// Dataset JSON file (defaults to config `paths.dataset`, then ./ascendants.json)
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Ascendant to print (defaults to the same choice the TUI starts on)
    #[arg(short, long, value_name = "NAME")]
    pub category: Option<String>,

    /// Only print cards whose meanings, karakas or Āditya contain TEXT
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,
}

impl PrintArgs {
    /// Execute the print command.
    ///
    /// `saved` is the persisted category preference, used when no
    /// `--category` is given.
    pub fn execute(&self, config: &Config, saved: Option<&str>, out: &mut impl Write) -> CliResult<()> {
        let path = config.resolve_dataset(self.data.as_deref());
        let store = DataStore::load(&path)?;

        let category = match self.category.as_deref() {
            Some(name) if store.contains(name) => name.to_string(),
            Some(name) => {
                return Err(CliError::validation(format!(
                    "Unknown category '{name}'. Available: {}",
                    store.categories().join(", ")
                )))
            }
            None => store
                .initial_category(saved)
                .map(str::to_string)
                .ok_or_else(|| CliError::validation("Dataset has no categories"))?,
        };

        let pack = store
            .pack(&category)
            .ok_or_else(|| CliError::validation(format!("Unknown category '{category}'")))?;
        let query = normalize_query(self.search.as_deref().unwrap_or_default());
        let records: Vec<&Record> = pack
            .houses
            .iter()
            .filter(|record| query.is_empty() || record.searchable_text().contains(&query))
            .collect();
        debug!(
            "Printing {} of {} records for {category}",
            records.len(),
            pack.len()
        );

        let write_err = |e: std::io::Error| CliError::io(format!("Failed to write output: {e}"));
        writeln!(out, "{}", category_label(&category)).map_err(write_err)?;
        writeln!(out).map_err(write_err)?;
        if records.is_empty() && !query.is_empty() {
            writeln!(out, "{NO_RESULTS_MESSAGE}").map_err(write_err)?;
        } else if !records.is_empty() {
            writeln!(out, "{}", format_records(records)).map_err(write_err)?;
        }
        Ok(())
    }
}
