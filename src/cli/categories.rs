//! Categories command: list the ascendants in a dataset.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::data::DataStore;
use crate::models::glyph_for;

/// List the ascendants of a dataset in document order
#[derive(Debug, Clone, Default, Args)]
pub struct CategoriesArgs {
    /// Dataset JSON file (defaults to config `paths.dataset`, then ./ascendants.json)
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,
}

impl CategoriesArgs {
    /// Execute the categories command
    pub fn execute(&self, config: &Config, out: &mut impl Write) -> CliResult<()> {
        let path = config.resolve_dataset(self.data.as_deref());
        let store = DataStore::load(&path)?;

        for name in store.categories() {
            let count = store.pack(name).map_or(0, |pack| pack.len());
            writeln!(out, "{} {name} ({count})", glyph_for(name))
                .map_err(|e| CliError::io(format!("Failed to write output: {e}")))?;
        }
        Ok(())
    }
}
