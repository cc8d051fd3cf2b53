//! Ascendant Cards - terminal browser for ascendant house tables
//!
//! Starts the interactive card grid, or runs one of the headless commands.

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use ascendant_cards::cli::{CategoriesArgs, CliError, ExitCode, PrintArgs};
use ascendant_cards::config::Config;
use ascendant_cards::constants::APP_NAME;
use ascendant_cards::data::DataStore;
use ascendant_cards::logging;
use ascendant_cards::preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use ascendant_cards::tui::{self, AppState, ClipboardExporter};

/// Ascendant Cards - browse, search and copy ascendant house tables
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Dataset JSON file (defaults to config `paths.dataset`, then ./ascendants.json)
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Do not read or write the saved ascendant
    #[arg(long)]
    no_persist: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the cards of one ascendant as plain text
    Print(PrintArgs),
    /// List the ascendants in the dataset
    Categories(CategoriesArgs),
}

fn main() -> Result<()> {
    let Cli {
        command,
        data,
        no_persist,
        verbose,
    } = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config, using defaults: {e:#}");
            Config::default()
        }
    };
    config.validate().context("Invalid configuration")?;

    match command {
        Some(command) => {
            if let Err(e) = logging::init_stderr_logging(verbose) {
                eprintln!("Warning: {e:#}");
            }
            let code = match run_command(command, data, &config) {
                Ok(()) => ExitCode::Success,
                Err(e) => {
                    eprintln!("Error: {e}");
                    e.code
                }
            };
            if code != ExitCode::Success {
                std::process::exit(code.code());
            }
            Ok(())
        }
        None => run_interactive(data, no_persist, verbose, config),
    }
}

fn run_command(command: Command, data: Option<PathBuf>, config: &Config) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    match command {
        Command::Print(mut args) => {
            args.data = args.data.or(data);
            let saved = FilePreferenceStore::at_default_location()
                .ok()
                .and_then(|store| store.get());
            args.execute(config, saved.as_deref(), &mut stdout)
        }
        Command::Categories(mut args) => {
            args.data = args.data.or(data);
            args.execute(config, &mut stdout)
        }
    }
}

fn run_interactive(
    data: Option<PathBuf>,
    no_persist: bool,
    verbose: bool,
    config: Config,
) -> Result<()> {
    match logging::default_log_path() {
        Ok(path) => {
            if let Err(e) = logging::init_file_logging(&path, verbose) {
                eprintln!("Warning: logging disabled: {e:#}");
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {e:#}"),
    }
    info!("{} v{} starting", APP_NAME, env!("CARGO_PKG_VERSION"));

    let preferences: Box<dyn PreferenceStore> = if no_persist {
        Box::new(MemoryPreferenceStore::new())
    } else {
        match FilePreferenceStore::at_default_location() {
            Ok(store) => Box::new(store),
            Err(e) => {
                warn!("Preferences unavailable, not persisting: {e:#}");
                Box::new(MemoryPreferenceStore::new())
            }
        }
    };

    let dataset = config.resolve_dataset(data.as_deref());
    info!("Loading dataset from {}", dataset.display());
    let result = DataStore::load(&dataset);

    let mut app_state = AppState::from_load_result(
        result,
        preferences,
        ClipboardExporter::system(),
        config,
        Instant::now(),
    );

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    result
}
