//! navrail - A collapsible navigation rail for the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use navrail_app::{load_nav_config, AppState, PersistedPreference};
use navrail_core::prelude::*;

/// navrail - A collapsible navigation rail for the terminal
#[derive(Parser, Debug)]
#[command(name = "navrail")]
#[command(about = "A collapsible navigation rail for the terminal", long_about = None)]
struct Args {
    /// Base directory holding .navrail/ (nav config and persisted UI state)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    navrail_core::logging::init()?;

    let base = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    info!("Using base directory {:?}", base);

    let config = load_nav_config(&base);
    let prefs = PersistedPreference::new(&base);
    let state = AppState::new(config, prefs)?;

    navrail_tui::run(state)
}
