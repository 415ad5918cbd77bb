//! cinedex CLI
//!
//! Interactive shell over a catalog of movies, directors, and actors.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use std::path::PathBuf;

use clap::Parser;

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;
use settings::{resolve_database, DatabaseLocation, Settings};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let (settings, location) = load_location(cli.db, cli.memory)?;
            commands::shell::run_shell(&location, &settings.shell.prompt)
        }
        Commands::Stats => {
            let (_, location) = load_location(cli.db, cli.memory)?;
            commands::stats::run_stats(&location)
        }
        Commands::Settings => {
            commands::config::run_settings_show();
            Ok(())
        }
    }
}

fn load_location(
    db: Option<PathBuf>,
    memory: bool,
) -> Result<(Settings, DatabaseLocation), CliError> {
    let settings = Settings::load()?;
    let location = resolve_database(db, memory, &settings);
    log::debug!("Using catalog {:?}", location);
    Ok((settings, location))
}
