//! Logger setup for the `cinedex` binary.
//!
//! `log::info!` is user-facing output and prints bare to stdout; warnings
//! and errors get a level prefix. Verbose mode switches to env_logger's
//! timestamped format and enables debug records from the library crates.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use env_logger::{Builder, Target, WriteStyle};
use log::{Level, LevelFilter};

use crate::CliError;

/// Pick the level filter for the global flags.
pub(crate) fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. `RUST_LOG` overrides the level when set.
pub(crate) fn init_logging(
    quiet: bool,
    verbose: bool,
    logfile: Option<&Path>,
) -> Result<(), CliError> {
    let mut builder = Builder::new();
    builder.filter_level(level_for(quiet, verbose));
    builder.parse_default_env();

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info | Level::Debug | Level::Trace => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
        });
    }

    match logfile {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(Target::Pipe(Box::new(strip_ansi_escapes::Writer::new(file))));
            builder.write_style(WriteStyle::Never);
        }
        None => {
            builder.target(Target::Stdout);
        }
    }

    builder
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
