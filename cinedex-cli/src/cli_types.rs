//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cinedex")]
#[command(about = "Interactive catalog of movies, directors, and actors", long_about = None)]
pub(crate) struct Cli {
    /// SQLite catalog file (defaults to settings.toml, then an in-memory catalog)
    #[arg(long, global = true, conflicts_with = "memory")]
    pub db: Option<PathBuf>,

    /// Use a throwaway in-memory catalog even if a database file is configured
    #[arg(long, global = true)]
    pub memory: bool,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Defaults to the interactive shell
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Commands {
    /// Start the interactive shell
    Shell,

    /// Show row counts for people, movies, and castings
    Stats,

    /// Show the settings file path and its contents
    Settings,
}
