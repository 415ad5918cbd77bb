//! Settings file and database location resolution.
//!
//! The settings file is always `~/.config/cinedex/settings.toml`:
//!
//! ```toml
//! [database]
//! path = "/home/me/movies.db"
//!
//! [shell]
//! prompt = "cinedex> "
//! ```

use std::path::{Path, PathBuf};

use cinedex_shell::session::DEFAULT_PROMPT;
use serde::Deserialize;

use crate::CliError;

/// Canonical path to the settings file: `~/.config/cinedex/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("cinedex").join("settings.toml")
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub database: DatabaseSettings,
    pub shell: ShellSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DatabaseSettings {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct ShellSettings {
    pub prompt: String,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Settings {
    /// Load the shared settings file. A missing file yields the defaults.
    pub(crate) fn load() -> Result<Self, CliError> {
        Self::load_from(&settings_path())
    }

    pub(crate) fn load_from(path: &Path) -> Result<Self, CliError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&contents).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }
}

/// Where the catalog lives for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DatabaseLocation {
    File(PathBuf),
    Memory,
}

/// Resolve the database using a priority chain:
///
/// 1. `--db <path>`
/// 2. `--memory`
/// 3. `database.path` in `settings.toml`
/// 4. An in-memory catalog
pub(crate) fn resolve_database(
    cli_db: Option<PathBuf>,
    memory: bool,
    settings: &Settings,
) -> DatabaseLocation {
    if let Some(p) = cli_db {
        return DatabaseLocation::File(p);
    }
    if memory {
        return DatabaseLocation::Memory;
    }
    match &settings.database.path {
        Some(p) if !p.as_os_str().is_empty() => DatabaseLocation::File(p.clone()),
        _ => DatabaseLocation::Memory,
    }
}

/// Load the settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
