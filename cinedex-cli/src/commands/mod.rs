pub(crate) mod config;
pub(crate) mod shell;
pub(crate) mod stats;

use cinedex_db::SqliteCatalog;

use crate::settings::DatabaseLocation;
use crate::CliError;

/// Open the catalog store for this run.
pub(crate) fn open_store(location: &DatabaseLocation) -> Result<SqliteCatalog, CliError> {
    let opened = match location {
        DatabaseLocation::File(path) => {
            log::debug!("Opening catalog database {}", path.display());
            SqliteCatalog::open(path)
        }
        DatabaseLocation::Memory => {
            log::debug!("Opening in-memory catalog");
            SqliteCatalog::open_memory()
        }
    };
    opened.map_err(|source| CliError::Connect {
        location: describe(location),
        source,
    })
}

/// Human-readable label for a database location.
pub(crate) fn describe(location: &DatabaseLocation) -> String {
    match location {
        DatabaseLocation::File(path) => path.display().to_string(),
        DatabaseLocation::Memory => "(in memory)".to_string(),
    }
}
