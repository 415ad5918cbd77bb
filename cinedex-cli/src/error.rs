use std::path::PathBuf;

use cinedex_db::{SchemaError, StoreError};
use thiserror::Error;

/// Failures that end a `cinedex` invocation with a non-zero status.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The catalog could not be opened; nothing else runs.
    #[error("Failed to connect to the database {location}: {source}")]
    Connect {
        location: String,
        #[source]
        source: SchemaError,
    },

    #[error("Database error: {0}")]
    Store(#[from] StoreError),

    #[error("Config error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// Logger installation failed
    #[error("Logging error: {0}")]
    Logging(String),
}
