//! Custom SQL functions registered on every catalog connection.

use std::sync::Arc;

use regex::Regex;
use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Register all catalog SQL functions on a connection.
pub fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    register_regexp(conn)
}

/// Install `regexp(pattern, text)`, which backs the `text REGEXP pattern`
/// operator with regex search semantics.
///
/// The compiled pattern is cached per statement as auxiliary data, so a
/// bound pattern parameter is compiled once per query, not once per row.
/// `NULL` text never matches.
fn register_regexp(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "regexp",
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let re: Arc<Regex> = ctx.get_or_create_aux(0, |vr| -> Result<_, BoxError> {
                Ok(Regex::new(vr.as_str()?)?)
            })?;
            let text = ctx.get_raw(1);
            if matches!(text, rusqlite::types::ValueRef::Null) {
                return Ok(false);
            }
            let text = text
                .as_str()
                .map_err(|e| rusqlite::Error::UserFunctionError(e.into()))?;
            Ok(re.is_match(text))
        },
    )
}
