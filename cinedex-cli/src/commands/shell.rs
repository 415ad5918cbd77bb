use std::io;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cinedex_shell::{ReaderLines, Session};

use crate::settings::DatabaseLocation;
use crate::CliError;

use super::{describe, open_store};

/// Entry point for the interactive shell.
///
/// The store is opened once here and closed once when the session ends.
pub(crate) fn run_shell(location: &DatabaseLocation, prompt: &str) -> Result<(), CliError> {
    let store = open_store(location)?;
    log::info!(
        "{}",
        "Successfully connected to the database.".if_supports_color(Stdout, |t| t.green()),
    );
    log::debug!("Catalog: {}", describe(location));

    let mut session =
        Session::new(store, ReaderLines::stdin(), io::stdout().lock()).with_prompt(prompt);
    session.run()?;

    session.close()?;
    Ok(())
}
