use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cinedex_db::CatalogStore;

use crate::settings::DatabaseLocation;
use crate::CliError;

use super::{describe, open_store};

pub(crate) fn run_stats(location: &DatabaseLocation) -> Result<(), CliError> {
    if *location == DatabaseLocation::Memory {
        log::warn!("No catalog database configured; an in-memory catalog is always empty.");
        log::info!("Pass --db <path> or set database.path in settings.toml.");
    }

    let store = open_store(location)?;
    let stats = store.stats()?;

    log::info!(
        "{}",
        "Catalog Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", describe(location));
    log::info!("");
    log::info!("  People:    {:>8}", stats.people);
    log::info!("  Movies:    {:>8}", stats.movies);
    log::info!("  Castings:  {:>8}", stats.castings);

    store.close()?;
    Ok(())
}
