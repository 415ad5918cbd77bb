use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::settings::{load_settings_string, settings_path};

/// Show the settings file location and its current contents.
pub(crate) fn run_settings_show() {
    let path = settings_path();

    log::info!(
        "{}",
        "cinedex Settings".if_supports_color(Stdout, |t| t.bold()),
    );

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return;
    }
    log::info!("");

    match load_settings_string() {
        Some(contents) => {
            for line in contents.lines() {
                log::info!("  {}", line);
            }
        }
        None => log::warn!("Settings file could not be parsed as TOML."),
    }
}
