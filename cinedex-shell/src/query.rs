//! Turns parsed list options into a movie query plan.

use cinedex_catalog::{MovieFilter, MovieQuery, SortOrder};
use regex::Regex;

use crate::error::ShellError;
use crate::options::{ParsedOptions, Switch, ValuedOption};

/// A validated listing: what to select and whether to print casts.
#[derive(Debug, Clone)]
pub struct ListRequest {
    pub query: MovieQuery,
    pub verbose: bool,
}

/// Build the listing for `l` options.
///
/// Fails without producing a plan if both sort switches are given or a
/// filter pattern is not a valid regex.
pub fn build_list_request(options: &ParsedOptions) -> Result<ListRequest, ShellError> {
    let order = match (
        options.has(Switch::LengthAscending),
        options.has(Switch::LengthDescending),
    ) {
        (true, true) => {
            return Err(ShellError::malformed(
                "Both -la and -ld cannot be used together.",
            ));
        }
        (true, false) => SortOrder::LengthAscending,
        (false, true) => SortOrder::LengthDescending,
        (false, false) => SortOrder::Title,
    };

    let mut query = MovieQuery::all().sorted_by(order);
    for (&option, pattern) in &options.values {
        let re = compile(pattern)?;
        query = query.with_filter(match option {
            ValuedOption::Title => MovieFilter::Title(re),
            ValuedOption::Director => MovieFilter::Director(re),
            ValuedOption::Actor => MovieFilter::Actor(re),
        });
    }

    Ok(ListRequest {
        query,
        verbose: options.has(Switch::Verbose),
    })
}

fn compile(pattern: &str) -> Result<Regex, ShellError> {
    Regex::new(pattern).map_err(|e| {
        // Syntax errors render over several lines; keep only the reason.
        let detail = e.to_string();
        let reason = detail
            .lines()
            .last()
            .unwrap_or_default()
            .trim_start_matches("error: ");
        ShellError::malformed(format!("Invalid pattern \"{}\": {}", pattern, reason))
    })
}
