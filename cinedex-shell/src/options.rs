//! Classifies the tokens that follow a command verb.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::ShellError;

/// Boolean flags that take no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Switch {
    /// `-v`: print each movie's cast
    Verbose,
    /// `-la`: sort by length ascending
    LengthAscending,
    /// `-ld`: sort by length descending
    LengthDescending,
}

impl Switch {
    pub const ALL: [Switch; 3] = [
        Switch::Verbose,
        Switch::LengthAscending,
        Switch::LengthDescending,
    ];

    pub fn flag(self) -> &'static str {
        match self {
            Switch::Verbose => "-v",
            Switch::LengthAscending => "-la",
            Switch::LengthDescending => "-ld",
        }
    }

    pub fn from_flag(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.flag() == token)
    }
}

/// Flags that consume the next token as their value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValuedOption {
    /// `-t <regex>`: title filter
    Title,
    /// `-d <regex>`: director filter
    Director,
    /// `-a <regex>`: actor filter
    Actor,
}

impl ValuedOption {
    pub const ALL: [ValuedOption; 3] = [
        ValuedOption::Title,
        ValuedOption::Director,
        ValuedOption::Actor,
    ];

    pub fn flag(self) -> &'static str {
        match self {
            ValuedOption::Title => "-t",
            ValuedOption::Director => "-d",
            ValuedOption::Actor => "-a",
        }
    }

    pub fn from_flag(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.flag() == token)
    }
}

/// Active switches and option values from one command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOptions {
    pub switches: BTreeSet<Switch>,
    pub values: BTreeMap<ValuedOption, String>,
}

impl ParsedOptions {
    pub fn has(&self, switch: Switch) -> bool {
        self.switches.contains(&switch)
    }

    pub fn value(&self, option: ValuedOption) -> Option<&str> {
        self.values.get(&option).map(String::as_str)
    }
}

/// Parse the tokens after the command verb.
///
/// A valued option always takes the following token, even one that looks
/// like a flag. Repeating an option keeps the last value.
pub fn parse_options<T: AsRef<str>>(tokens: &[T]) -> Result<ParsedOptions, ShellError> {
    let mut parsed = ParsedOptions::default();
    let mut iter = tokens.iter().map(T::as_ref);

    while let Some(token) = iter.next() {
        if !token.starts_with('-') {
            return Err(ShellError::malformed(format!("Invalid token {}", token)));
        }
        if let Some(option) = ValuedOption::from_flag(token) {
            let value = iter
                .next()
                .ok_or_else(|| ShellError::malformed(format!("No parameter after {}", token)))?;
            parsed.values.insert(option, value.to_string());
        } else if let Some(switch) = Switch::from_flag(token) {
            parsed.switches.insert(switch);
        } else {
            return Err(ShellError::malformed(format!("Unknown switch {}", token)));
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tokens: &[&str]) -> Result<ParsedOptions, String> {
        parse_options(tokens).map_err(|e| e.to_string())
    }

    #[test]
    fn no_tokens() {
        assert_eq!(parse(&[]).unwrap(), ParsedOptions::default());
    }

    #[test]
    fn switches_and_values() {
        let parsed = parse(&["-v", "-t", "Tit", "-la", "-a", "Kate"]).unwrap();
        assert!(parsed.has(Switch::Verbose));
        assert!(parsed.has(Switch::LengthAscending));
        assert!(!parsed.has(Switch::LengthDescending));
        assert_eq!(parsed.value(ValuedOption::Title), Some("Tit"));
        assert_eq!(parsed.value(ValuedOption::Actor), Some("Kate"));
        assert_eq!(parsed.value(ValuedOption::Director), None);
    }

    #[test]
    fn later_value_wins() {
        let parsed = parse(&["-d", "Nolan", "-d", "Cameron"]).unwrap();
        assert_eq!(parsed.value(ValuedOption::Director), Some("Cameron"));
    }

    #[test]
    fn value_may_look_like_a_flag() {
        let parsed = parse(&["-t", "-v"]).unwrap();
        assert_eq!(parsed.value(ValuedOption::Title), Some("-v"));
        assert!(!parsed.has(Switch::Verbose));
    }

    #[test]
    fn both_sort_switches_are_accepted_here() {
        let parsed = parse(&["-la", "-ld"]).unwrap();
        assert!(parsed.has(Switch::LengthAscending));
        assert!(parsed.has(Switch::LengthDescending));
    }

    #[test]
    fn missing_value() {
        assert_eq!(parse(&["-v", "-t"]).unwrap_err(), "No parameter after -t");
    }

    #[test]
    fn unknown_switch() {
        assert_eq!(parse(&["-x"]).unwrap_err(), "Unknown switch -x");
        assert_eq!(parse(&["-"]).unwrap_err(), "Unknown switch -");
    }

    #[test]
    fn bare_token() {
        assert_eq!(parse(&["Titanic"]).unwrap_err(), "Invalid token Titanic");
    }

    #[test]
    fn flags_round_trip() {
        for s in Switch::ALL {
            assert_eq!(Switch::from_flag(s.flag()), Some(s));
        }
        for o in ValuedOption::ALL {
            assert_eq!(ValuedOption::from_flag(o.flag()), Some(o));
        }
    }
}
