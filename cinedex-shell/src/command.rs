//! Routes a command line to the command it names.
//!
//! Routing looks only at the first character, so `l`, `ls` and `list` all
//! list movies and any word starting with `d` deletes.

use crate::error::ShellError;

/// The command selected by the first character of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// `l…`
    List,
    /// `a…`
    Add,
    /// `d…`
    Delete,
    /// Anything else, including an empty line
    Unknown,
}

impl CommandKind {
    /// Classify a line by its first non-whitespace character. Case-sensitive.
    pub fn classify(line: &str) -> Self {
        match line.trim_start().chars().next() {
            Some('l') => CommandKind::List,
            Some('a') => CommandKind::Add,
            Some('d') => CommandKind::Delete,
            _ => CommandKind::Unknown,
        }
    }
}

/// What an `a` command adds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddTarget {
    /// `a -p`
    Person,
    /// `a -m`
    Movie,
}

impl AddTarget {
    /// Read the target flag from an add command. Words after it are ignored.
    pub fn parse(line: &str) -> Result<Self, ShellError> {
        let mut words = line.split_whitespace().skip(1);
        match words.next() {
            None => Err(ShellError::malformed(
                "Invalid command format for adding entries.",
            )),
            Some("-p") => Ok(AddTarget::Person),
            Some("-m") => Ok(AddTarget::Movie),
            Some(_) => Err(ShellError::malformed("Unknown option for adding entries.")),
        }
    }
}

/// Extract the person name from `d -p <name>`.
///
/// The name is everything after the flag, so it may contain spaces; runs of
/// whitespace inside it are kept as typed.
pub fn parse_delete_target(line: &str) -> Result<&str, ShellError> {
    let invalid = || ShellError::malformed("Invalid command format for deleting a person.");

    let (_verb, rest) = split_word(line.trim()).ok_or_else(invalid)?;
    let (flag, name) = split_word(rest).ok_or_else(invalid)?;
    if flag != "-p" || name.is_empty() {
        return Err(invalid());
    }
    Ok(name)
}

/// Split off the first whitespace-delimited word, returning it and the
/// remainder with leading whitespace removed.
fn split_word(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(end) => Some((&s[..end], s[end..].trim_start())),
        None => Some((s, "")),
    }
}
