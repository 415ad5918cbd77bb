//! Splits a command line into tokens.
//!
//! A token is either a run of non-whitespace characters or a double-quoted
//! span. Quoted spans keep their inner whitespace and lose the quotes:
//!
//! ```text
//! l -t "Star Wars" -v   =>   ["l", "-t", "Star Wars", "-v"]
//! ```
//!
//! There is no escape syntax, so a quoted span cannot contain a quote.

/// Tokenize a raw command line.
///
/// Quote characters inside a bare token are dropped (`ab"c` becomes `abc`),
/// an opening quote with no closing quote is ignored, and `""` yields an
/// empty token.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = input;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }

        if let Some(quoted) = rest.strip_prefix('"') {
            match quoted.find('"') {
                Some(end) => {
                    tokens.push(quoted[..end].to_string());
                    rest = &quoted[end + 1..];
                }
                None => rest = quoted,
            }
            continue;
        }

        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        tokens.push(rest[..end].chars().filter(|&c| c != '"').collect());
        rest = &rest[end..];
    }

    tokens
}

#[cfg(test)]
#[path = "tests/tokenizer_tests.rs"]
mod tests;
