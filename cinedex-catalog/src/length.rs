//! Movie length parsing and formatting in `HH:MM:SS` form.

use thiserror::Error;

/// Errors from parsing a length string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthError {
    /// Not three colon-separated non-negative integers, or too large.
    #[error("Bad input format (hh:mm:ss), try again!")]
    BadFormat,
}

/// Parse an `HH:MM:SS` string into a number of seconds.
///
/// Exactly three colon-separated fields are required, each a non-negative
/// integer. Fields are not range-checked, so `00:90:00` is 5400 seconds.
///
/// ```
/// use cinedex_catalog::parse_length;
///
/// assert_eq!(parse_length("03:14:00"), Ok(11640));
/// assert!(parse_length("3:14").is_err());
/// ```
pub fn parse_length(s: &str) -> Result<u32, LengthError> {
    let parts: Vec<&str> = s.split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return Err(LengthError::BadFormat);
    };

    let field = |f: &str| f.parse::<u32>().map_err(|_| LengthError::BadFormat);
    let (hours, minutes, seconds) = (field(*hours)?, field(*minutes)?, field(*seconds)?);

    hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or(LengthError::BadFormat)
}

/// Format a number of seconds as `HH:MM:SS`.
///
/// Hours are not wrapped: a 100 hour length renders as `100:00:00`.
pub fn format_length(length_in_seconds: u32) -> String {
    let hours = length_in_seconds / 3600;
    let minutes = (length_in_seconds % 3600) / 60;
    let seconds = length_in_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
