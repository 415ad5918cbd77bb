use cinedex_catalog::{format_length, parse_length, LengthError};

#[test]
fn parses_hours_minutes_seconds() {
    assert_eq!(parse_length("03:14:00"), Ok(11640));
    assert_eq!(parse_length("00:00:59"), Ok(59));
    assert_eq!(parse_length("1:2:3"), Ok(3723));
}

#[test]
fn zero_length_parses_to_zero() {
    assert_eq!(parse_length("00:00:00"), Ok(0));
}

#[test]
fn fields_are_not_range_checked() {
    assert_eq!(parse_length("00:90:00"), Ok(5400));
}

#[test]
fn rejects_wrong_field_count() {
    assert_eq!(parse_length("03:14"), Err(LengthError::BadFormat));
    assert_eq!(parse_length("01:02:03:04"), Err(LengthError::BadFormat));
    assert_eq!(parse_length(""), Err(LengthError::BadFormat));
}

#[test]
fn rejects_non_numeric_fields() {
    assert_eq!(parse_length("aa:bb:cc"), Err(LengthError::BadFormat));
    assert_eq!(parse_length("01::03"), Err(LengthError::BadFormat));
    assert_eq!(parse_length("-1:00:00"), Err(LengthError::BadFormat));
    assert_eq!(parse_length(" 01:00:00"), Err(LengthError::BadFormat));
}

#[test]
fn rejects_overflowing_lengths() {
    assert_eq!(parse_length("4294967295:00:00"), Err(LengthError::BadFormat));
}

#[test]
fn bad_format_message() {
    assert_eq!(
        LengthError::BadFormat.to_string(),
        "Bad input format (hh:mm:ss), try again!"
    );
}

#[test]
fn formats_with_zero_padding() {
    assert_eq!(format_length(0), "00:00:00");
    assert_eq!(format_length(3600), "01:00:00");
    assert_eq!(format_length(11640), "03:14:00");
    assert_eq!(format_length(8880), "02:28:00");
    assert_eq!(format_length(360_000), "100:00:00");
}

#[test]
fn canonical_strings_survive_parse_and_format() {
    for s in ["00:00:01", "01:30:00", "03:14:00", "12:59:59", "99:00:30"] {
        let secs = parse_length(s).unwrap();
        assert_eq!(format_length(secs), s);
    }
}
