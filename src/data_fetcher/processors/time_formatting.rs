use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Text shown in place of a date that could not be read.
pub const INVALID_DATE: &str = "Invalid date";

const LOCAL_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses the date part of a CMS date value.
///
/// Accepts RFC 3339 timestamps, timestamps without an offset
/// (`2024-03-01T19:30:00`, `2024-03-01T19:30`, `2024-03-01 19:30:00`) and
/// plain dates. The calendar date is taken as
/// written, without converting between timezones.
pub fn parse_content_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.date_naive());
    }

    for format in LOCAL_TIMESTAMP_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(input, format) {
            return Some(timestamp.date());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Formats a CMS date value as a long US-style date, e.g. `March 1, 2024`.
///
/// # Examples
///
/// ```
/// use league_store::data_fetcher::processors::format_date;
///
/// assert_eq!(format_date("2024-03-01T19:30:00Z"), "March 1, 2024");
/// assert_eq!(format_date(""), "Invalid date");
/// ```
pub fn format_date(input: &str) -> String {
    match parse_content_date(input) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}
