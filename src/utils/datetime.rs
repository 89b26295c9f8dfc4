//! Date utility functions
//!
//! Attendance dates travel over the wire as `YYYY-MM-DD`; these helpers keep
//! parsing and formatting of that format in one place.

use chrono::{Local, NaiveDate};

/// Wire format for attendance dates
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), API_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(API_DATE_FORMAT).to_string()
}

/// Current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format current local date to YYYY-MM-DD string
pub fn format_today() -> String {
    format_ymd(today())
}

/// Format a date for display with a user supplied chrono format string
pub fn format_display(d: NaiveDate, format: &str) -> String {
    d.format(format).to_string()
}

/// Check that a chrono format string renders a date that parses back to the same day
pub fn is_valid_display_format(format: &str) -> bool {
    let probe = match NaiveDate::from_ymd_opt(2025, 1, 31) {
        Some(d) => d,
        None => return false,
    };
    let mut rendered = String::new();
    if std::fmt::Write::write_fmt(&mut rendered, format_args!("{}", probe.format(format))).is_err() {
        return false;
    }
    NaiveDate::parse_from_str(&rendered, format).map(|d| d == probe).unwrap_or(false)
}
