use chrono::NaiveDate;
use ems_lite::utils::datetime;

#[test]
fn test_parse_date() {
    let expected = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    assert_eq!(datetime::parse_date("2025-01-15").unwrap(), expected);
    assert_eq!(datetime::parse_date("  2025-01-15 \n").unwrap(), expected);

    assert!(datetime::parse_date("").is_err());
    assert!(datetime::parse_date("2025-13-01").is_err());
    assert!(datetime::parse_date("15/01/2025").is_err());
}

#[test]
fn test_format_ymd() {
    let d = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
    assert_eq!(datetime::format_ymd(d), "2025-03-07");
    assert_eq!(datetime::parse_date(&datetime::format_today()).unwrap(), datetime::today());
}

#[test]
fn test_format_display() {
    let d = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    assert_eq!(datetime::format_display(d, datetime::API_DATE_FORMAT), "2025-01-31");
    assert_eq!(datetime::format_display(d, "%d/%m/%Y"), "31/01/2025");
    assert_eq!(datetime::format_display(d, "%b %d, %Y"), "Jan 31, 2025");
}

#[test]
fn test_is_valid_display_format() {
    assert!(datetime::is_valid_display_format("%Y-%m-%d"));
    assert!(datetime::is_valid_display_format("%d.%m.%Y"));
    assert!(!datetime::is_valid_display_format("%H:%M"));
    // loses the year
    assert!(!datetime::is_valid_display_format("%d/%m"));
}
