//! Helpers for the `YYYY-MM-DD` date strings carried by articles.
//!
//! Dates are kept as strings. Zero-padded ISO prefixes sort lexicographically
//! in chronological order, which is what range filtering relies on.

use chrono::{Datelike, NaiveDate};

const ARABIC_MONTHS: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو",
    "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
];

/// Returns true for `YYYY`, `YYYY-MM` and `YYYY-MM-DD` strings.
pub fn is_iso_prefix(value: &str) -> bool {
    let bytes = value.as_bytes();
    let digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);

    match bytes.len() {
        4 => digits(0..4),
        7 => {
            digits(0..4)
                && bytes[4] == b'-'
                && digits(5..7)
                && matches!(value[5..7].parse::<u32>(), Ok(1..=12))
        }
        10 => {
            digits(0..4)
                && bytes[4] == b'-'
                && bytes[7] == b'-'
                && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        }
        _ => false,
    }
}

/// `YYYY-MM` bucket for an article date, `None` when the date is empty.
pub fn month_bucket(date: &str) -> Option<&str> {
    if date.is_empty() {
        return None;
    }
    Some(date.get(..7).unwrap_or(date))
}

/// Formats `YYYY-MM-DD` as e.g. `5 يناير 2024`. Other inputs are returned unchanged.
pub fn format_arabic(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => format!(
            "{} {} {}",
            parsed.day(),
            ARABIC_MONTHS[parsed.month0() as usize],
            parsed.year()
        ),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_prefixes() {
        assert!(is_iso_prefix("2024"));
        assert!(is_iso_prefix("2024-01"));
        assert!(is_iso_prefix("2024-01-31"));
        assert!(is_iso_prefix("2024-02-29"));
    }

    #[test]
    fn test_malformed_dates() {
        assert!(!is_iso_prefix(""));
        assert!(!is_iso_prefix("2024-1-5"));
        assert!(!is_iso_prefix("2024-13"));
        assert!(!is_iso_prefix("2023-02-29"));
        assert!(!is_iso_prefix("31/01/2024"));
        assert!(!is_iso_prefix("yesterday"));
        assert!(!is_iso_prefix("+2024-01-01"));
    }

    #[test]
    fn test_month_bucket() {
        assert_eq!(month_bucket("2024-01-31"), Some("2024-01"));
        assert_eq!(month_bucket("2024-01"), Some("2024-01"));
        assert_eq!(month_bucket("2024"), Some("2024"));
        assert_eq!(month_bucket(""), None);
    }

    #[test]
    fn test_format_arabic() {
        assert_eq!(format_arabic("2024-01-05"), "5 يناير 2024");
        assert_eq!(format_arabic("2023-10-07"), "7 أكتوبر 2023");
        assert_eq!(format_arabic("2024-01"), "2024-01");
        assert_eq!(format_arabic(""), "");
    }
}
