//! Date detection and normalization into `MM/DD/YYYY`.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use super::text::clean_text;

lazy_static! {
    // Layout families, tried in order. Searches are unanchored so a date
    // embedded in surrounding text still matches.
    static ref DATE_MDY: Regex = Regex::new(
        r"(\d{1,2})[/-](\d{1,2})[/-](\d{4})"
    ).unwrap();

    static ref DATE_MDY_SHORT: Regex = Regex::new(
        r"(\d{1,2})[/-](\d{1,2})[/-](\d{2})"
    ).unwrap();

    static ref DATE_YMD: Regex = Regex::new(
        r"(\d{4})[/-](\d{1,2})[/-](\d{1,2})"
    ).unwrap();
}

/// Normalize a date-like string to `MM/DD/YYYY`.
///
/// Each layout family is tried in order; a structural match attempts
/// calendar construction and falls through to the next family when the
/// groups do not form a real date (month 13, day 32, ...). If nothing
/// yields a calendar date the cleaned raw input is returned, so callers
/// always get a well-formed string.
pub fn normalize_date(date_str: &str) -> String {
    if date_str.is_empty() {
        return String::new();
    }

    for pattern in [&*DATE_MDY, &*DATE_MDY_SHORT, &*DATE_YMD] {
        if let Some(caps) = pattern.captures(date_str) {
            if let Some(date) = build_date(&caps[1], &caps[2], &caps[3]) {
                return date.format("%m/%d/%Y").to_string();
            }
        }
    }

    clean_text(date_str)
}

/// Fallible calendar construction from three captured digit groups.
///
/// A 4-digit first group means year-month-day, a 4-digit last group
/// means month-day-year, and a 2-digit trailing year pivots into the
/// 2000s.
fn build_date(first: &str, second: &str, third: &str) -> Option<NaiveDate> {
    if first.len() == 4 {
        NaiveDate::from_ymd_opt(first.parse().ok()?, second.parse().ok()?, third.parse().ok()?)
    } else if third.len() == 4 {
        NaiveDate::from_ymd_opt(third.parse().ok()?, first.parse().ok()?, second.parse().ok()?)
    } else {
        let year: i32 = third.parse().ok()?;
        let year = if year < 100 { 2000 + year } else { year };
        NaiveDate::from_ymd_opt(year, first.parse().ok()?, second.parse().ok()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mdy_four_digit_year() {
        assert_eq!(normalize_date("3/15/2024"), "03/15/2024");
        assert_eq!(normalize_date("12-01-2023"), "12/01/2023");
    }

    #[test]
    fn test_ymd() {
        assert_eq!(normalize_date("2024-03-15"), "03/15/2024");
        assert_eq!(normalize_date("2024/3/5"), "03/05/2024");
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(normalize_date("3/15/24"), "03/15/2024");
        assert_eq!(normalize_date("1/2/03"), "01/02/2003");
    }

    #[test]
    fn test_already_normalized_round_trips() {
        assert_eq!(normalize_date("03/15/2024"), "03/15/2024");
    }

    #[test]
    fn test_embedded_in_text() {
        assert_eq!(normalize_date("issued on 2024-03-15 by fax"), "03/15/2024");
    }

    #[test]
    fn test_invalid_calendar_date_falls_back() {
        // Month 13 matches the layout but never builds a date.
        assert_eq!(normalize_date("13/45/2024"), "13/45/2024");
    }

    #[test]
    fn test_non_date_falls_back_cleaned() {
        assert_eq!(normalize_date("on request!"), "on request");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize_date(""), "");
    }
}
