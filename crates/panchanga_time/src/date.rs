//! Civil date-string parsing.

use chrono::{DateTime, NaiveDate};

use crate::error::DateFormatError;

/// Parse a civil calendar date.
///
/// Accepted forms, tried in order:
/// - `YYYY-MM-DD`
/// - RFC 3339 date-time (the date as written, in its own offset)
/// - `DD/MM/YYYY`
pub fn parse_civil_date(s: &str) -> Result<NaiveDate, DateFormatError> {
    let trimmed = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    NaiveDate::parse_from_str(trimmed, "%d/%m/%Y").map_err(|_| DateFormatError::new(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_date() {
        assert_eq!(parse_civil_date("2023-01-01").unwrap(), ymd(2023, 1, 1));
    }

    #[test]
    fn rfc3339_keeps_written_date() {
        let d = parse_civil_date("2023-01-01T23:30:00+05:30").unwrap();
        assert_eq!(d, ymd(2023, 1, 1));
    }

    #[test]
    fn day_first_slashes() {
        assert_eq!(parse_civil_date("15/08/1947").unwrap(), ymd(1947, 8, 15));
    }

    #[test]
    fn surrounding_whitespace() {
        assert_eq!(parse_civil_date(" 2024-02-29 ").unwrap(), ymd(2024, 2, 29));
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_civil_date("next tuesday").unwrap_err();
        assert_eq!(err.input, "next tuesday");
    }

    #[test]
    fn rejects_impossible_date() {
        assert!(parse_civil_date("2023-02-30").is_err());
        assert!(parse_civil_date("31/04/2023").is_err());
    }
}
