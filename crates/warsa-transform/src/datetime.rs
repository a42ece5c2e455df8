//! Date parsing for the historical notations found in the source records.
//!
//! Dates are mostly written day-first with dots (`12.5.1941`). Some rows
//! only record the year, and a few already use ISO 8601.

use chrono::NaiveDate;
use tracing::{debug, warn};

use warsa_model::FieldValue;

/// Outcome of parsing a date field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParse {
    /// The field was empty.
    Missing,
    /// A full calendar date.
    Date(NaiveDate),
    /// Only the year is known.
    Year(i32),
    /// The field had content that is not a recognised date.
    Unparseable(String),
}

impl DateParse {
    pub fn into_value(self) -> Option<FieldValue> {
        match self {
            Self::Date(date) => Some(FieldValue::Date(date)),
            Self::Year(year) => Some(FieldValue::Year(year)),
            Self::Missing | Self::Unparseable(_) => None,
        }
    }
}

/// Classify a raw date field.
pub fn parse_date(value: &str) -> DateParse {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return DateParse::Missing;
    }
    if let Some(year) = parse_year(trimmed) {
        return DateParse::Year(year);
    }
    if let Some(date) = parse_dotted(trimmed).or_else(|| parse_iso(trimmed)) {
        return DateParse::Date(date);
    }
    DateParse::Unparseable(trimmed.to_string())
}

/// Convert a raw date field, logging why a value was dropped.
pub fn convert_date(value: &str) -> Option<FieldValue> {
    let parsed = parse_date(value);
    match &parsed {
        DateParse::Missing => debug!("no date"),
        DateParse::Unparseable(raw) => warn!(value = %raw, "invalid value for date conversion"),
        DateParse::Date(_) | DateParse::Year(_) => {}
    }
    parsed.into_value()
}

fn parse_year(value: &str) -> Option<i32> {
    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        value.parse().ok()
    } else {
        None
    }
}

/// `D.M.YYYY` with one or two digit day and month.
fn parse_dotted(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('.');
    let day = parse_component(parts.next()?, 2)?;
    let month = parse_component(parts.next()?, 2)?;
    let year_part = parts.next()?;
    if parts.next().is_some() || year_part.len() != 4 {
        return None;
    }
    let year = i32::try_from(parse_component(year_part, 4)?).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_iso(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn parse_component(part: &str, max_len: usize) -> Option<u32> {
    if part.is_empty() || part.len() > max_len || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn dotted_dates() {
        assert_eq!(parse_date("12.5.1941"), DateParse::Date(ymd(1941, 5, 12)));
        assert_eq!(parse_date("01.01.1920"), DateParse::Date(ymd(1920, 1, 1)));
        assert_eq!(parse_date(" 1.1.1920 "), DateParse::Date(ymd(1920, 1, 1)));
    }

    #[test]
    fn bare_year() {
        assert_eq!(parse_date("1941"), DateParse::Year(1941));
    }

    #[test]
    fn iso_date() {
        assert_eq!(parse_date("1944-09-19"), DateParse::Date(ymd(1944, 9, 19)));
    }

    #[test]
    fn rejects_impossible_and_partial_dates() {
        assert!(matches!(parse_date("31.2.1940"), DateParse::Unparseable(_)));
        assert!(matches!(parse_date("12.5.41"), DateParse::Unparseable(_)));
        assert!(matches!(parse_date("5.1941"), DateParse::Unparseable(_)));
        assert!(matches!(parse_date("1.2.3.1941"), DateParse::Unparseable(_)));
        assert!(matches!(parse_date("unknown"), DateParse::Unparseable(_)));
    }

    #[test]
    fn missing_and_unparseable_both_convert_to_none() {
        assert_eq!(parse_date(""), DateParse::Missing);
        assert_eq!(convert_date(""), None);
        assert_eq!(convert_date("unknown"), None);
        assert_eq!(convert_date("1941"), Some(FieldValue::Year(1941)));
    }
}
