//! Calendar date parsing and display formatting
//!
//! Dates travel as strings. Incoming values accept the common ISO and US
//! layouts plus the display form itself; outgoing values always use the
//! short display form, e.g. `Sun Jan 15 2023`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Layout used for every date rendered in a response
pub const DISPLAY_DATE_FORMAT: &str = "%a %b %d %Y";

/// Date-only layouts accepted on input, tried in order
const DATE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    DISPLAY_DATE_FORMAT,
    "%B %d, %Y",
];

/// Timestamp layouts without an offset; the time part is discarded
const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// A date string that matched none of the accepted layouts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid date: \"{0}\"")]
pub struct InvalidDate(pub String);

/// Parse a calendar date from any accepted layout.
///
/// RFC 3339 timestamps are converted to UTC before the date is taken.
pub fn parse_date(input: &str) -> Result<NaiveDate, InvalidDate> {
    let trimmed = input.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.naive_utc().date());
    }

    DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(trimmed, layout).ok())
        .or_else(|| {
            DATETIME_LAYOUTS.iter().find_map(|layout| {
                NaiveDateTime::parse_from_str(trimmed, layout)
                    .ok()
                    .map(|dt| dt.date())
            })
        })
        .ok_or_else(|| InvalidDate(input.to_string()))
}

/// Parse an optional date, treating absent and blank input alike
pub fn parse_optional_date(input: Option<&str>) -> Result<Option<NaiveDate>, InvalidDate> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value).map(Some),
    }
}

/// Render a date in the short display form
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Lower bound used when a log query has no `from`
pub fn epoch_date() -> NaiveDate {
    // chrono defines the default date as 1970-01-01
    NaiveDate::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("2023-01-15", 2023, 1, 15)]
    #[case("2023/01/15", 2023, 1, 15)]
    #[case("01/15/2023", 2023, 1, 15)]
    #[case("Sun Jan 15 2023", 2023, 1, 15)]
    #[case("January 15, 2023", 2023, 1, 15)]
    #[case("2023-01-15T08:30:00", 2023, 1, 15)]
    #[case("2023-01-15T08:30:00Z", 2023, 1, 15)]
    #[case("2023-01-15T23:30:00-05:00", 2023, 1, 16)]
    #[case("  2024-02-29  ", 2024, 2, 29)]
    fn test_parse_accepted_layouts(
        #[case] input: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let expected = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        assert_eq!(parse_date(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("not a date")]
    #[case("2023-02-30")]
    #[case("2023-13-01")]
    #[case("Mon Jan 15 2023")] // weekday does not match
    fn test_parse_rejects_invalid(#[case] input: &str) {
        let err = parse_date(input).unwrap_err();
        assert_eq!(err, InvalidDate(input.to_string()));
    }

    #[test]
    fn test_display_format_matches_short_date_string() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        assert_eq!(format_display_date(date), "Sun Jan 15 2023");

        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(format_display_date(date), "Mon Jan 01 2024");

        let date = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
        assert_eq!(format_display_date(date), "Mon May 01 2023");
    }

    #[test]
    fn test_optional_date_blank_is_none() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("")).unwrap(), None);
        assert_eq!(parse_optional_date(Some("   ")).unwrap(), None);
        assert!(parse_optional_date(Some("garbage")).is_err());
    }

    #[test]
    fn test_epoch_date() {
        assert_eq!(epoch_date(), NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Responses can be fed back in as request dates
        #[test]
        fn prop_display_form_is_accepted_input(days in 0i64..40_000) {
            let date = epoch_date() + chrono::Duration::days(days);
            let rendered = format_display_date(date);

            prop_assert_eq!(rendered.len(), 15);
            prop_assert_eq!(parse_date(&rendered).unwrap(), date);
        }
    }
}
