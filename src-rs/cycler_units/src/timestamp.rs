//! Parsing of step timestamps.

use std::fmt;

use chrono::NaiveDateTime;

use crate::error::ConvertError;

/// The year assumed by the `Day <day-of-year>` formats, which carry no year.
pub const DAY_FORMAT_YEAR: i32 = 1900;

/// A timestamp format, tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// `Day <day-of-year> <H>:<M>:<S>`
    DayOfYearWithSeconds,
    /// `Day <day-of-year> <H>:<M>`
    DayOfYear,
    /// `<Y>-<M>-<D> <H>:<M>:<S>`
    DateWithSeconds,
    /// `<Y>-<M>-<D> <H>:<M>`
    Date,
}

impl TimestampFormat {
    /// All formats in priority order.
    pub const ALL: [Self; 4] = [
        Self::DayOfYearWithSeconds,
        Self::DayOfYear,
        Self::DateWithSeconds,
        Self::Date,
    ];

    /// Parses `input` with this format.
    #[must_use]
    pub fn parse(self, input: &str) -> Option<NaiveDateTime> {
        let result = match self {
            Self::DayOfYearWithSeconds => NaiveDateTime::parse_from_str(
                &format!("{DAY_FORMAT_YEAR} {input}"),
                "%Y Day %j %H:%M:%S",
            ),
            Self::DayOfYear => NaiveDateTime::parse_from_str(
                &format!("{DAY_FORMAT_YEAR} {input}"),
                "%Y Day %j %H:%M",
            ),
            Self::DateWithSeconds => NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S"),
            Self::Date => NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M"),
        };

        match result {
            Ok(timestamp) => Some(timestamp),
            Err(error) => {
                tracing::trace!(format = ?self, %input, %error, "timestamp format did not match");
                None
            }
        }
    }
}

/// A timestamp as supplied by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawTimestamp {
    /// Text in one of the [`TimestampFormat`]s
    Text(String),
    /// An already parsed timestamp
    Canonical(NaiveDateTime),
}

impl From<&str> for RawTimestamp {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawTimestamp {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDateTime> for RawTimestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self::Canonical(value)
    }
}

impl fmt::Display for RawTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Canonical(timestamp) => write!(f, "{timestamp}"),
        }
    }
}

/// Parses a timestamp string, trying each [`TimestampFormat`] in order.
///
/// # Errors
///
/// Returns [`ConvertError::UnknownTimestamp`] if no format matches.
///
/// # Examples
///
/// ```rust
/// use chrono::{NaiveDate, NaiveDateTime};
/// use cycler_units::parse_timestamp_text;
///
/// let timestamp = parse_timestamp_text("2024-01-05 12:30").unwrap();
/// let expected = NaiveDate::from_ymd_opt(2024, 1, 5)
///     .and_then(|date| date.and_hms_opt(12, 30, 0))
///     .unwrap();
/// assert_eq!(timestamp, expected);
/// ```
pub fn parse_timestamp_text(input: &str) -> Result<NaiveDateTime, ConvertError> {
    TimestampFormat::ALL
        .into_iter()
        .find_map(|format| format.parse(input))
        .ok_or_else(|| ConvertError::UnknownTimestamp {
            input: input.to_string(),
        })
}

/// Resolves an optional raw timestamp.
///
/// `None` and canonical timestamps pass through unchanged.
///
/// # Errors
///
/// Returns [`ConvertError::UnknownTimestamp`] if textual input matches none
/// of the supported formats.
pub fn parse_timestamp(raw: Option<&RawTimestamp>) -> Result<Option<NaiveDateTime>, ConvertError> {
    match raw {
        None => Ok(None),
        Some(RawTimestamp::Canonical(timestamp)) => Ok(Some(*timestamp)),
        Some(RawTimestamp::Text(text)) => parse_timestamp_text(text).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn datetime(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(h, m, s))
            .expect("test datetime should be valid")
    }

    #[test]
    fn day_of_year_with_seconds() {
        let timestamp = parse_timestamp_text("Day 5 12:30:00").expect("should parse day format");
        assert_eq!(timestamp, datetime(1900, 1, 5, 12, 30, 0));
    }

    #[test]
    fn day_of_year_without_seconds() {
        let timestamp = parse_timestamp_text("Day 40 08:15").expect("should parse day format");
        assert_eq!(timestamp, datetime(1900, 2, 9, 8, 15, 0));
    }

    #[test]
    fn date_with_seconds() {
        let timestamp =
            parse_timestamp_text("2024-01-05 12:30:45").expect("should parse date format");
        assert_eq!(timestamp, datetime(2024, 1, 5, 12, 30, 45));
    }

    #[test]
    fn date_without_seconds() {
        let timestamp = parse_timestamp_text("2024-01-05 12:30").expect("should parse date format");
        assert_eq!(timestamp, datetime(2024, 1, 5, 12, 30, 0));
    }

    #[test]
    fn first_matching_format_wins() {
        assert_eq!(
            TimestampFormat::ALL
                .into_iter()
                .find(|format| format.parse("Day 5 12:30:00").is_some()),
            Some(TimestampFormat::DayOfYearWithSeconds)
        );
        assert_eq!(TimestampFormat::DayOfYear.parse("Day 5 12:30:00"), None);
    }

    #[test]
    fn passthrough() {
        assert_eq!(parse_timestamp(None), Ok(None));

        let canonical = datetime(2023, 6, 1, 0, 0, 0);
        let raw = RawTimestamp::from(canonical);
        assert_eq!(parse_timestamp(Some(&raw)), Ok(Some(canonical)));
    }

    #[test]
    fn unknown_format() {
        let error = parse_timestamp_text("not-a-date").expect_err("should reject garbage");
        assert_eq!(
            error,
            ConvertError::UnknownTimestamp {
                input: "not-a-date".to_string()
            }
        );
        assert!(error.to_string().contains("[not-a-date]"));
    }

    #[test]
    fn day_out_of_range() {
        // 1900 is not a leap year
        let error = parse_timestamp_text("Day 366 00:00").expect_err("should reject day 366");
        assert!(matches!(error, ConvertError::UnknownTimestamp { .. }));
    }

    #[test]
    fn trailing_text() {
        let error =
            parse_timestamp_text("2024-01-05 12:30 UTC").expect_err("should reject trailing text");
        assert!(matches!(error, ConvertError::UnknownTimestamp { .. }));
    }
}
