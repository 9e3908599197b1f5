//! Conversion of durations and periods to seconds.

use crate::{
    error::{ConvertError, QuantityKind},
    quantity::{RawQuantity, split_quantity},
};

/// A recognized time unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// `second`, `seconds`, `s` or `sec`
    Second,
    /// `minute`, `minutes`, `m` or `min`
    Minute,
    /// `hour`, `hours`, `h` or `hr`
    Hour,
}

impl TimeUnit {
    /// Looks up a unit suffix. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "second" | "seconds" | "s" | "sec" => Some(Self::Second),
            "minute" | "minutes" | "m" | "min" => Some(Self::Minute),
            "hour" | "hours" | "h" | "hr" => Some(Self::Hour),
            _ => None,
        }
    }

    /// The number of seconds in one of this unit.
    #[must_use]
    pub const fn seconds(self) -> f64 {
        match self {
            Self::Second => 1.0,
            Self::Minute => 60.0,
            Self::Hour => 3600.0,
        }
    }
}

/// Converts a time string such as `"0.5 hours"` to seconds.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidUnit`] if the unit is not a recognized time
/// unit, and [`ConvertError::InvalidNumber`] if the number is malformed. The
/// unit is checked first.
pub fn parse_time(input: &str) -> Result<f64, ConvertError> {
    let trimmed = input.trim();
    let split = split_quantity(trimmed);

    let unit = TimeUnit::from_suffix(split.unit)
        .ok_or_else(|| ConvertError::invalid_unit(QuantityKind::Time, split.unit, input))?;

    let value = split.value(input)?;
    Ok(value * unit.seconds())
}

/// Converts an optional raw time to seconds.
///
/// `None` passes through and a bare number is taken to already be in
/// seconds.
///
/// # Errors
///
/// Returns an error if a textual time cannot be parsed, see [`parse_time`].
pub fn convert_time(raw: Option<&RawQuantity>) -> Result<Option<f64>, ConvertError> {
    match raw {
        None => Ok(None),
        Some(RawQuantity::Number(seconds)) => Ok(Some(*seconds)),
        Some(RawQuantity::Text(text)) => parse_time(text).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod success_tests {
        use super::*;

        #[test]
        fn every_unit_scales_linearly() {
            let cases = [
                ("second", 1.0),
                ("seconds", 1.0),
                ("s", 1.0),
                ("sec", 1.0),
                ("minute", 60.0),
                ("minutes", 60.0),
                ("m", 60.0),
                ("min", 60.0),
                ("hour", 3600.0),
                ("hours", 3600.0),
                ("h", 3600.0),
                ("hr", 3600.0),
            ];

            for (unit, factor) in cases {
                for number in [0.0, 1.0, 2.5, 45.0] {
                    let seconds = parse_time(&format!("{number}{unit}"))
                        .expect("should parse time without a space");
                    assert!((seconds - number * factor).abs() < 1e-9, "{number}{unit}");

                    let seconds = parse_time(&format!("{number} {unit}"))
                        .expect("should parse time with a space");
                    assert!((seconds - number * factor).abs() < 1e-9, "{number} {unit}");
                }
            }
        }

        #[test]
        fn surrounding_whitespace() {
            let seconds = parse_time("  10 minutes ").expect("should ignore surrounding spaces");
            assert!((seconds - 600.0).abs() < f64::EPSILON);
        }

        #[test]
        fn leading_decimal_point() {
            let seconds = parse_time(".5 hours").expect("should parse leading decimal point");
            assert!((seconds - 1800.0).abs() < f64::EPSILON);
        }

        #[test]
        fn none_passes_through() {
            assert_eq!(convert_time(None), Ok(None));
        }

        #[test]
        fn number_is_seconds() {
            let raw = RawQuantity::from(5);
            assert_eq!(convert_time(Some(&raw)), Ok(Some(5.0)));
        }

        #[test]
        fn text_is_converted() {
            let raw = RawQuantity::from("2 hours");
            assert_eq!(convert_time(Some(&raw)), Ok(Some(7200.0)));
        }
    }

    mod error_tests {
        use super::*;
        use cycler_error::{AsCyclerError, ErrorCategory};

        #[test]
        fn unknown_unit() {
            let error = parse_time("5 days").expect_err("should reject days");
            assert_eq!(
                error,
                ConvertError::InvalidUnit {
                    quantity: QuantityKind::Time,
                    unit: "days".to_string(),
                    input: "5 days".to_string(),
                }
            );
            assert_eq!(error.category(), ErrorCategory::Parse);
        }

        #[test]
        fn unknown_unit_lists_examples() {
            let error = parse_time("5 weeks").expect_err("should reject weeks");
            let message = error.to_string();
            assert!(message.contains("time units must be"));
            assert!(message.contains("Discharge at 1C for 0.5 hours"));
        }

        #[test]
        fn units_are_case_sensitive() {
            let error = parse_time("5 Hours").expect_err("should reject capitalized unit");
            assert!(matches!(error, ConvertError::InvalidUnit { .. }));
        }

        #[test]
        fn missing_unit() {
            let error = parse_time("5").expect_err("should reject a bare number string");
            assert!(matches!(error, ConvertError::InvalidUnit { ref unit, .. } if unit.is_empty()));
        }

        #[test]
        fn malformed_number() {
            let error = parse_time("1.2.3 s").expect_err("should reject malformed number");
            assert!(matches!(error, ConvertError::InvalidNumber { .. }));
            assert_eq!(error.category(), ErrorCategory::NumericParse);
        }

        #[test]
        fn missing_number() {
            let error = parse_time("hours").expect_err("should reject missing number");
            assert!(matches!(error, ConvertError::InvalidNumber { .. }));
        }
    }
}
