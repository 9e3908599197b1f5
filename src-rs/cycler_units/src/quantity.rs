//! Raw quantities and the split between their number and unit.

use std::fmt;

use nom::{IResult, Parser, bytes::complete::take_while};

use crate::error::ConvertError;

/// A quantity as supplied by a user: a bare number or text with a unit.
///
/// Bare numbers are already in canonical units (seconds, Kelvin).
#[derive(Debug, Clone, PartialEq)]
pub enum RawQuantity {
    /// A number in canonical units
    Number(f64),
    /// Text such as `"0.5 hours"` or `"25oC"`
    Text(String),
}

impl From<f64> for RawQuantity {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for RawQuantity {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for RawQuantity {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for RawQuantity {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawQuantity {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for RawQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// A quantity string split into its leading number and trailing unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SplitQuantity<'a> {
    pub number: &'a str,
    pub unit: &'a str,
}

impl SplitQuantity<'_> {
    /// Parses the number part, reporting failures against `input`.
    pub fn value(&self, input: &str) -> Result<f64, ConvertError> {
        let number = self.number.trim();
        number
            .parse::<f64>()
            .map_err(|error| ConvertError::invalid_number(number, input, error))
    }
}

const fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | ' ')
}

fn number_prefix(input: &str) -> IResult<&str, &str> {
    take_while(is_number_char).parse(input)
}

/// Splits `input` into the leading run of digits, signs, decimal points and
/// spaces, and the unit that follows it.
///
/// The unit is returned exactly as written; validating it is up to the
/// caller. Numbers with an exponent are not supported since `e` would be
/// read as the start of the unit.
pub(crate) fn split_quantity(input: &str) -> SplitQuantity<'_> {
    // `take_while` on complete input cannot fail
    let (unit, number) = number_prefix(input).unwrap_or((input, ""));
    SplitQuantity { number, unit }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_without_space() {
        let split = split_quantity("200mA");
        assert_eq!(split.number, "200");
        assert_eq!(split.unit, "mA");
    }

    #[test]
    fn split_with_space() {
        let split = split_quantity("0.5 hours");
        assert_eq!(split.number, "0.5 ");
        assert_eq!(split.unit, "hours");
    }

    #[test]
    fn split_negative() {
        let split = split_quantity("-1.5 A");
        assert_eq!(split.number, "-1.5 ");
        assert_eq!(split.unit, "A");
    }

    #[test]
    fn split_without_unit() {
        let split = split_quantity("42");
        assert_eq!(split.number, "42");
        assert_eq!(split.unit, "");
    }

    #[test]
    fn split_without_number() {
        let split = split_quantity("hours");
        assert_eq!(split.number, "");
        assert_eq!(split.unit, "hours");
    }

    #[test]
    fn value_rejects_malformed_number() {
        let split = split_quantity("1.2.3s");
        let error = split.value("1.2.3s").expect_err("should reject two decimal points");
        assert!(matches!(error, ConvertError::InvalidNumber { .. }));
    }

    #[test]
    fn raw_quantity_display() {
        assert_eq!(RawQuantity::from(5).to_string(), "5");
        assert_eq!(RawQuantity::from(0.5).to_string(), "0.5");
        assert_eq!(RawQuantity::from("1 hour").to_string(), "1 hour");
    }
}
