//! Conversion of temperatures to Kelvin.

use crate::{
    error::{ConvertError, QuantityKind},
    quantity::{RawQuantity, split_quantity},
};

/// Offset between degrees Celsius and Kelvin.
pub const CELSIUS_OFFSET: f64 = 273.15;

/// Converts a temperature string such as `"25oC"` or `"298.15 K"` to Kelvin.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidUnit`] for any unit other than `K` or `oC`,
/// and [`ConvertError::InvalidNumber`] if the number is malformed.
pub fn parse_temperature(input: &str) -> Result<f64, ConvertError> {
    let trimmed = input.trim();
    let split = split_quantity(trimmed);

    match split.unit {
        "K" => split.value(input),
        "oC" => Ok(split.value(input)? + CELSIUS_OFFSET),
        unit => Err(ConvertError::invalid_unit(
            QuantityKind::Temperature,
            unit,
            input,
        )),
    }
}

/// Converts an optional raw temperature to Kelvin.
///
/// `None` passes through and a bare number is taken to already be in Kelvin.
///
/// # Errors
///
/// Returns an error if a textual temperature cannot be parsed, see
/// [`parse_temperature`].
pub fn convert_temperature(raw: Option<&RawQuantity>) -> Result<Option<f64>, ConvertError> {
    match raw {
        None => Ok(None),
        Some(RawQuantity::Number(kelvin)) => Ok(Some(*kelvin)),
        Some(RawQuantity::Text(text)) => parse_temperature(text).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius() {
        let kelvin = parse_temperature("25oC").expect("should parse celsius");
        assert!((kelvin - 298.15).abs() < 1e-9);
    }

    #[test]
    fn celsius_with_space() {
        let kelvin = parse_temperature("25 oC").expect("should parse celsius with a space");
        assert!((kelvin - 298.15).abs() < 1e-9);
    }

    #[test]
    fn negative_celsius() {
        let kelvin = parse_temperature("-10oC").expect("should parse negative celsius");
        assert!((kelvin - 263.15).abs() < 1e-9);
    }

    #[test]
    fn kelvin() {
        assert_eq!(parse_temperature("0K"), Ok(0.0));
        assert_eq!(parse_temperature("298.15 K"), Ok(298.15));
    }

    #[test]
    fn passthrough() {
        assert_eq!(convert_temperature(None), Ok(None));
        let raw = RawQuantity::from(300.0);
        assert_eq!(convert_temperature(Some(&raw)), Ok(Some(300.0)));
    }

    #[test]
    fn fahrenheit_is_rejected() {
        let error = parse_temperature("77F").expect_err("should reject fahrenheit");
        assert_eq!(
            error,
            ConvertError::InvalidUnit {
                quantity: QuantityKind::Temperature,
                unit: "F".to_string(),
                input: "77F".to_string(),
            }
        );
    }

    #[test]
    fn lowercase_kelvin_is_rejected() {
        let error = parse_temperature("300k").expect_err("should reject lowercase kelvin");
        assert!(matches!(error, ConvertError::InvalidUnit { .. }));
    }
}
