//! Conversion of electrical instructions such as `"200mA"` or `"C/3"`.

use std::fmt;

use serde::Serialize;

use crate::{
    error::{ConvertError, QuantityKind},
    quantity::split_quantity,
};

/// The kind of electrical quantity an instruction names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElectricKind {
    /// Current normalized to nominal capacity, written `C`
    #[serde(rename = "C-rate")]
    CRate,
    /// Current in amperes, written `A`
    #[serde(rename = "current")]
    Current,
    /// Voltage in volts, written `V`
    #[serde(rename = "voltage")]
    Voltage,
    /// Power in watts, written `W`
    #[serde(rename = "power")]
    Power,
    /// Resistance in ohms, written `Ohm`
    #[serde(rename = "resistance")]
    Resistance,
}

impl ElectricKind {
    /// Looks up a unit symbol. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "C" => Some(Self::CRate),
            "A" => Some(Self::Current),
            "V" => Some(Self::Voltage),
            "W" => Some(Self::Power),
            "Ohm" => Some(Self::Resistance),
            _ => None,
        }
    }

    /// The unit symbol, e.g. `Ohm`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::CRate => "C",
            Self::Current => "A",
            Self::Voltage => "V",
            Self::Power => "W",
            Self::Resistance => "Ohm",
        }
    }

    /// The name used in step dictionaries, e.g. `C-rate` or `voltage`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CRate => "C-rate",
            Self::Current => "current",
            Self::Voltage => "voltage",
            Self::Power => "power",
            Self::Resistance => "resistance",
        }
    }
}

impl fmt::Display for ElectricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Converts an electrical instruction to its kind and value in SI units (or
/// C-rate).
///
/// Two forms are accepted:
/// - `C/<divisor>`: a C-rate of `1 / divisor`. The character after `C` is not
///   checked.
/// - `<number><unit>` with unit `A`, `V`, `W`, `Ohm` or `C`, optionally with a
///   `m` prefix which divides the value by 1000.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidUnit`] for an unknown unit,
/// [`ConvertError::InvalidNumber`] for a malformed number, and
/// [`ConvertError::ZeroCRateDivisor`] for `C/0`.
///
/// # Examples
///
/// ```rust
/// use cycler_units::{ElectricKind, convert_electric};
///
/// assert_eq!(convert_electric("C/2"), Ok((ElectricKind::CRate, 0.5)));
/// assert_eq!(convert_electric("4.1V"), Ok((ElectricKind::Voltage, 4.1)));
/// ```
pub fn convert_electric(input: &str) -> Result<(ElectricKind, f64), ConvertError> {
    let trimmed = input.trim();

    if trimmed.starts_with('C') {
        return convert_c_rate_fraction(trimmed, input);
    }

    let split = split_quantity(trimmed);

    let (kind, divisor) = match ElectricKind::from_symbol(split.unit) {
        Some(kind) => (kind, 1.0),
        None => {
            let unprefixed = split.unit.strip_prefix('m').and_then(ElectricKind::from_symbol);
            let kind = unprefixed.ok_or_else(|| {
                ConvertError::invalid_unit(QuantityKind::Electric, split.unit, input)
            })?;
            (kind, 1000.0)
        }
    };

    let value = split.value(input)?;
    Ok((kind, value / divisor))
}

fn convert_c_rate_fraction(
    trimmed: &str,
    input: &str,
) -> Result<(ElectricKind, f64), ConvertError> {
    // skip `C` and the separator, normally `/`
    let divisor = trimmed
        .char_indices()
        .nth(2)
        .map_or("", |(start, _)| &trimmed[start..])
        .trim();

    let divisor = divisor
        .parse::<f64>()
        .map_err(|error| ConvertError::invalid_number(divisor, input, error))?;

    if divisor == 0.0 {
        return Err(ConvertError::ZeroCRateDivisor {
            input: input.to_string(),
        });
    }

    Ok((ElectricKind::CRate, 1.0 / divisor))
}
