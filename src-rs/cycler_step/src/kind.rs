//! Step kinds and termination conditions.

use std::fmt;

use cycler_units::{ConvertError, ElectricKind, convert_electric};
use serde::Serialize;

/// The quantity a termination condition watches.
pub type TerminationKind = ElectricKind;

/// What a step controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StepKind {
    /// Applied current in amperes
    #[serde(rename = "current")]
    Current,
    /// Applied current as a multiple of the nominal capacity
    #[serde(rename = "C-rate")]
    CRate,
    /// Applied voltage in volts
    #[serde(rename = "voltage")]
    Voltage,
    /// Applied power in watts
    #[serde(rename = "power")]
    Power,
    /// Applied resistance in ohms
    #[serde(rename = "resistance")]
    Resistance,
    /// Constant current followed by constant voltage, as one step
    #[serde(rename = "cccv")]
    Cccv,
    /// No applied current
    #[serde(rename = "rest")]
    Rest,
}

impl StepKind {
    /// Returns the name used in traces and step dictionaries
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::CRate => "C-rate",
            Self::Voltage => "voltage",
            Self::Power => "power",
            Self::Resistance => "resistance",
            Self::Cccv => "cccv",
            Self::Rest => "rest",
        }
    }

    /// Returns the unit of the step value, e.g. `[A]`.
    ///
    /// Rest and CCCV steps are driven by current, so they report amperes.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Current | Self::Cccv | Self::Rest => "[A]",
            Self::CRate => "[C]",
            Self::Voltage => "[V]",
            Self::Power => "[W]",
            Self::Resistance => "[Ohm]",
        }
    }
}

impl From<ElectricKind> for StepKind {
    fn from(kind: ElectricKind) -> Self {
        match kind {
            ElectricKind::CRate => Self::CRate,
            ElectricKind::Current => Self::Current,
            ElectricKind::Voltage => Self::Voltage,
            ElectricKind::Power => Self::Power,
            ElectricKind::Resistance => Self::Resistance,
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A condition that ends a step early, e.g. "until 4.1 V".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Termination {
    /// The watched quantity
    #[serde(rename = "type")]
    pub kind: TerminationKind,
    /// The threshold, in SI units or as a C-rate
    pub value: f64,
}

impl Termination {
    /// Creates a termination condition
    #[must_use]
    pub const fn new(kind: TerminationKind, value: f64) -> Self {
        Self { kind, value }
    }

    /// Reads a condition such as `"4.1V"`, `"50 mA"` or `"C/50"`.
    ///
    /// # Errors
    ///
    /// Returns the conversion error for an unknown unit or malformed number.
    pub fn parse(text: &str) -> Result<Self, ConvertError> {
        let (kind, value) = convert_electric(text)?;
        Ok(Self { kind, value })
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TerminationKind::CRate => write!(f, "{}C", self.value),
            TerminationKind::Current
            | TerminationKind::Voltage
            | TerminationKind::Power
            | TerminationKind::Resistance => write!(f, "{} {}", self.value, self.kind.symbol()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_per_kind() {
        assert_eq!(StepKind::Current.unit(), "[A]");
        assert_eq!(StepKind::CRate.unit(), "[C]");
        assert_eq!(StepKind::Voltage.unit(), "[V]");
        assert_eq!(StepKind::Power.unit(), "[W]");
        assert_eq!(StepKind::Resistance.unit(), "[Ohm]");
        assert_eq!(StepKind::Cccv.unit(), "[A]");
        assert_eq!(StepKind::Rest.unit(), "[A]");
    }

    #[test]
    fn termination_from_text() {
        let termination = Termination::parse("50mA").expect("should parse milliamps");
        assert_eq!(termination, Termination::new(TerminationKind::Current, 0.05));
        assert_eq!(termination.to_string(), "0.05 A");

        let termination = Termination::parse("C/50").expect("should parse a C-rate");
        assert_eq!(termination.kind, TerminationKind::CRate);
        assert_eq!(termination.to_string(), "0.02C");
    }

    #[test]
    fn termination_rejects_unknown_unit() {
        let error = Termination::parse("4.1 Q").expect_err("should reject unit Q");
        assert!(matches!(error, ConvertError::InvalidUnit { .. }));
    }
}
