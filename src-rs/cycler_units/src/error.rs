//! Errors raised while converting raw quantities.

use std::{fmt, num::ParseFloatError};

use cycler_error::{AsCyclerError, Context, ErrorCategory};
use thiserror::Error;

use crate::catalog::example_catalog;

/// The family of quantity a converter was reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityKind {
    /// A duration or period
    Time,
    /// A temperature
    Temperature,
    /// A current, voltage, power, resistance or C-rate
    Electric,
}

impl QuantityKind {
    /// Describes the unit suffixes accepted for this quantity.
    #[must_use]
    pub const fn expected_units(self) -> &'static str {
        match self {
            Self::Time => "time units must be 'seconds', 'minutes' or 'hours'",
            Self::Temperature => "temperature units must be 'K' or 'oC'",
            Self::Electric => "units must be 'A', 'V', 'W', 'Ohm', or 'C'",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time => write!(f, "time"),
            Self::Temperature => write!(f, "temperature"),
            Self::Electric => write!(f, "electrical"),
        }
    }
}

/// An error that occurred while converting a raw quantity or timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The unit suffix is not one of the accepted suffixes
    #[error("{}", invalid_unit_text(.quantity, .unit))]
    InvalidUnit {
        /// The quantity being converted
        quantity: QuantityKind,
        /// The unrecognized suffix
        unit: String,
        /// The complete raw input
        input: String,
    },
    /// The numeric part could not be read as a floating-point number
    #[error("invalid number `{number}` in `{input}`: {source}")]
    InvalidNumber {
        /// The numeric text that failed to parse
        number: String,
        /// The complete raw input
        input: String,
        /// The underlying float parsing error
        source: ParseFloatError,
    },
    /// A C-rate such as `C/0` would divide by zero
    #[error("C-rate divisor must not be zero in `{input}`")]
    ZeroCRateDivisor {
        /// The complete raw input
        input: String,
    },
    /// None of the supported timestamp formats matched
    #[error("the timestamp [{input}] does not match any of the supported formats")]
    UnknownTimestamp {
        /// The complete raw input
        input: String,
    },
}

#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "thiserror passes fields by reference"
)]
fn invalid_unit_text(quantity: &QuantityKind, unit: &str) -> String {
    match quantity {
        QuantityKind::Temperature => {
            format!("{}, found `{unit}`", quantity.expected_units())
        }
        QuantityKind::Time | QuantityKind::Electric => format!(
            "{}, found `{unit}`. For example:\n{}",
            quantity.expected_units(),
            example_catalog()
        ),
    }
}

impl ConvertError {
    pub(crate) fn invalid_unit(quantity: QuantityKind, unit: &str, input: &str) -> Self {
        Self::InvalidUnit {
            quantity,
            unit: unit.to_string(),
            input: input.to_string(),
        }
    }

    pub(crate) fn invalid_number(number: &str, input: &str, source: ParseFloatError) -> Self {
        Self::InvalidNumber {
            number: number.to_string(),
            input: input.to_string(),
            source,
        }
    }

    /// Returns the raw input that could not be converted.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidUnit { input, .. }
            | Self::InvalidNumber { input, .. }
            | Self::ZeroCRateDivisor { input }
            | Self::UnknownTimestamp { input } => input,
        }
    }
}

impl AsCyclerError for ConvertError {
    fn message(&self) -> String {
        match self {
            Self::InvalidUnit {
                quantity, unit, ..
            } => format!("unknown {quantity} unit `{unit}`"),
            Self::InvalidNumber { number, .. } => format!("invalid number `{}`", number.trim()),
            Self::ZeroCRateDivisor { .. } | Self::UnknownTimestamp { .. } => self.to_string(),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidUnit { .. } | Self::UnknownTimestamp { .. } => ErrorCategory::Parse,
            Self::InvalidNumber { .. } => ErrorCategory::NumericParse,
            Self::ZeroCRateDivisor { .. } => ErrorCategory::Validation,
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::InvalidUnit { quantity, .. } => {
                let mut context = vec![Context::Help(quantity.expected_units().to_string())];
                if *quantity != QuantityKind::Temperature {
                    context.push(Context::Note(format!(
                        "valid instructions look like:\n{}",
                        example_catalog()
                    )));
                }
                context
            }
            Self::InvalidNumber { source, .. } => vec![Context::Note(source.to_string())],
            Self::ZeroCRateDivisor { .. } => vec![Context::Help(
                "write C-rates as `C/<divisor>` with a non-zero divisor, e.g. `C/20`".to_string(),
            )],
            Self::UnknownTimestamp { .. } => vec![Context::Help(
                "supported formats are `Day <day> <H>:<M>[:<S>]` and `<Y>-<M>-<D> <H>:<M>[:<S>]`"
                    .to_string(),
            )],
        }
    }
}
