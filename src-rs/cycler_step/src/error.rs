//! Errors raised while building steps.

use cycler_error::{AsCyclerError, Context, ErrorCategory, ErrorLocation};
use cycler_parser::{Span, error::ParserError};
use cycler_units::ConvertError;
use thiserror::Error;

/// An error that occurred while building a step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// A drive cycle table without exactly two columns
    #[error(
        "drive cycle must be a 2-column array with time in the first column and \
         current/C-rate/power/voltage/resistance in the second, found {columns} columns"
    )]
    DriveCycleShape {
        /// Number of rows in the table
        rows: usize,
        /// Number of columns in the table
        columns: usize,
    },
    /// A drive cycle with fewer than two samples
    #[error("drive cycle must have at least 2 rows, found {rows}")]
    DriveCycleTooShort {
        /// Number of rows in the table
        rows: usize,
    },
    /// A drive cycle time that is not finite or not after the previous one
    #[error("drive cycle times must be finite and strictly increasing (row {row})")]
    DriveCycleTimes {
        /// The zero-based row holding the offending time
        row: usize,
    },
    /// A period given both in an instruction and as an option
    #[error("period cannot be specified both as an option and in the instruction")]
    PeriodSpecifiedTwice {
        /// Where the instruction gave its period
        span: Option<Span>,
    },
    /// A value, duration, period or temperature that is NaN
    #[error("step {field} must be a number, found NaN")]
    NotANumber {
        /// The offending field
        field: &'static str,
    },
    /// A raw field could not be converted
    #[error(transparent)]
    Convert(#[from] ConvertError),
    /// A quantity inside an instruction could not be converted
    #[error("{source}")]
    InvalidQuantity {
        /// Where the quantity appears in the instruction
        span: Span,
        /// The conversion failure
        source: ConvertError,
    },
    /// An instruction does not follow the grammar
    #[error(transparent)]
    Parse(#[from] ParserError),
}

impl AsCyclerError for StepError {
    fn message(&self) -> String {
        match self {
            Self::Convert(error) | Self::InvalidQuantity { source: error, .. } => error.message(),
            Self::Parse(error) => error.message(),
            Self::DriveCycleShape { .. }
            | Self::DriveCycleTooShort { .. }
            | Self::DriveCycleTimes { .. }
            | Self::PeriodSpecifiedTwice { .. }
            | Self::NotANumber { .. } => self.to_string(),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Convert(error) | Self::InvalidQuantity { source: error, .. } => error.category(),
            Self::Parse(error) => error.category(),
            Self::DriveCycleShape { .. }
            | Self::DriveCycleTooShort { .. }
            | Self::DriveCycleTimes { .. }
            | Self::PeriodSpecifiedTwice { .. }
            | Self::NotANumber { .. } => ErrorCategory::Validation,
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::Convert(error) | Self::InvalidQuantity { source: error, .. } => error.context(),
            Self::Parse(error) => error.context(),
            Self::DriveCycleShape { .. } | Self::DriveCycleTooShort { .. } => {
                vec![Context::Help(
                    "pass one `[time, value]` row per sample, e.g. `[[0.0, 1.0], [10.0, 0.5]]`"
                        .to_string(),
                )]
            }
            Self::DriveCycleTimes { .. } | Self::NotANumber { .. } => vec![],
            Self::PeriodSpecifiedTwice { .. } => vec![Context::Help(
                "remove the `(<duration> period)` clause or the period option".to_string(),
            )],
        }
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        match self {
            Self::Parse(error) => error.error_location(source),
            Self::InvalidQuantity { span, .. }
            | Self::PeriodSpecifiedTwice {
                span: Some(span), ..
            } => Some(ErrorLocation::from_source_and_span(
                source,
                span.start(),
                span.len(),
            )),
            Self::Convert(_)
            | Self::DriveCycleShape { .. }
            | Self::DriveCycleTooShort { .. }
            | Self::DriveCycleTimes { .. }
            | Self::NotANumber { .. }
            | Self::PeriodSpecifiedTwice { span: None } => None,
        }
    }
}
