//! Error handling for the instruction parser.

use cycler_error::{AsCyclerError, Context, ErrorCategory, ErrorLocation};
use cycler_units::example_catalog;
use thiserror::Error;

use crate::{
    InputSpan,
    ast::Action,
    span::Span,
    token::error::TokenError,
};

pub mod reason;
use reason::{ExpectKind, IncompleteKind, ParserErrorReason};

mod parser_trait;
pub use parser_trait::ErrorHandlingParser;

/// An error that occurred during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ParserError {
    /// The byte offset in the source where the error occurred
    pub error_offset: usize,
    /// The reason for the error
    pub reason: ParserErrorReason,
}

impl ParserError {
    /// Creates a new `ParserError` at the given offset
    #[must_use]
    pub const fn new(reason: ParserErrorReason, error_offset: usize) -> Self {
        Self {
            error_offset,
            reason,
        }
    }

    /// Replaces the reason of a recoverable error, keeping its offset
    const fn convert_reason(self, reason: ParserErrorReason) -> Self {
        Self { reason, ..self }
    }

    const fn new_from_token_error(error: TokenError, reason: ParserErrorReason) -> Self {
        Self::new(reason, error.offset)
    }

    /// Creates a new `ParserError` for an expected action
    pub(crate) const fn expect_action(error: TokenError) -> Self {
        Self::new_from_token_error(error, ParserErrorReason::Expect(ExpectKind::Action))
    }

    /// Creates a new `ParserError` for a word that is not an action
    pub(crate) const fn unknown_action(word_span: Span) -> Self {
        Self::new(
            ParserErrorReason::Expect(ExpectKind::Action),
            word_span.start(),
        )
    }

    /// Creates a new `ParserError` for an expected quantity
    pub(crate) const fn expect_quantity(error: TokenError) -> Self {
        Self::new_from_token_error(error, ParserErrorReason::Expect(ExpectKind::Quantity))
    }

    /// Creates a new `ParserError` for the unsupported `Run` action
    pub(crate) const fn run_not_supported(run_span: Span) -> Self {
        Self::new(ParserErrorReason::RunNotSupported, run_span.start())
    }

    /// Creates a new `ParserError` for an action that needs `at <value>`
    pub(crate) const fn missing_value(action: Action, offset: usize) -> Self {
        Self::new(ParserErrorReason::MissingValue { action }, offset)
    }

    /// Creates a new `ParserError` for an instruction without `for` or `until`
    pub(crate) const fn missing_for_or_until(offset: usize) -> Self {
        Self::new(ParserErrorReason::MissingForOrUntil, offset)
    }

    /// Creates a new `ParserError` for a temperature written in the instruction
    pub(crate) const fn inline_temperature(span: Span) -> Self {
        Self::new(ParserErrorReason::InlineTemperature { span }, span.start())
    }

    /// Creates a new `ParserError` for a missing value after `at`
    pub(crate) fn at_missing_value(at_span: Span) -> impl Fn(Self) -> Self {
        move |error| {
            error.convert_reason(ParserErrorReason::incomplete(
                at_span,
                IncompleteKind::AtMissingValue,
            ))
        }
    }

    /// Creates a new `ParserError` for a missing duration after `for`
    pub(crate) fn for_missing_duration(for_span: Span) -> impl Fn(Self) -> Self {
        move |error| {
            error.convert_reason(ParserErrorReason::incomplete(
                for_span,
                IncompleteKind::ForMissingDuration,
            ))
        }
    }

    /// Creates a new `ParserError` for a missing condition after `until`
    pub(crate) fn until_missing_condition(until_span: Span) -> impl Fn(Self) -> Self {
        move |error| {
            error.convert_reason(ParserErrorReason::incomplete(
                until_span,
                IncompleteKind::UntilMissingCondition,
            ))
        }
    }

    /// Creates a new `ParserError` for a missing condition after `or`
    pub(crate) fn or_missing_condition(or_span: Span) -> impl Fn(Self) -> Self {
        move |error| {
            error.convert_reason(ParserErrorReason::incomplete(
                or_span,
                IncompleteKind::OrMissingCondition,
            ))
        }
    }

    /// Creates a new `ParserError` for a missing duration in a period clause
    pub(crate) fn period_missing_duration(paren_left_span: Span) -> impl Fn(Self) -> Self {
        move |error| {
            error.convert_reason(ParserErrorReason::incomplete(
                paren_left_span,
                IncompleteKind::PeriodMissingDuration,
            ))
        }
    }

    /// Creates a new `ParserError` for a period clause without `period`
    pub(crate) fn period_missing_keyword(duration_span: Span) -> impl Fn(TokenError) -> Self {
        move |error| {
            Self::new_from_token_error(
                error,
                ParserErrorReason::incomplete(duration_span, IncompleteKind::PeriodMissingKeyword),
            )
        }
    }

    /// Creates a new `ParserError` for an unclosed period clause
    pub(crate) fn unclosed_paren(paren_left_span: Span) -> impl Fn(TokenError) -> Self {
        move |error| {
            Self::new_from_token_error(
                error,
                ParserErrorReason::incomplete(paren_left_span, IncompleteKind::UnclosedParen),
            )
        }
    }
}

impl<'a> nom::error::ParseError<InputSpan<'a>> for ParserError {
    fn from_error_kind(input: InputSpan<'a>, kind: nom::error::ErrorKind) -> Self {
        #[expect(
            clippy::wildcard_enum_match_arm,
            reason = "this will only ever care about the EOF error kind"
        )]
        let reason = match kind {
            // `all_consuming` reports leftover input as `Eof`
            nom::error::ErrorKind::Eof => ParserErrorReason::UnexpectedToken,
            _ => ParserErrorReason::NomError(kind),
        };

        Self::new(reason, input.location_offset())
    }

    fn append(_input: InputSpan<'a>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

impl From<TokenError> for ParserError {
    fn from(e: TokenError) -> Self {
        Self::new(ParserErrorReason::TokenError(e.kind), e.offset)
    }
}

impl AsCyclerError for ParserError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Parse
    }

    fn context(&self) -> Vec<Context> {
        let catalog_note =
            || Context::Note(format!("valid instructions look like:\n{}", example_catalog()));

        match self.reason {
            ParserErrorReason::Expect(ExpectKind::Action) => vec![
                Context::Help(
                    "instructions start with `Discharge`, `Charge`, `Hold` or `Rest`".to_string(),
                ),
                catalog_note(),
            ],
            ParserErrorReason::Expect(ExpectKind::Quantity)
            | ParserErrorReason::Incomplete {
                kind:
                    IncompleteKind::AtMissingValue
                    | IncompleteKind::UntilMissingCondition
                    | IncompleteKind::OrMissingCondition,
                ..
            } => vec![Context::Help(
                "values are written as a number and a unit, e.g. `1 A`, `4.1 V` or `C/2`"
                    .to_string(),
            )],
            ParserErrorReason::Incomplete {
                kind: IncompleteKind::ForMissingDuration,
                ..
            } => vec![Context::Help(
                "durations are written as a number and a unit, e.g. `1 hour` or `30 minutes`"
                    .to_string(),
            )],
            ParserErrorReason::Incomplete {
                kind:
                    IncompleteKind::PeriodMissingDuration
                    | IncompleteKind::PeriodMissingKeyword
                    | IncompleteKind::UnclosedParen,
                ..
            } => vec![Context::Help(
                "periods are written as `(<duration> period)`, e.g. `(1 minute period)`"
                    .to_string(),
            )],
            ParserErrorReason::MissingValue { action } => vec![Context::Help(format!(
                "for example: `{action} at 1 A for 1 hour`"
            ))],
            ParserErrorReason::MissingForOrUntil => vec![catalog_note()],
            ParserErrorReason::InlineTemperature { .. } => vec![Context::Help(
                "set the temperature as a step option, e.g. `--temperature 25oC`".to_string(),
            )],
            ParserErrorReason::RunNotSupported => vec![Context::Help(
                "build drive-cycle steps from a time series with the current, voltage, power, \
                 C-rate or resistance step constructors"
                    .to_string(),
            )],
            ParserErrorReason::UnexpectedToken
            | ParserErrorReason::TokenError(_)
            | ParserErrorReason::NomError(_) => vec![],
        }
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        let location = if let ParserErrorReason::InlineTemperature { span } = self.reason {
            ErrorLocation::from_source_and_span(source, span.start(), span.len())
        } else {
            ErrorLocation::from_source_and_offset(source, self.error_offset)
        };
        Some(location)
    }
}
