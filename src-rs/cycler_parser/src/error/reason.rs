//! Reasons a parse can fail.
//!
//! - **Expect**: the input did not start with the expected construct
//! - **Incomplete**: a clause was started but not finished, `cause` is the
//!   span of the token that started it
//! - the remaining variants reject instructions that are well formed
//!   tokens but not a usable step

use thiserror::Error;

use crate::{ast::Action, span::Span, token::error::TokenErrorKind};

/// The different kinds of errors that can occur during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParserErrorReason {
    /// Expected a construct but found something else
    #[error("{0}")]
    Expect(ExpectKind),
    /// A clause was started but not completed
    #[error("{kind}")]
    Incomplete {
        /// The span of the token that started the clause
        cause: Span,
        /// What is missing
        kind: IncompleteKind,
    },
    /// An action other than `Rest` without an `at <value>` clause
    #[error("expected `at` and a value after `{action}`")]
    MissingValue {
        /// The action that needs a value
        action: Action,
    },
    /// Neither a duration nor a termination condition was given
    #[error("operating conditions must contain keyword `for` or `until`")]
    MissingForOrUntil,
    /// A temperature was written inside the instruction
    #[error("temperature must be given as a step option instead of in the instruction")]
    InlineTemperature {
        /// The span of the temperature quantity
        span: Span,
    },
    /// The `Run` action, which read drive cycles from files
    #[error("running drive cycles from an instruction is not supported")]
    RunNotSupported,
    /// Input remained after a complete instruction
    #[error("unexpected character")]
    UnexpectedToken,
    /// A token-level error occurred
    #[error("{0}")]
    TokenError(TokenErrorKind),
    /// A low-level nom parsing error
    #[error("unexpected input ({})", .0.description())]
    NomError(nom::error::ErrorKind),
}

/// The constructs that can be expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExpectKind {
    /// An instruction action
    #[error("expected `Discharge`, `Charge`, `Hold` or `Rest`")]
    Action,
    /// A value with a unit
    #[error("expected value with a unit, such as `1 A` or `C/2`")]
    Quantity,
}

/// The clauses that can be left incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IncompleteKind {
    /// `at` without a value
    #[error("expected value after `at`")]
    AtMissingValue,
    /// `for` without a duration
    #[error("expected duration after `for`")]
    ForMissingDuration,
    /// `until` without a condition
    #[error("expected condition after `until`")]
    UntilMissingCondition,
    /// `or` without a further condition
    #[error("expected condition after `or`")]
    OrMissingCondition,
    /// `(` without a period duration
    #[error("expected period duration after `(`")]
    PeriodMissingDuration,
    /// A period duration not followed by `period`
    #[error("expected `period` after duration")]
    PeriodMissingKeyword,
    /// `(` without a matching `)`
    #[error("unclosed parenthesis")]
    UnclosedParen,
}

impl ParserErrorReason {
    pub(crate) const fn incomplete(cause: Span, kind: IncompleteKind) -> Self {
        Self::Incomplete { cause, kind }
    }
}
