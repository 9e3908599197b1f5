//! Errors raised by the token parsers.

use std::fmt;

use nom::error::ParseError;

use super::InputSpan;

pub use crate::error::ErrorHandlingParser;

/// An error that occurred during token parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenError {
    /// The specific kind of error that occurred
    pub kind: TokenErrorKind,
    /// The offset in the source where the error occurred
    pub offset: usize,
}

/// The different kinds of errors that can occur during token parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenErrorKind {
    /// Expected a specific token
    Expect(ExpectKind),
    /// A low-level nom parsing error
    NomError(nom::error::ErrorKind),
}

/// The different kinds of tokens that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectKind {
    /// Expected a keyword
    Keyword(ExpectKeyword),
    /// Expected a number
    Number,
    /// Expected a quantity with a unit, or a `C/<divisor>` rate
    Quantity,
    /// Expected a symbol
    Symbol(ExpectSymbol),
    /// Expected a word
    Word,
}

/// The different keywords that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectKeyword {
    /// Expected 'at' keyword
    At,
    /// Expected 'for' keyword
    For,
    /// Expected 'or' keyword
    Or,
    /// Expected 'period' keyword
    Period,
    /// Expected 'until' keyword
    Until,
}

/// The different symbols that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectSymbol {
    /// Expected '(' symbol
    ParenLeft,
    /// Expected ')' symbol
    ParenRight,
}

impl ExpectKeyword {
    /// Returns the keyword as written in an instruction
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::At => "at",
            Self::For => "for",
            Self::Or => "or",
            Self::Period => "period",
            Self::Until => "until",
        }
    }
}

impl ExpectSymbol {
    /// Returns the symbol as written in an instruction
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ParenLeft => "(",
            Self::ParenRight => ")",
        }
    }
}

impl TokenError {
    /// Replaces the kind of a low-level nom error.
    ///
    /// An error that already names an expected token is more precise than
    /// the new kind and is kept as is.
    const fn update_kind(self, kind: TokenErrorKind) -> Self {
        match self.kind {
            TokenErrorKind::NomError(_) => Self { kind, ..self },
            TokenErrorKind::Expect(_) => self,
        }
    }

    /// Creates a new `TokenError` instance for an expected keyword
    pub fn expected_keyword(keyword: ExpectKeyword) -> impl Fn(Self) -> Self {
        move |error: Self| error.update_kind(TokenErrorKind::Expect(ExpectKind::Keyword(keyword)))
    }

    /// Creates a new `TokenError` instance for an expected number
    pub const fn expected_number(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Number))
    }

    /// Creates a new `TokenError` instance for an expected quantity
    pub const fn expected_quantity(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Quantity))
    }

    /// Creates a new `TokenError` instance for an expected symbol
    pub fn expected_symbol(symbol: ExpectSymbol) -> impl Fn(Self) -> Self {
        move |error: Self| error.update_kind(TokenErrorKind::Expect(ExpectKind::Symbol(symbol)))
    }

    /// Creates a new `TokenError` instance for an expected word
    pub const fn expected_word(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Word))
    }
}

impl fmt::Display for TokenErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expect(ExpectKind::Keyword(keyword)) => {
                write!(f, "expected `{}`", keyword.as_str())
            }
            Self::Expect(ExpectKind::Number) => write!(f, "expected number"),
            Self::Expect(ExpectKind::Quantity) => write!(f, "expected value with a unit"),
            Self::Expect(ExpectKind::Symbol(symbol)) => write!(f, "expected `{}`", symbol.as_str()),
            Self::Expect(ExpectKind::Word) => write!(f, "expected word"),
            Self::NomError(kind) => write!(f, "unexpected input ({})", kind.description()),
        }
    }
}

impl ParseError<InputSpan<'_>> for TokenError {
    fn from_error_kind(input: InputSpan<'_>, kind: nom::error::ErrorKind) -> Self {
        Self {
            kind: TokenErrorKind::NomError(kind),
            offset: input.location_offset(),
        }
    }

    fn append(_input: InputSpan<'_>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> From<nom::error::Error<InputSpan<'a>>> for TokenError {
    fn from(e: nom::error::Error<InputSpan<'a>>) -> Self {
        Self::from_error_kind(e.input, e.code)
    }
}
