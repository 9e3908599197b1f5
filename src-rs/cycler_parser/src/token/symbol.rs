//! Symbol parsers.

use nom::{Parser as _, bytes::complete::tag};

use crate::token::{
    InputSpan, Result,
    error::{ExpectSymbol, TokenError},
    util::{Token, token},
};

/// Parses a '(' symbol token.
pub fn paren_left(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(tag("("), TokenError::expected_symbol(ExpectSymbol::ParenLeft)).parse(input)
}

/// Parses a ')' symbol token.
pub fn paren_right(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(tag(")"), TokenError::expected_symbol(ExpectSymbol::ParenRight)).parse(input)
}
