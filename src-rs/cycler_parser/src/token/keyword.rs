//! Keyword parsers.
//!
//! Each keyword must be followed by a non-alphanumeric character or the end
//! of the input, so `or` does not match the start of `order`.

use nom::{
    Parser as _,
    bytes::complete::tag,
    character::complete::{alpha1, satisfy},
    combinator::{eof, peek},
};

use crate::token::{
    InputSpan, Parser, Result,
    error::{ExpectKeyword, TokenError},
    util::{Token, token},
};

/// Keywords that introduce instruction clauses.
pub const KEYWORDS: &[&str] = &["at", "for", "or", "period", "until"];

fn keyword(kw_str: &str, error_kind: ExpectKeyword) -> impl Parser<'_, Token<'_>, TokenError> {
    token(
        move |input| {
            let next_char_is_not_word_char =
                peek(satisfy(|c: char| !c.is_alphanumeric() && c != '_')).map(|_| ());

            let reached_end_of_input = eof.map(|_| ());

            let (input, _) = tag(kw_str)(input)?;
            let (input, ()) = next_char_is_not_word_char
                .or(reached_end_of_input)
                .parse(input)?;
            Ok((input, ()))
        },
        TokenError::expected_keyword(error_kind),
    )
}

/// Parses the 'at' keyword token.
pub fn at(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    keyword("at", ExpectKeyword::At).parse(input)
}

/// Parses the 'for' keyword token.
pub fn for_(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    keyword("for", ExpectKeyword::For).parse(input)
}

/// Parses the 'or' keyword token.
pub fn or(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    keyword("or", ExpectKeyword::Or).parse(input)
}

/// Parses the 'period' keyword token.
pub fn period(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    keyword("period", ExpectKeyword::Period).parse(input)
}

/// Parses the 'until' keyword token.
pub fn until(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    keyword("until", ExpectKeyword::Until).parse(input)
}

/// Parses a bare alphabetic word, such as the action of an instruction.
pub fn word(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(alpha1, TokenError::expected_word).parse(input)
}
