use nom::{Parser as NomParser, character::complete::space0, combinator::recognize};

use crate::{
    span::Span,
    token::{
        InputSpan, Parser, Result,
        error::{ErrorHandlingParser, TokenError},
    },
    util::span_from,
};

/// A lexical element of an instruction.
///
/// A token is the matched text (the lexeme) together with the whitespace
/// that follows it. Keeping both spans lets errors point either at the
/// token itself or just past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub lexeme_str: &'a str,
    pub lexeme_span: Span,
    pub whitespace_span: Span,
}

/// Parses inline whitespace (spaces and tabs).
///
/// Always succeeds, possibly consuming nothing.
pub fn inline_whitespace(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>, TokenError> {
    space0.parse(input)
}

/// Wraps a parser so that it produces a [`Token`] and consumes the
/// whitespace after the match.
///
/// Recoverable errors from `f` are passed through `convert_error`, which
/// should name the token that was expected.
pub fn token<'a, O>(
    mut f: impl Parser<'a, O, TokenError>,
    convert_error: impl Fn(TokenError) -> TokenError,
) -> impl Parser<'a, Token<'a>, TokenError> {
    move |input: InputSpan<'a>| {
        let lexeme_parser = |input: InputSpan<'a>| f.parse(input);

        let (rest, lexeme) = recognize(lexeme_parser)
            .convert_error_to(&convert_error)
            .parse(input)?;
        let lexeme_span = span_from(lexeme, rest);

        let (rest, whitespace) = inline_whitespace.parse(rest)?;
        let whitespace_span = span_from(whitespace, rest);

        let token = Token {
            lexeme_str: *lexeme.fragment(),
            lexeme_span,
            whitespace_span,
        };

        Ok((rest, token))
    }
}
