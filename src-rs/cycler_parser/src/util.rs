use nom::{IResult, Parser as NomParser, error::Error};
use nom_locate::LocatedSpan;

use crate::{config::ParseConfig, span::Span};

/// A span of text in the input string.
///
/// The span carries the parser configuration so that every parser can see
/// it without threading it through by hand.
pub type InputSpan<'a> = LocatedSpan<&'a str, ParseConfig>;

/// Creates a [`Span`] covering the input consumed between `start` and `end`.
pub fn span_from(start: InputSpan<'_>, end: InputSpan<'_>) -> Span {
    Span::new(start.location_offset(), end.location_offset())
}

/// A result type for parser operations.
pub type Result<'a, O, E = Error<InputSpan<'a>>> = IResult<InputSpan<'a>, O, E>;

/// A trait for parser implementations that work with [`InputSpan`].
///
/// Implemented for any nom parser over [`InputSpan`].
pub trait Parser<'a, O, E = Error<InputSpan<'a>>>:
    NomParser<InputSpan<'a>, Output = O, Error = E>
{
}

impl<'a, O, E, P> Parser<'a, O, E> for P where P: NomParser<InputSpan<'a>, Output = O, Error = E> {}
