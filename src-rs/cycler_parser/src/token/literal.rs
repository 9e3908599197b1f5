//! Quantity literals such as `1 A`, `0.5 hours`, `200mA` and `C/2`.

use nom::{
    Parser as _,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, char, digit0, digit1, one_of, space0},
    combinator::{opt, recognize, verify},
};

use crate::token::{
    InputSpan, Result,
    error::TokenError,
    keyword::KEYWORDS,
    util::{Token, token},
};

fn number_body(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>, TokenError> {
    let integer_and_fraction = recognize((digit1, opt((char('.'), digit0))));
    let fraction_only = recognize((char('.'), digit1));

    recognize((opt(one_of("+-")), alt((integer_and_fraction, fraction_only)))).parse(input)
}

/// Parses a decimal number such as `4.1`, `-1` or `.5`.
///
/// Exponents are not supported since an `e` would be read as a unit.
pub fn number(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(number_body, TokenError::expected_number).parse(input)
}

/// Parses a quantity: a number followed by a unit, or a `C/<divisor>` rate.
///
/// The unit is a run of letters and may be separated from the number by
/// spaces. A clause keyword is never a unit, so `1 for` is not a quantity.
/// Whether the unit is meaningful is not checked here.
pub fn quantity(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    let unit = verify(alpha1, |unit: &InputSpan<'_>| {
        !KEYWORDS.contains(unit.fragment())
    });
    let c_rate_fraction = recognize((tag("C/"), space0, number_body));
    let number_and_unit = recognize((number_body, space0, unit));

    // report failures at the start of the quantity, not inside it
    token(
        alt((c_rate_fraction, number_and_unit)),
        TokenError::expected_quantity,
    )
    .parse(input)
    .map_err(|error| {
        error.map(|error| TokenError {
            offset: input.location_offset(),
            ..error
        })
    })
}
