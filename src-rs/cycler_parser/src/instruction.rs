//! Parser for a complete instruction.

use nom::{
    Parser as _,
    combinator::{all_consuming, opt},
};

use crate::{
    ast::{Action, Instruction, Quantity, word_matches},
    error::{ErrorHandlingParser, ParserError},
    span::Span,
    token::{inline_whitespace, keyword, literal, symbol},
    util::{InputSpan, Result},
};

/// Parses an instruction, failing if any input is left over.
pub fn parse_complete(input: InputSpan<'_>) -> Result<'_, Instruction, ParserError> {
    all_consuming(parse).parse(input)
}

/// Parses an instruction, leaving any trailing input.
pub fn parse(input: InputSpan<'_>) -> Result<'_, Instruction, ParserError> {
    let (rest, _) = inline_whitespace
        .convert_errors::<ParserError>()
        .parse(input)?;

    let (rest, (action, action_span)) = action(rest)?;

    let (rest, value) = if action.takes_value() {
        let (rest, value) = at_clause(action, rest)?;
        (rest, Some(value))
    } else {
        (rest, None)
    };

    let (rest, duration) = for_clause(rest)?;
    let (rest, terminations) = until_clause(rest)?;

    if duration.is_none() && terminations.is_empty() {
        return Err(nom::Err::Failure(ParserError::missing_for_or_until(
            rest.location_offset(),
        )));
    }

    let (rest, period) = period_clause(rest)?;

    let instruction = Instruction::new(
        action,
        action_span,
        value,
        duration,
        terminations,
        period,
    );

    Ok((rest, instruction))
}

fn action(input: InputSpan<'_>) -> Result<'_, (Action, Span), ParserError> {
    let (rest, word) = keyword::word
        .convert_error_to(ParserError::expect_action)
        .parse(input)?;

    let strict = input.extra.strict_capitalization;

    if let Some(action) = Action::from_word(word.lexeme_str, strict) {
        return Ok((rest, (action, word.lexeme_span)));
    }

    if word_matches(word.lexeme_str, "Run", strict) {
        return Err(nom::Err::Failure(ParserError::run_not_supported(
            word.lexeme_span,
        )));
    }

    Err(nom::Err::Error(ParserError::unknown_action(word.lexeme_span)))
}

fn quantity(input: InputSpan<'_>) -> Result<'_, Quantity, ParserError> {
    let (rest, token) = literal::quantity
        .convert_error_to(ParserError::expect_quantity)
        .parse(input)
        .map_err(|error| bare_number_error(input, error))?;

    let quantity = Quantity::new(token.lexeme_str, token.lexeme_span);

    if quantity.unit() == "oC" {
        return Err(nom::Err::Failure(ParserError::inline_temperature(
            quantity.span(),
        )));
    }

    Ok((rest, quantity))
}

/// A number without a unit, possibly followed by a keyword as in
/// `at 1 for 1 hour`, cannot be read by any enclosing clause.
fn bare_number_error(
    input: InputSpan<'_>,
    error: nom::Err<ParserError>,
) -> nom::Err<ParserError> {
    match error {
        nom::Err::Error(error) if literal::number.parse(input).is_ok() => {
            nom::Err::Failure(error)
        }
        nom::Err::Error(_) | nom::Err::Failure(_) | nom::Err::Incomplete(_) => error,
    }
}

fn at_clause(action: Action, input: InputSpan<'_>) -> Result<'_, Quantity, ParserError> {
    let (rest, at_token) = opt(keyword::at)
        .convert_errors::<ParserError>()
        .parse(input)?;

    let Some(at_token) = at_token else {
        return Err(nom::Err::Failure(ParserError::missing_value(
            action,
            input.location_offset(),
        )));
    };

    quantity
        .or_fail_with(ParserError::at_missing_value(at_token.lexeme_span))
        .parse(rest)
}

fn for_clause(input: InputSpan<'_>) -> Result<'_, Option<Quantity>, ParserError> {
    let (rest, for_token) = opt(keyword::for_)
        .convert_errors::<ParserError>()
        .parse(input)?;

    let Some(for_token) = for_token else {
        return Ok((rest, None));
    };

    let (rest, duration) = quantity
        .or_fail_with(ParserError::for_missing_duration(for_token.lexeme_span))
        .parse(rest)?;

    Ok((rest, Some(duration)))
}

/// Parses `[or] until <condition> {or <condition>}`.
///
/// The leading `or` joins the conditions to a `for` clause, as in
/// `for 10 hours or until 3.3 V`.
fn until_clause(input: InputSpan<'_>) -> Result<'_, Vec<Quantity>, ParserError> {
    let (rest, until) = opt((opt(keyword::or), keyword::until))
        .convert_errors::<ParserError>()
        .parse(input)?;

    let Some((_, until_token)) = until else {
        return Ok((rest, vec![]));
    };

    let (mut rest, first) = quantity
        .or_fail_with(ParserError::until_missing_condition(until_token.lexeme_span))
        .parse(rest)?;

    let mut conditions = vec![first];

    loop {
        let (after_or, or_token) = opt(keyword::or)
            .convert_errors::<ParserError>()
            .parse(rest)?;

        let Some(or_token) = or_token else {
            break;
        };

        let (after_condition, condition) = quantity
            .or_fail_with(ParserError::or_missing_condition(or_token.lexeme_span))
            .parse(after_or)?;

        conditions.push(condition);
        rest = after_condition;
    }

    Ok((rest, conditions))
}

fn period_clause(input: InputSpan<'_>) -> Result<'_, Option<Quantity>, ParserError> {
    let (rest, paren_left) = opt(symbol::paren_left)
        .convert_errors::<ParserError>()
        .parse(input)?;

    let Some(paren_left) = paren_left else {
        return Ok((rest, None));
    };

    let (rest, period) = quantity
        .or_fail_with(ParserError::period_missing_duration(paren_left.lexeme_span))
        .parse(rest)?;

    let (rest, _) = keyword::period
        .or_fail_with(ParserError::period_missing_keyword(period.span()))
        .parse(rest)?;

    let (rest, _) = symbol::paren_right
        .or_fail_with(ParserError::unclosed_paren(paren_left.lexeme_span))
        .parse(rest)?;

    Ok((rest, Some(period)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ParseConfig,
        error::reason::{ExpectKind, IncompleteKind, ParserErrorReason},
    };

    fn span(input: &str) -> InputSpan<'_> {
        InputSpan::new_extra(input, ParseConfig::default())
    }

    fn texts(quantities: &[Quantity]) -> Vec<&str> {
        quantities.iter().map(Quantity::text).collect()
    }

    fn parse_error(input: &str) -> ParserError {
        match parse_complete(span(input)) {
            Err(nom::Err::Error(error) | nom::Err::Failure(error)) => error,
            Err(nom::Err::Incomplete(_)) => panic!("complete parsers never need more input"),
            Ok((_, instruction)) => panic!("should fail to parse, got {instruction:?}"),
        }
    }

    mod success_tests {
        use super::*;

        #[test]
        fn value_and_duration() {
            let (rest, instruction) =
                parse_complete(span("Discharge at 1C for 10 hours")).expect("should parse");
            assert_eq!(rest.fragment(), &"");
            assert_eq!(instruction.action(), Action::Discharge);
            assert_eq!(instruction.action_span(), Span::new(0, 9));
            assert_eq!(instruction.value().map(Quantity::text), Some("1C"));
            assert_eq!(instruction.duration().map(Quantity::text), Some("10 hours"));
            assert!(instruction.terminations().is_empty());
            assert_eq!(instruction.period(), None);
        }

        #[test]
        fn rest_with_duration() {
            let (_, instruction) = parse_complete(span("Rest for 1 hour")).expect("should parse");
            assert_eq!(instruction.action(), Action::Rest);
            assert_eq!(instruction.value(), None);
            assert_eq!(instruction.duration().map(Quantity::text), Some("1 hour"));
        }

        #[test]
        fn until_only() {
            let (_, instruction) =
                parse_complete(span("Hold at 4.1 V until 50 mA")).expect("should parse");
            assert_eq!(instruction.action(), Action::Hold);
            assert_eq!(instruction.duration(), None);
            assert_eq!(texts(instruction.terminations()), vec!["50 mA"]);
        }

        #[test]
        fn for_or_until() {
            let (_, instruction) =
                parse_complete(span("Discharge at 1C for 10 hours or until 3.3 V"))
                    .expect("should parse");
            assert_eq!(instruction.duration().map(Quantity::text), Some("10 hours"));
            assert_eq!(texts(instruction.terminations()), vec!["3.3 V"]);
        }

        #[test]
        fn several_conditions() {
            let (_, instruction) =
                parse_complete(span("Charge at 1 A until 4.2 V or C/50 or 100 mW"))
                    .expect("should parse");
            assert_eq!(
                texts(instruction.terminations()),
                vec!["4.2 V", "C/50", "100 mW"]
            );
        }

        #[test]
        fn period_clause() {
            let (_, instruction) =
                parse_complete(span("Charge at 0.5 C for 45 minutes (1 minute period)"))
                    .expect("should parse");
            assert_eq!(instruction.period().map(Quantity::text), Some("1 minute"));
            assert_eq!(
                instruction.period().map(Quantity::span),
                Some(Span::new(32, 40))
            );
        }

        #[test]
        fn lower_case_action() {
            let (_, instruction) =
                parse_complete(span("discharge at 2 W for 1 minute")).expect("should parse");
            assert_eq!(instruction.action(), Action::Discharge);
        }

        #[test]
        fn surrounding_whitespace() {
            let (_, instruction) =
                parse_complete(span("  Rest for 10 minutes  ")).expect("should parse");
            assert_eq!(instruction.action(), Action::Rest);
            assert_eq!(instruction.duration().map(Quantity::text), Some("10 minutes"));
        }

        #[test]
        fn partial_parse_leaves_rest() {
            let (rest, instruction) = parse(span("Rest for 1 hour; next")).expect("should parse");
            assert_eq!(instruction.action(), Action::Rest);
            assert_eq!(rest.fragment(), &"; next");
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn unknown_action() {
            let error = parse_error("Jump at 1 A for 1 hour");
            assert_eq!(error.reason, ParserErrorReason::Expect(ExpectKind::Action));
            assert_eq!(error.error_offset, 0);
        }

        #[test]
        fn strict_capitalization() {
            let input = InputSpan::new_extra("charge at 1 A for 1 hour", ParseConfig::strict());
            let Err(nom::Err::Error(error)) = parse_complete(input) else {
                panic!("strict parsing should reject a lower case action");
            };
            assert_eq!(error.reason, ParserErrorReason::Expect(ExpectKind::Action));
        }

        #[test]
        fn empty_input() {
            let error = parse_error("");
            assert_eq!(error.reason, ParserErrorReason::Expect(ExpectKind::Action));
        }

        #[test]
        fn run_is_rejected() {
            let error = parse_error("Run US06 (A) for 10 minutes");
            assert_eq!(error.reason, ParserErrorReason::RunNotSupported);
            assert_eq!(error.error_offset, 0);
        }

        #[test]
        fn missing_at() {
            let error = parse_error("Charge for 1 hour");
            assert_eq!(
                error.reason,
                ParserErrorReason::MissingValue {
                    action: Action::Charge
                }
            );
            assert_eq!(error.error_offset, 7);
        }

        #[test]
        fn at_without_value() {
            let error = parse_error("Discharge at for 1 hour");
            assert_eq!(
                error.reason,
                ParserErrorReason::Incomplete {
                    cause: Span::new(10, 12),
                    kind: IncompleteKind::AtMissingValue,
                }
            );
            assert_eq!(error.error_offset, 13);
        }

        #[test]
        fn for_without_duration() {
            let error = parse_error("Rest for");
            assert_eq!(
                error.reason,
                ParserErrorReason::Incomplete {
                    cause: Span::new(5, 8),
                    kind: IncompleteKind::ForMissingDuration,
                }
            );
            assert_eq!(error.error_offset, 8);
        }

        #[test]
        fn until_without_condition() {
            let error = parse_error("Hold at 4.1 V until");
            assert!(matches!(
                error.reason,
                ParserErrorReason::Incomplete {
                    kind: IncompleteKind::UntilMissingCondition,
                    ..
                }
            ));
        }

        #[test]
        fn or_without_condition() {
            let error = parse_error("Hold at 4.1 V until 50 mA or");
            assert!(matches!(
                error.reason,
                ParserErrorReason::Incomplete {
                    kind: IncompleteKind::OrMissingCondition,
                    ..
                }
            ));
        }

        #[test]
        fn neither_for_nor_until() {
            let error = parse_error("Discharge at 1 A");
            assert_eq!(error.reason, ParserErrorReason::MissingForOrUntil);
            assert_eq!(error.error_offset, 16);
        }

        #[test]
        fn inline_temperature() {
            let error = parse_error("Hold at 4.1 V until 25oC");
            assert_eq!(
                error.reason,
                ParserErrorReason::InlineTemperature {
                    span: Span::new(20, 24)
                }
            );
        }

        #[test]
        fn period_without_duration() {
            let error = parse_error("Rest for 1 hour (period)");
            assert!(matches!(
                error.reason,
                ParserErrorReason::Incomplete {
                    kind: IncompleteKind::PeriodMissingDuration,
                    ..
                }
            ));
        }

        #[test]
        fn period_without_keyword() {
            let error = parse_error("Rest for 1 hour (1 minute)");
            assert!(matches!(
                error.reason,
                ParserErrorReason::Incomplete {
                    kind: IncompleteKind::PeriodMissingKeyword,
                    ..
                }
            ));
            assert_eq!(error.error_offset, 25);
        }

        #[test]
        fn unclosed_period() {
            let error = parse_error("Rest for 1 hour (1 minute period");
            assert_eq!(
                error.reason,
                ParserErrorReason::Incomplete {
                    cause: Span::new(16, 17),
                    kind: IncompleteKind::UnclosedParen,
                }
            );
        }

        #[test]
        fn trailing_input() {
            let error = parse_error("Rest for 1 hour please");
            assert_eq!(error.reason, ParserErrorReason::UnexpectedToken);
            assert_eq!(error.error_offset, 16);
        }

        #[test]
        fn value_without_unit() {
            let error = parse_error("Discharge at 1 for 1 hour");
            assert_eq!(error.reason, ParserErrorReason::Expect(ExpectKind::Quantity));
            assert_eq!(error.error_offset, 13);
        }

        #[test]
        fn duration_without_unit() {
            let error = parse_error("Rest for 10 or until 3 V");
            assert_eq!(error.reason, ParserErrorReason::Expect(ExpectKind::Quantity));
            assert_eq!(error.error_offset, 9);
        }

        #[test]
        fn condition_without_unit() {
            let error = parse_error("Charge at 1 A until 4");
            assert_eq!(error.reason, ParserErrorReason::Expect(ExpectKind::Quantity));
            assert_eq!(error.error_offset, 20);
        }

        #[test]
        fn rest_with_value() {
            let error = parse_error("Rest at 1 A for 1 hour");
            assert_eq!(error.reason, ParserErrorReason::MissingForOrUntil);
            assert_eq!(error.error_offset, 5);
        }
    }
}
