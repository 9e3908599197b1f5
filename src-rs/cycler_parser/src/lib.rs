#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Parser for free-text battery experiment instructions

mod ast;
mod config;
pub mod error;
mod instruction;
mod span;
mod token;

mod util;
use util::{InputSpan, Result as InternalResult};

pub use ast::{Action, Instruction, Quantity};
pub use config::ParseConfig;
pub use span::Span;

/// Parses a single instruction such as `Discharge at 1C for 10 hours`.
///
/// # Errors
///
/// Returns an error if the instruction does not follow the grammar, names an
/// unknown action, is missing `for` and `until`, gives a temperature inline,
/// or has trailing input.
///
/// # Examples
///
/// ```rust
/// use cycler_parser::{Action, parse_instruction};
///
/// let instruction = parse_instruction("Hold at 4.2 V until C/50", None).unwrap();
/// assert_eq!(instruction.action(), Action::Hold);
/// assert_eq!(instruction.value().map(|value| value.text()), Some("4.2 V"));
/// assert_eq!(instruction.terminations()[0].text(), "C/50");
/// ```
pub fn parse_instruction(
    input: &str,
    config: Option<ParseConfig>,
) -> Result<Instruction, error::ParserError> {
    parse(input, config, instruction::parse_complete)
}

fn parse<T, E>(
    input: &str,
    config: Option<ParseConfig>,
    parser: impl Fn(InputSpan<'_>) -> InternalResult<'_, T, E>,
) -> Result<T, E> {
    let config = config.unwrap_or_default();
    let input = InputSpan::new_extra(input, config);
    let result = parser(input);

    match result {
        Ok((_rest, ast)) => Ok(ast),
        Err(nom::Err::Incomplete(_needed)) => unreachable!(
            "This should never happen because we use `complete` combinators rather than `stream` combinators"
        ),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e),
    }
}
