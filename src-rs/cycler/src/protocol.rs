//! Turning a protocol file into steps
//!
//! A protocol holds one instruction per line. Blank lines and lines starting
//! with `#` are skipped.

use cycler_error::{AsCyclerError, CyclerError, ErrorLocation};
use cycler_step::{Step, StepBuilder, StepError};

/// Options applied to every step of a protocol
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepDefaults {
    pub period: Option<String>,
    pub temperature: Option<String>,
    pub tags: Vec<String>,
}

/// An instruction together with where it sits in the protocol file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionLine<'a> {
    /// Byte offset of `text` from the start of the file
    pub offset: usize,
    /// The instruction with surrounding whitespace removed
    pub text: &'a str,
}

/// Collects the instruction lines of a protocol.
pub fn instruction_lines(source: &str) -> Vec<InstructionLine<'_>> {
    let mut lines = Vec::new();
    let mut line_start = 0;

    for line in source.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let text = trimmed.trim_end();
        let offset = line_start + (line.len() - trimmed.len());
        line_start += line.len();

        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        lines.push(InstructionLine { offset, text });
    }

    lines
}

/// Builds the step for a single instruction, applying `defaults`.
///
/// # Errors
///
/// Returns the first parse, conversion, or validation failure.
pub fn build_step(line: &InstructionLine<'_>, defaults: &StepDefaults) -> Result<Step, StepError> {
    let mut builder = StepBuilder::from_instruction(line.text)?.tags(&defaults.tags);

    if let Some(period) = &defaults.period {
        builder = builder.period(period.as_str());
    }
    if let Some(temperature) = &defaults.temperature {
        builder = builder.temperature(temperature.as_str());
    }

    builder.build()
}

/// Builds every instruction of a protocol, in file order.
///
/// Failures are resolved against the whole file so that their locations
/// name the right line.
pub fn parse_protocol(
    source: &str,
    origin: &str,
    defaults: &StepDefaults,
) -> Vec<Result<Step, CyclerError>> {
    instruction_lines(source)
        .iter()
        .map(|line| {
            build_step(line, defaults).map_err(|error| to_cycler_error(&error, origin, source, line))
        })
        .collect()
}

fn to_cycler_error(
    error: &StepError,
    origin: &str,
    source: &str,
    line: &InstructionLine<'_>,
) -> CyclerError {
    // errors without a location highlight the whole instruction
    let location = error.error_location(line.text).map_or_else(
        || ErrorLocation::from_source_and_span(source, line.offset, line.text.len()),
        |location| {
            ErrorLocation::from_source_and_span(
                source,
                line.offset + location.offset(),
                location.length(),
            )
        },
    );

    CyclerError::from_error(error, origin).with_location(Some(location))
}
