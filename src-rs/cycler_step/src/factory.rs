//! Step factories.
//!
//! Each factory returns a [`StepBuilder`] of the matching kind, so further
//! options can be chained before calling [`StepBuilder::build`].

use cycler_parser::{Action, Instruction, ParseConfig, Quantity, parse_instruction};
use cycler_units::{ConvertError, RawQuantity, convert_electric, parse_time};

use crate::{StepBuilder, error::StepError, input::StepInput, kind::StepKind};

/// A current step, in amperes. Positive values discharge.
pub fn current(value: impl Into<StepInput>) -> StepBuilder {
    StepBuilder::new(StepKind::Current, value)
}

/// A C-rate step. Positive values discharge.
pub fn c_rate(value: impl Into<StepInput>) -> StepBuilder {
    StepBuilder::new(StepKind::CRate, value)
}

/// A voltage step, in volts.
pub fn voltage(value: impl Into<StepInput>) -> StepBuilder {
    StepBuilder::new(StepKind::Voltage, value)
}

/// A power step, in watts. Positive values discharge.
pub fn power(value: impl Into<StepInput>) -> StepBuilder {
    StepBuilder::new(StepKind::Power, value)
}

/// A resistance step, in ohms.
pub fn resistance(value: impl Into<StepInput>) -> StepBuilder {
    StepBuilder::new(StepKind::Resistance, value)
}

/// A rest step: no current for `duration`.
pub fn rest(duration: impl Into<RawQuantity>) -> StepBuilder {
    StepBuilder::new(StepKind::Rest, 0.0).duration(duration)
}

/// A constant-current constant-voltage step.
pub fn cccv(current: f64, voltage: f64) -> StepBuilder {
    StepBuilder::new(StepKind::Cccv, (current, voltage))
}

/// A step described by an instruction such as `"Discharge at 1C for 1 hour"`.
///
/// The instruction becomes the description of the step.
///
/// # Errors
///
/// Returns a parse error if the instruction does not follow the grammar, and
/// a conversion error, located at the offending quantity, if a value,
/// duration, condition or period has an unknown unit or a malformed number.
pub fn string(text: &str) -> Result<StepBuilder, StepError> {
    from_instruction(text, None)
}

pub(crate) fn from_instruction(
    text: &str,
    config: Option<ParseConfig>,
) -> Result<StepBuilder, StepError> {
    let instruction = parse_instruction(text, config)?;
    tracing::trace!(?instruction, "parsed instruction");
    from_parsed(text, &instruction)
}

fn from_parsed(text: &str, instruction: &Instruction) -> Result<StepBuilder, StepError> {
    let mut builder = match (instruction.action(), instruction.value()) {
        (Action::Rest, _) | (_, None) => StepBuilder::new(StepKind::Rest, 0.0),
        (action @ (Action::Discharge | Action::Charge | Action::Hold), Some(value)) => {
            let (kind, magnitude) = located(value, convert_electric)?;
            let sign = if action == Action::Charge { -1.0 } else { 1.0 };
            StepBuilder::new(StepKind::from(kind), sign * magnitude)
        }
    };

    if let Some(duration) = instruction.duration() {
        located(duration, parse_time)?;
        builder = builder.duration(duration.text());
    }

    for condition in instruction.terminations() {
        located(condition, convert_electric)?;
        builder = builder.termination(condition.text());
    }

    if let Some(period) = instruction.period() {
        located(period, parse_time)?;
        builder = builder.instruction_period(RawQuantity::from(period.text()), period.span());
    }

    Ok(builder.description(text))
}

/// Runs `convert` on a quantity, attaching the quantity's span to failures.
fn located<T>(
    quantity: &Quantity,
    convert: impl Fn(&str) -> Result<T, ConvertError>,
) -> Result<T, StepError> {
    convert(quantity.text()).map_err(|source| StepError::InvalidQuantity {
        span: quantity.span(),
        source,
    })
}
