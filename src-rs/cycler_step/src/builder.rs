//! Building steps from raw arguments.

use cycler_parser::{ParseConfig, Span};
use cycler_units::{
    RawQuantity, RawTimestamp, convert_temperature, convert_time, parse_timestamp,
};

use crate::{
    drive_cycle::Interpolant,
    error::StepError,
    input::StepInput,
    kind::{StepKind, Termination},
    step::{Step, StepValue},
};

/// Collects the raw arguments of a step.
///
/// Setters take the values as a user would write them; [`StepBuilder::build`]
/// converts and validates all of them at once.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct StepBuilder {
    kind: StepKind,
    value: StepInput,
    duration: Option<RawQuantity>,
    terminations: Vec<String>,
    period: Option<RawQuantity>,
    instruction_period: Option<(RawQuantity, Span)>,
    temperature: Option<RawQuantity>,
    tags: Vec<String>,
    timestamp: Option<RawTimestamp>,
    description: Option<String>,
}

impl StepBuilder {
    /// Starts a step of `kind` with the given value.
    pub fn new(kind: StepKind, value: impl Into<StepInput>) -> Self {
        Self {
            kind,
            value: value.into(),
            duration: None,
            terminations: Vec::new(),
            period: None,
            instruction_period: None,
            temperature: None,
            tags: Vec::new(),
            timestamp: None,
            description: None,
        }
    }

    /// Sets the duration, in seconds or as text such as `"1 hour"`.
    ///
    /// Ignored for drive cycles, whose duration is their last sample time.
    pub fn duration(mut self, duration: impl Into<RawQuantity>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Adds a termination condition such as `"4.1 V"`.
    pub fn termination(mut self, termination: impl Into<String>) -> Self {
        self.terminations.push(termination.into());
        self
    }

    /// Adds several termination conditions.
    pub fn terminations<I, S>(mut self, terminations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terminations
            .extend(terminations.into_iter().map(Into::into));
        self
    }

    /// Sets the output period, in seconds or as text such as `"1 minute"`.
    ///
    /// Ignored for drive cycles, whose period is their smallest sample
    /// spacing.
    pub fn period(mut self, period: impl Into<RawQuantity>) -> Self {
        self.period = Some(period.into());
        self
    }

    /// Sets the period given by the `( ... period)` clause of an instruction.
    pub(crate) fn instruction_period(mut self, period: RawQuantity, span: Span) -> Self {
        self.instruction_period = Some((period, span));
        self
    }

    /// Sets the temperature, in Kelvin or as text such as `"25oC"`.
    pub fn temperature(mut self, temperature: impl Into<RawQuantity>) -> Self {
        self.temperature = Some(temperature.into());
        self
    }

    /// Adds a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Adds several tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Sets the scheduled start time, as a `chrono::NaiveDateTime` or as text
    /// such as `"Day 1 08:00"`.
    pub fn timestamp(mut self, timestamp: impl Into<RawTimestamp>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Sets the description, which replaces the trace when the step is
    /// displayed.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Starts a step from an instruction such as `"Hold at 4.1 V until 50 mA"`.
    ///
    /// Equivalent to [`string`](crate::string).
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed instructions and a located
    /// conversion error for quantities with unknown units.
    pub fn from_instruction(text: &str) -> Result<Self, StepError> {
        crate::factory::from_instruction(text, None)
    }

    /// Like [`StepBuilder::from_instruction`], with parser options.
    ///
    /// # Errors
    ///
    /// See [`StepBuilder::from_instruction`].
    pub fn from_instruction_with_config(
        text: &str,
        config: ParseConfig,
    ) -> Result<Self, StepError> {
        crate::factory::from_instruction(text, Some(config))
    }

    /// Returns the kind of step being built
    #[must_use]
    pub const fn kind(&self) -> StepKind {
        self.kind
    }

    /// Returns the argument trace the built step will carry.
    #[must_use]
    pub fn trace(&self) -> String {
        let mut arguments = vec![self.kind.to_string(), self.value.to_string()];

        if let Some(duration) = self.duration.as_ref().filter(|raw| !is_blank(raw)) {
            arguments.push(format!("duration={duration}"));
        }
        if !self.terminations.is_empty() {
            arguments.push(format!("termination={}", quoted_list(&self.terminations)));
        }
        if let Some(period) = self.effective_period().filter(|raw| !is_blank(raw)) {
            arguments.push(format!("period={period}"));
        }
        if let Some(temperature) = self.temperature.as_ref().filter(|raw| !is_blank(raw)) {
            arguments.push(format!("temperature={temperature}"));
        }
        if !self.tags.is_empty() {
            arguments.push(format!("tags={}", quoted_list(&self.tags)));
        }
        if let Some(timestamp) = &self.timestamp {
            arguments.push(format!("timestamp={timestamp}"));
        }
        if let Some(description) = self.description.as_ref().filter(|text| !text.is_empty()) {
            arguments.push(format!("description={description}"));
        }

        format!("Step({})", arguments.join(", "))
    }

    fn effective_period(&self) -> Option<&RawQuantity> {
        self.period
            .as_ref()
            .or(self.instruction_period.as_ref().map(|(period, _)| period))
    }

    /// Converts and validates every field, then assembles the step.
    ///
    /// # Errors
    ///
    /// Returns the first conversion or validation failure. Nothing is
    /// assembled unless every field converts.
    pub fn build(self) -> Result<Step, StepError> {
        let trace = self.trace();

        let period = match (&self.period, &self.instruction_period) {
            (Some(_), Some((_, span))) => {
                return Err(StepError::PeriodSpecifiedTwice { span: Some(*span) });
            }
            (Some(period), None) | (None, Some((period, _))) => Some(period),
            (None, None) => None,
        };

        let (value, duration, period) = match &self.value {
            StepInput::Table(table) => {
                let interpolant = Interpolant::from_table(table.view())?;
                let duration = interpolant.duration();
                let period = interpolant.period();
                tracing::trace!(duration, period, "derived drive cycle duration and period");
                (StepValue::DriveCycle(interpolant), Some(duration), Some(period))
            }
            StepInput::Scalar(value) => (
                StepValue::Scalar(*value),
                convert_time(self.duration.as_ref())?,
                convert_time(period)?,
            ),
            StepInput::Pair(first, second) => (
                StepValue::Pair(*first, *second),
                convert_time(self.duration.as_ref())?,
                convert_time(period)?,
            ),
        };

        let termination = self
            .terminations
            .iter()
            .map(|text| Termination::parse(text))
            .collect::<Result<Vec<_>, _>>()?;

        let temperature = convert_temperature(self.temperature.as_ref())?;
        let timestamp = parse_timestamp(self.timestamp.as_ref())?;

        reject_nan("value", value_numbers(&value))?;
        reject_nan("duration", duration)?;
        reject_nan("period", period)?;
        reject_nan("temperature", temperature)?;

        let step = Step {
            kind: self.kind,
            value,
            duration,
            termination,
            period,
            temperature,
            tags: self.tags,
            timestamp,
            description: self.description,
            next_timestamp: None,
            end_timestamp: None,
            trace,
        };

        tracing::debug!(step = %step.trace, "built experiment step");

        Ok(step)
    }
}

fn value_numbers(value: &StepValue) -> Vec<f64> {
    match value {
        StepValue::Scalar(value) => vec![*value],
        StepValue::Pair(first, second) => vec![*first, *second],
        StepValue::DriveCycle(interpolant) => interpolant.values().to_vec(),
    }
}

fn reject_nan(
    field: &'static str,
    values: impl IntoIterator<Item = f64>,
) -> Result<(), StepError> {
    if values.into_iter().any(f64::is_nan) {
        return Err(StepError::NotANumber { field });
    }
    Ok(())
}

/// Zero and empty text are left out of the trace.
fn is_blank(raw: &RawQuantity) -> bool {
    match raw {
        RawQuantity::Number(value) => *value == 0.0,
        RawQuantity::Text(text) => text.is_empty(),
    }
}

fn quoted_list(items: &[String]) -> String {
    let quoted = items
        .iter()
        .map(|item| format!("\"{item}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{quoted}]")
}
