//! The step descriptor.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::{
    drive_cycle::Interpolant,
    kind::{StepKind, Termination},
};

/// The normalized value of a step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StepValue {
    /// A single value in the unit of the step kind
    Scalar(f64),
    /// A `(current, voltage)` pair for CCCV steps
    Pair(f64, f64),
    /// A signal that follows a drive cycle
    DriveCycle(Interpolant),
}

impl StepValue {
    /// Returns the drive cycle, if the value is one
    #[must_use]
    pub const fn as_drive_cycle(&self) -> Option<&Interpolant> {
        match self {
            Self::DriveCycle(interpolant) => Some(interpolant),
            Self::Scalar(_) | Self::Pair(..) => None,
        }
    }
}

/// One operation of an experiment.
///
/// Steps are created with a [`StepBuilder`](crate::StepBuilder). After that
/// they are immutable, except for the two scheduler timestamps.
#[derive(Debug, Clone)]
pub struct Step {
    pub(crate) kind: StepKind,
    pub(crate) value: StepValue,
    pub(crate) duration: Option<f64>,
    pub(crate) termination: Vec<Termination>,
    pub(crate) period: Option<f64>,
    pub(crate) temperature: Option<f64>,
    pub(crate) tags: Vec<String>,
    pub(crate) timestamp: Option<NaiveDateTime>,
    pub(crate) description: Option<String>,
    pub(crate) next_timestamp: Option<NaiveDateTime>,
    pub(crate) end_timestamp: Option<NaiveDateTime>,
    pub(crate) trace: String,
}

impl Step {
    /// Returns what the step controls
    #[must_use]
    pub const fn kind(&self) -> StepKind {
        self.kind
    }

    /// Returns the normalized value
    #[must_use]
    pub const fn value(&self) -> &StepValue {
        &self.value
    }

    /// Returns `true` if the value follows a drive cycle
    #[must_use]
    pub const fn is_drive_cycle(&self) -> bool {
        self.value.as_drive_cycle().is_some()
    }

    /// Returns the duration in seconds
    #[must_use]
    pub const fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Returns the conditions that end the step early. Any one of them ends
    /// the step.
    #[must_use]
    pub fn termination(&self) -> &[Termination] {
        &self.termination
    }

    /// Returns the output period in seconds
    #[must_use]
    pub const fn period(&self) -> Option<f64> {
        self.period
    }

    /// Returns the ambient temperature in Kelvin
    #[must_use]
    pub const fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    /// Returns the tags
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the time at which the step is scheduled to start
    #[must_use]
    pub const fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    /// Returns the description
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the unit of the value, e.g. `[V]` for voltage steps
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        self.kind.unit()
    }

    /// Returns the argument trace, e.g. `Step(current, 1, duration=1 hour)`.
    ///
    /// The trace lists the arguments the step was built from, as given,
    /// leaving out the ones that were not set.
    #[must_use]
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// Returns the start time of the following step, once scheduled
    #[must_use]
    pub const fn next_timestamp(&self) -> Option<NaiveDateTime> {
        self.next_timestamp
    }

    /// Returns the time by which the step must end, once scheduled
    #[must_use]
    pub const fn end_timestamp(&self) -> Option<NaiveDateTime> {
        self.end_timestamp
    }

    /// Records the start time of the following step
    pub const fn set_next_timestamp(&mut self, timestamp: Option<NaiveDateTime>) {
        self.next_timestamp = timestamp;
    }

    /// Records the time by which the step must end
    pub const fn set_end_timestamp(&mut self, timestamp: Option<NaiveDateTime>) {
        self.end_timestamp = timestamp;
    }

    /// Projects the step onto its normalized fields.
    #[must_use]
    pub fn to_dict(&self) -> StepDict {
        StepDict {
            kind: self.kind,
            value: self.value.clone(),
            duration: self.duration,
            termination: self.termination.clone(),
            period: self.period,
            temperature: self.temperature,
            tags: self.tags.clone(),
            timestamp: self.timestamp,
            description: self.description.clone(),
        }
    }

    fn sorted_tags(&self) -> Vec<&String> {
        let mut tags = self.tags.iter().collect::<Vec<_>>();
        tags.sort_unstable();
        tags
    }
}

/// Steps are equal when their normalized fields are equal.
///
/// The trace and the scheduler timestamps are not compared, and tags are
/// compared regardless of order.
impl PartialEq for Step {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.value == other.value
            && self.duration == other.duration
            && self.termination == other.termination
            && self.period == other.period
            && self.temperature == other.temperature
            && self.timestamp == other.timestamp
            && self.description == other.description
            && self.sorted_tags() == other.sorted_tags()
    }
}

/// `build` rejects NaN, so every field compares equal to itself.
impl Eq for Step {}

/// Hashes the fields compared by `eq`, with tags in sorted order.
impl Hash for Step {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);

        std::mem::discriminant(&self.value).hash(state);
        match &self.value {
            StepValue::Scalar(value) => hash_f64(*value, state),
            StepValue::Pair(first, second) => {
                hash_f64(*first, state);
                hash_f64(*second, state);
            }
            StepValue::DriveCycle(interpolant) => {
                interpolant.input().hash(state);
                interpolant.times().len().hash(state);
                for (time, value) in interpolant.samples() {
                    hash_f64(time, state);
                    hash_f64(value, state);
                }
            }
        }

        hash_optional_f64(self.duration, state);

        self.termination.len().hash(state);
        for termination in &self.termination {
            termination.kind.hash(state);
            hash_f64(termination.value, state);
        }

        hash_optional_f64(self.period, state);
        hash_optional_f64(self.temperature, state);
        self.timestamp.hash(state);
        self.description.hash(state);
        self.sorted_tags().hash(state);
    }
}

/// `-0.0 == 0.0`, so both hash as `0.0`.
fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_bits().hash(state);
}

fn hash_optional_f64<H: Hasher>(value: Option<f64>, state: &mut H) {
    value.is_some().hash(state);
    if let Some(value) = value {
        hash_f64(value, state);
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{description}"),
            None => write!(f, "{}", self.trace),
        }
    }
}

/// The normalized fields of a [`Step`], for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepDict {
    /// What the step controls
    #[serde(rename = "type")]
    pub kind: StepKind,
    /// The normalized value
    pub value: StepValue,
    /// Duration in seconds
    pub duration: Option<f64>,
    /// Conditions that end the step early
    pub termination: Vec<Termination>,
    /// Output period in seconds
    pub period: Option<f64>,
    /// Ambient temperature in Kelvin
    pub temperature: Option<f64>,
    /// Tags
    pub tags: Vec<String>,
    /// Scheduled start time
    pub timestamp: Option<NaiveDateTime>,
    /// Description
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, hash::DefaultHasher};

    use ndarray::array;

    use super::*;
    use crate::{StepBuilder, current, string};

    fn hash_of(step: &Step) -> u64 {
        let mut hasher = DefaultHasher::new();
        step.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_steps_hash_alike() {
        let first = current(1.0)
            .duration("1 hour")
            .tags(["a", "b"])
            .build()
            .expect("should build");
        let second = current(1.0)
            .duration(3600)
            .tags(["b", "a"])
            .build()
            .expect("should build");

        assert_eq!(first, second);
        assert_eq!(hash_of(&first), hash_of(&second));
    }

    #[test]
    fn signed_zero_hashes_alike() {
        let charge = string("Charge at 0 A for 1 hour")
            .and_then(StepBuilder::build)
            .expect("should build");
        let hold = current(0.0)
            .duration("1 hour")
            .description("Charge at 0 A for 1 hour")
            .build()
            .expect("should build");

        assert_eq!(charge.value(), &StepValue::Scalar(-0.0));
        assert_eq!(charge, hold);
        assert_eq!(hash_of(&charge), hash_of(&hold));
    }

    #[test]
    fn hash_set_deduplicates() {
        let table = array![[0.0, 1.0], [10.0, 0.5]];
        let steps = [
            current(1.0).duration(60).build(),
            current(1.0).duration("1 minute").build(),
            current(1.0).duration(60).description("pulse").build(),
            StepBuilder::new(StepKind::Current, table.clone()).build(),
            StepBuilder::new(StepKind::Current, table).build(),
        ];

        let unique = steps
            .into_iter()
            .collect::<Result<HashSet<_>, _>>()
            .expect("should build every step");

        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn drive_cycle_flag() {
        let table = array![[0.0, 1.0], [10.0, 0.5]];
        let step = StepBuilder::new(StepKind::Power, table)
            .build()
            .expect("should build");

        assert!(step.is_drive_cycle());
        assert!(step.value().as_drive_cycle().is_some());
        assert!(!current(1.0).duration(1).build().expect("should build").is_drive_cycle());
    }
}
