//! The parsed form of an instruction.

use std::fmt;

use crate::span::Span;

/// What an instruction asks the cycler to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw a positive current, voltage, power or C-rate
    Discharge,
    /// The same as [`Action::Discharge`] with the sign flipped
    Charge,
    /// Hold a value, usually a voltage
    Hold,
    /// Draw no current
    Rest,
}

impl Action {
    /// All actions, in the order they are matched.
    pub const ALL: [Self; 4] = [Self::Discharge, Self::Charge, Self::Hold, Self::Rest];

    /// Returns the action as written in an instruction
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discharge => "Discharge",
            Self::Charge => "Charge",
            Self::Hold => "Hold",
            Self::Rest => "Rest",
        }
    }

    /// Looks up the action named by `word`.
    ///
    /// Unless `strict` is set, the first letter may be in either case.
    #[must_use]
    pub fn from_word(word: &str, strict: bool) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| word_matches(word, action.as_str(), strict))
    }

    /// Returns `true` for actions that need an `at <value>` clause
    #[must_use]
    pub const fn takes_value(self) -> bool {
        !matches!(self, Self::Rest)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub(crate) fn word_matches(word: &str, name: &str, strict: bool) -> bool {
    if strict {
        return word == name;
    }

    let mut word_chars = word.chars();
    let mut name_chars = name.chars();
    match (word_chars.next(), name_chars.next()) {
        (Some(first), Some(expected)) => {
            first.eq_ignore_ascii_case(&expected) && word_chars.as_str() == name_chars.as_str()
        }
        _ => false,
    }
}

/// A value as written in an instruction, e.g. `1 A`, `0.5 hours` or `C/2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantity {
    text: String,
    span: Span,
}

impl Quantity {
    /// Creates a quantity from its text and source span
    #[must_use]
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    /// Returns the quantity as written
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns where the quantity appears in the instruction
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns the unit suffix, or the whole text for a `C/<divisor>` rate
    #[must_use]
    pub fn unit(&self) -> &str {
        self.text
            .trim_start_matches(|c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | ' '))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A parsed instruction.
///
/// A `Rest` instruction never has a value; every other action always has
/// one. At least one of `duration` and `terminations` is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    action: Action,
    action_span: Span,
    value: Option<Quantity>,
    duration: Option<Quantity>,
    terminations: Vec<Quantity>,
    period: Option<Quantity>,
}

impl Instruction {
    pub(crate) const fn new(
        action: Action,
        action_span: Span,
        value: Option<Quantity>,
        duration: Option<Quantity>,
        terminations: Vec<Quantity>,
        period: Option<Quantity>,
    ) -> Self {
        Self {
            action,
            action_span,
            value,
            duration,
            terminations,
            period,
        }
    }

    /// Returns the action
    #[must_use]
    pub const fn action(&self) -> Action {
        self.action
    }

    /// Returns where the action appears in the instruction
    #[must_use]
    pub const fn action_span(&self) -> Span {
        self.action_span
    }

    /// Returns the value after `at`
    #[must_use]
    pub const fn value(&self) -> Option<&Quantity> {
        self.value.as_ref()
    }

    /// Returns the duration after `for`
    #[must_use]
    pub const fn duration(&self) -> Option<&Quantity> {
        self.duration.as_ref()
    }

    /// Returns the conditions after `until`, in the order written
    #[must_use]
    pub fn terminations(&self) -> &[Quantity] {
        &self.terminations
    }

    /// Returns the duration inside `( ... period)`
    #[must_use]
    pub const fn period(&self) -> Option<&Quantity> {
        self.period.as_ref()
    }
}
