//! Raw step values as given to the factories.

use std::fmt;

use ndarray::Array2;

/// The raw value of a step, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum StepInput {
    /// A single value
    Scalar(f64),
    /// A `(current, voltage)` pair for CCCV steps
    Pair(f64, f64),
    /// A drive cycle: one `[time, value]` row per sample
    Table(Array2<f64>),
}

impl From<f64> for StepInput {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<i32> for StepInput {
    fn from(value: i32) -> Self {
        Self::Scalar(f64::from(value))
    }
}

impl From<(f64, f64)> for StepInput {
    fn from((first, second): (f64, f64)) -> Self {
        Self::Pair(first, second)
    }
}

impl From<Array2<f64>> for StepInput {
    fn from(table: Array2<f64>) -> Self {
        Self::Table(table)
    }
}

impl fmt::Display for StepInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => write!(f, "{value}"),
            Self::Pair(first, second) => write!(f, "({first}, {second})"),
            Self::Table(table) => {
                write!(f, "[")?;
                for (index, row) in table.rows().into_iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "[")?;
                    for (column, value) in row.iter().enumerate() {
                        if column > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{value}")?;
                    }
                    write!(f, "]")?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn display() {
        assert_eq!(StepInput::from(1.0).to_string(), "1");
        assert_eq!(StepInput::from((1.5, 4.2)).to_string(), "(1.5, 4.2)");
        assert_eq!(
            StepInput::from(array![[0.0, 1.0], [2.5, -1.0]]).to_string(),
            "[[0, 1], [2.5, -1]]"
        );
    }
}
