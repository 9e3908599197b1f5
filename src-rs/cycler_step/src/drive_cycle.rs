//! Drive cycles: steps whose value follows a sampled time series.

use ndarray::ArrayView2;
use serde::Serialize;

use crate::error::StepError;

/// The name of the driver-owned input holding the time at which a drive
/// cycle step started.
pub const START_TIME_INPUT: &str = "start time";

/// A piecewise-linear signal over sampled times.
///
/// The signal is evaluated at the time elapsed since the step started. Before
/// the first sample and after the last one it holds the end values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interpolant {
    input: String,
    #[serde(rename = "time")]
    times: Vec<f64>,
    values: Vec<f64>,
}

impl Interpolant {
    /// Builds an interpolant from a table of `(time, value)` rows.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless the table has exactly two columns,
    /// at least two rows, and finite, strictly increasing times.
    pub fn from_table(table: ArrayView2<'_, f64>) -> Result<Self, StepError> {
        let (rows, columns) = table.dim();
        if columns != 2 {
            return Err(StepError::DriveCycleShape { rows, columns });
        }
        if rows < 2 {
            return Err(StepError::DriveCycleTooShort { rows });
        }

        let times = table.column(0).to_vec();
        let values = table.column(1).to_vec();

        if let Some(row) = times.iter().position(|time| !time.is_finite()) {
            return Err(StepError::DriveCycleTimes { row });
        }
        if let Some(index) = times.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(StepError::DriveCycleTimes { row: index + 1 });
        }

        Ok(Self {
            input: START_TIME_INPUT.to_string(),
            times,
            values,
        })
    }

    /// Returns the name of the elapsed-time input
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the sample times
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the sampled values
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the latest sample time, which is the step duration
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.times.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns the smallest spacing between consecutive samples
    #[must_use]
    pub fn period(&self) -> f64 {
        self.times
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .fold(f64::INFINITY, f64::min)
    }

    /// Evaluates the signal at time `t` for a step that started at
    /// `start_time`.
    #[must_use]
    pub fn evaluate(&self, t: f64, start_time: f64) -> f64 {
        let elapsed = t - start_time;
        if elapsed.is_nan() {
            return f64::NAN;
        }

        // `from_table` guarantees at least two samples
        let (Some(&first_time), Some(&last_time)) = (self.times.first(), self.times.last()) else {
            return f64::NAN;
        };
        let (Some(&first_value), Some(&last_value)) = (self.values.first(), self.values.last())
        else {
            return f64::NAN;
        };

        if elapsed <= first_time {
            return first_value;
        }
        if elapsed >= last_time {
            return last_value;
        }

        // index of the first sample after `elapsed`
        let upper = self.times.partition_point(|time| *time <= elapsed);
        let (t0, t1) = (self.times[upper - 1], self.times[upper]);
        let (y0, y1) = (self.values[upper - 1], self.values[upper]);

        let fraction = (elapsed - t0) / (t1 - t0);
        fraction.mul_add(y1 - y0, y0)
    }

    /// Returns the samples as `(time, value)` pairs
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    fn cycle() -> Interpolant {
        let table = array![[0.0, 1.0], [1.0, 1.0], [2.0, 1.0], [5.0, 1.0]];
        Interpolant::from_table(table.view()).expect("should accept a valid drive cycle")
    }

    mod success_tests {
        use super::*;

        #[test]
        fn duration_and_period() {
            let interpolant = cycle();
            assert_eq!(interpolant.duration(), 5.0);
            assert_eq!(interpolant.period(), 1.0);
            assert_eq!(interpolant.input(), START_TIME_INPUT);
        }

        #[test]
        fn evaluate_interpolates_linearly() {
            let table = array![[0.0, 0.0], [10.0, 2.0], [20.0, -2.0]];
            let interpolant =
                Interpolant::from_table(table.view()).expect("should accept a valid drive cycle");

            assert!((interpolant.evaluate(5.0, 0.0) - 1.0).abs() < 1e-12);
            assert!((interpolant.evaluate(15.0, 0.0) - 0.0).abs() < 1e-12);
            assert!((interpolant.evaluate(110.0, 100.0) - 2.0).abs() < 1e-12);
        }

        #[test]
        fn evaluate_holds_end_values() {
            let table = array![[0.0, 3.0], [10.0, 4.0]];
            let interpolant =
                Interpolant::from_table(table.view()).expect("should accept a valid drive cycle");

            assert_eq!(interpolant.evaluate(-5.0, 0.0), 3.0);
            assert_eq!(interpolant.evaluate(50.0, 0.0), 4.0);
            assert_eq!(interpolant.evaluate(10.0, 0.0), 4.0);
        }

        #[test]
        fn samples_pair_times_with_values() {
            let samples = cycle().samples().collect::<Vec<_>>();
            assert_eq!(samples[3], (5.0, 1.0));
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn three_columns() {
            let table = array![[0.0, 1.0, 2.0], [1.0, 1.0, 2.0]];
            let error = Interpolant::from_table(table.view()).expect_err("should reject 3 columns");
            assert_eq!(error, StepError::DriveCycleShape { rows: 2, columns: 3 });
        }

        #[test]
        fn single_row() {
            let table = array![[0.0, 1.0]];
            let error = Interpolant::from_table(table.view()).expect_err("should reject one row");
            assert_eq!(error, StepError::DriveCycleTooShort { rows: 1 });
        }

        #[test]
        fn repeated_time() {
            let table = array![[0.0, 1.0], [1.0, 1.0], [1.0, 2.0]];
            let error =
                Interpolant::from_table(table.view()).expect_err("should reject repeated times");
            assert_eq!(error, StepError::DriveCycleTimes { row: 2 });
        }

        #[test]
        fn non_finite_time() {
            let table = array![[0.0, 1.0], [f64::NAN, 1.0]];
            let error = Interpolant::from_table(table.view()).expect_err("should reject NaN");
            assert_eq!(error, StepError::DriveCycleTimes { row: 1 });
        }
    }
}
