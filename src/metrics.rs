//! Scoring metric wrapper and default scoring resolution.

use crate::error::{Result, ValidationError};

/// A named scoring function over aligned actual and predicted values.
///
/// This is the metric-wrapper abstraction the scoring resolver recognizes;
/// the full metric catalogue lives outside this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    name: &'static str,
    func: fn(&[f64], &[f64]) -> f64,
    greater_is_better: bool,
}

impl Metric {
    /// Wrap a scoring function.
    pub fn new(name: &'static str, func: fn(&[f64], &[f64]) -> f64, greater_is_better: bool) -> Self {
        Self {
            name,
            func,
            greater_is_better,
        }
    }

    /// The default metric: symmetric mean absolute percentage error.
    pub fn smape() -> Self {
        Self::new("sMAPE", smape, false)
    }

    /// Display name of the metric.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether larger scores indicate better forecasts.
    pub fn greater_is_better(&self) -> bool {
        self.greater_is_better
    }

    /// Score predictions against actual values.
    pub fn evaluate(&self, actual: &[f64], predicted: &[f64]) -> Result<f64> {
        if actual.is_empty() {
            return Err(ValidationError::EmptySeries {
                name: "actual".to_string(),
            });
        }
        if actual.len() != predicted.len() {
            return Err(ValidationError::DimensionMismatch {
                expected: actual.len(),
                got: predicted.len(),
            });
        }
        Ok((self.func)(actual, predicted))
    }
}

/// Symmetric mean absolute percentage error, in percent.
///
/// Pairs where both values are zero contribute zero error.
pub fn smape(actual: &[f64], predicted: &[f64]) -> f64 {
    let n = actual.len() as f64;
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| {
            let denom = a.abs() + p.abs();
            if denom == 0.0 {
                0.0
            } else {
                2.0 * (a - p).abs() / denom
            }
        })
        .sum::<f64>()
        * 100.0
        / n
}

/// Resolve the scoring metric to use for model evaluation.
///
/// Returns the default symmetric MAPE metric when none is supplied,
/// otherwise the supplied wrapper unchanged.
pub fn check_scoring(scoring: Option<Metric>) -> Result<Metric> {
    Ok(scoring.unwrap_or_else(Metric::smape))
}
