//! Forecasting horizon normalization.

use std::collections::HashSet;

use ndarray::{Array1, ArrayD};

use crate::error::{Result, ValidationError};

/// A forecasting horizon specification as supplied by the caller, before
/// normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum HorizonInput {
    /// A single step ahead.
    Scalar(i64),
    /// An explicit list of integer steps.
    List(Vec<i64>),
    /// An integer array of any dimensionality; must be 1-d.
    Array(ArrayD<i64>),
    /// A float array from a generic numeric pipeline; the element kind is
    /// not integral and is rejected.
    FloatArray(ArrayD<f64>),
}

impl From<i64> for HorizonInput {
    fn from(step: i64) -> Self {
        Self::Scalar(step)
    }
}

impl From<Vec<i64>> for HorizonInput {
    fn from(steps: Vec<i64>) -> Self {
        Self::List(steps)
    }
}

impl From<&[i64]> for HorizonInput {
    fn from(steps: &[i64]) -> Self {
        Self::List(steps.to_vec())
    }
}

impl From<ArrayD<i64>> for HorizonInput {
    fn from(steps: ArrayD<i64>) -> Self {
        Self::Array(steps)
    }
}

impl From<Array1<i64>> for HorizonInput {
    fn from(steps: Array1<i64>) -> Self {
        Self::Array(steps.into_dyn())
    }
}

impl From<ArrayD<f64>> for HorizonInput {
    fn from(steps: ArrayD<f64>) -> Self {
        Self::FloatArray(steps)
    }
}

/// A canonical forecasting horizon: sorted ascending, duplicate-free
/// integer steps. Steps may be zero or negative; callers interpret those
/// as in-sample or relative offsets.
///
/// Constructed by [`check_fh`]; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastingHorizon {
    steps: Vec<i64>,
}

impl ForecastingHorizon {
    /// The steps in ascending order.
    pub fn steps(&self) -> &[i64] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// A horizon is never empty once validated.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Smallest step.
    pub fn min(&self) -> i64 {
        self.steps[0]
    }

    /// Largest step.
    pub fn max(&self) -> i64 {
        self.steps[self.steps.len() - 1]
    }

    /// Iterate over the steps in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.steps.iter().copied()
    }

    /// Consume the horizon, yielding its steps.
    pub fn into_steps(self) -> Vec<i64> {
        self.steps
    }
}

/// Normalize a forecasting horizon specification.
///
/// A scalar becomes a one-element sequence; arrays must be 1-dimensional
/// and of integral kind; the result must be non-empty and free of
/// duplicates (duplicate input is rejected, never silently dedupped). On
/// success the steps are returned sorted ascending. Normalizing an already
/// canonical sequence returns an equal horizon.
///
/// # Example
///
/// ```
/// use forecast_guard::check::check_fh;
///
/// let fh = check_fh(vec![3i64, 1, 2]).unwrap();
/// assert_eq!(fh.steps(), &[1, 2, 3]);
///
/// let fh = check_fh(4i64).unwrap();
/// assert_eq!(fh.steps(), &[4]);
///
/// assert!(check_fh(vec![1i64, 1, 2]).is_err());
/// ```
pub fn check_fh(fh: impl Into<HorizonInput>) -> Result<ForecastingHorizon> {
    let mut steps = match fh.into() {
        HorizonInput::Scalar(step) => vec![step],
        HorizonInput::List(steps) => steps,
        HorizonInput::Array(array) => {
            if array.ndim() != 1 {
                return Err(ValidationError::WrongDimension {
                    param: "fh",
                    ndim: array.ndim(),
                });
            }
            array.iter().copied().collect()
        }
        HorizonInput::FloatArray(array) => {
            if array.ndim() != 1 {
                return Err(ValidationError::WrongDimension {
                    param: "fh",
                    ndim: array.ndim(),
                });
            }
            return Err(ValidationError::NonIntegerHorizon {
                found: "an array of f64".to_string(),
            });
        }
    };

    if steps.is_empty() {
        return Err(ValidationError::EmptyHorizon);
    }

    let unique: HashSet<i64> = steps.iter().copied().collect();
    if unique.len() != steps.len() {
        return Err(ValidationError::DuplicateHorizonSteps { steps });
    }

    steps.sort_unstable();
    Ok(ForecastingHorizon { steps })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn scalar_becomes_one_element_horizon() {
        let fh = check_fh(7i64).unwrap();
        assert_eq!(fh.steps(), &[7]);
        assert_eq!(fh.len(), 1);
        assert_eq!(fh.min(), 7);
        assert_eq!(fh.max(), 7);
    }

    #[test]
    fn list_is_sorted_ascending() {
        let fh = check_fh(vec![5i64, 2, 9, 1]).unwrap();
        assert_eq!(fh.steps(), &[1, 2, 5, 9]);
    }

    #[test]
    fn one_dimensional_integer_array_is_accepted() {
        let fh = check_fh(arr1(&[3i64, 1, 2])).unwrap();
        assert_eq!(fh.steps(), &[1, 2, 3]);
    }

    #[test]
    fn multi_dimensional_array_is_rejected() {
        let array = arr2(&[[1i64, 2], [3, 4]]).into_dyn();
        assert_eq!(
            check_fh(array),
            Err(ValidationError::WrongDimension { param: "fh", ndim: 2 })
        );
    }

    #[test]
    fn float_array_is_rejected_by_kind() {
        let array = arr1(&[1.0f64, 2.0]).into_dyn();
        assert!(matches!(
            check_fh(array),
            Err(ValidationError::NonIntegerHorizon { .. })
        ));
    }

    #[test]
    fn empty_horizon_is_rejected() {
        assert_eq!(check_fh(Vec::<i64>::new()), Err(ValidationError::EmptyHorizon));
    }

    #[test]
    fn duplicates_are_rejected_not_dedupped() {
        assert_eq!(
            check_fh(vec![1i64, 2, 2, 3]),
            Err(ValidationError::DuplicateHorizonSteps {
                steps: vec![1, 2, 2, 3]
            })
        );
    }

    #[test]
    fn zero_and_negative_steps_are_allowed() {
        let fh = check_fh(vec![0i64, -2, 3]).unwrap();
        assert_eq!(fh.steps(), &[-2, 0, 3]);
    }

    #[test]
    fn normalization_is_idempotent() {
        let canonical = check_fh(vec![4i64, 1, 8]).unwrap();
        let again = check_fh(canonical.steps().to_vec()).unwrap();
        assert_eq!(canonical, again);
    }
}
