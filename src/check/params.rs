//! Scalar parameter validation: window and step lengths, seasonal
//! periodicity, confidence levels and cutoff points.

use ndarray::{Array1, ArrayD};

use crate::error::{Result, ValidationError};

const POSITIVE_INT_BOUND: &str = "a positive integer >= 1 or None";

fn check_positive_int(param: &'static str, value: Option<i64>) -> Result<Option<i64>> {
    match value {
        Some(v) if v < 1 => Err(ValidationError::OutOfRange {
            param,
            bound: POSITIVE_INT_BOUND,
            value: v.to_string(),
        }),
        other => Ok(other),
    }
}

/// Validate a rolling window length. `None` means "unset" and passes
/// through unchanged.
pub fn check_window_length(window_length: Option<i64>) -> Result<Option<i64>> {
    check_positive_int("window_length", window_length)
}

/// Validate a step length between split points.
pub fn check_step_length(step_length: Option<i64>) -> Result<Option<i64>> {
    check_positive_int("step_length", step_length)
}

/// Validate a seasonal periodicity.
pub fn check_sp(sp: Option<i64>) -> Result<Option<i64>> {
    check_positive_int("sp", sp)
}

/// One or more confidence levels as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum AlphaInput {
    /// A single confidence level.
    Scalar(f64),
    /// A list of confidence levels.
    List(Vec<f64>),
}

impl From<f64> for AlphaInput {
    fn from(alpha: f64) -> Self {
        Self::Scalar(alpha)
    }
}

impl From<Vec<f64>> for AlphaInput {
    fn from(alphas: Vec<f64>) -> Self {
        Self::List(alphas)
    }
}

/// Validate one or more confidence levels.
///
/// A scalar is normalized to a one-element list. Every value must lie
/// strictly inside the open interval (0, 1); 0 and 1 themselves are
/// rejected.
///
/// # Example
///
/// ```
/// use forecast_guard::check::check_alpha;
///
/// assert_eq!(check_alpha(0.05).unwrap(), vec![0.05]);
/// assert!(check_alpha(vec![0.5, 1.5]).is_err());
/// assert!(check_alpha(1.0).is_err());
/// ```
pub fn check_alpha(alpha: impl Into<AlphaInput>) -> Result<Vec<f64>> {
    let alphas = match alpha.into() {
        AlphaInput::Scalar(a) => vec![a],
        AlphaInput::List(a) => a,
    };

    for &a in &alphas {
        if !(a > 0.0 && a < 1.0) {
            return Err(ValidationError::OutOfRange {
                param: "alpha",
                bound: "in the open interval (0, 1)",
                value: a.to_string(),
            });
        }
    }

    Ok(alphas)
}

/// Cutoff points as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum CutoffInput {
    /// An integer array of split positions.
    Int(ArrayD<i64>),
    /// A float array; cutoff points must be integers and this is rejected.
    Float(ArrayD<f64>),
}

impl From<ArrayD<i64>> for CutoffInput {
    fn from(cutoffs: ArrayD<i64>) -> Self {
        Self::Int(cutoffs)
    }
}

impl From<Array1<i64>> for CutoffInput {
    fn from(cutoffs: Array1<i64>) -> Self {
        Self::Int(cutoffs.into_dyn())
    }
}

impl From<ArrayD<f64>> for CutoffInput {
    fn from(cutoffs: ArrayD<f64>) -> Self {
        Self::Float(cutoffs)
    }
}

/// Validate an array of cutoff points marking train/test split boundaries.
///
/// The input must be a non-empty 1-dimensional integer array; the points
/// are returned sorted ascending.
pub fn check_cutoffs(cutoffs: impl Into<CutoffInput>) -> Result<Vec<i64>> {
    let array = match cutoffs.into() {
        CutoffInput::Int(array) => array,
        CutoffInput::Float(_) => {
            return Err(ValidationError::WrongType {
                param: "cutoffs",
                expected: "an integer array",
                found: "an array of f64".to_string(),
            })
        }
    };

    if array.ndim() != 1 {
        return Err(ValidationError::WrongDimension {
            param: "cutoffs",
            ndim: array.ndim(),
        });
    }
    if array.is_empty() {
        return Err(ValidationError::EmptyCutoffs);
    }

    let mut points: Vec<i64> = array.iter().copied().collect();
    points.sort_unstable();
    Ok(points)
}
