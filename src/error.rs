//! Error types for the forecast-guard library.

use thiserror::Error;

/// Result type alias for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors that can occur while validating forecasting inputs.
///
/// Every failure is raised at the point of detection and is fatal to the
/// validation step; callers should treat any of these as "reject this
/// input", not retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Input does not have the expected structural shape.
    #[error("`{param}` must be {expected}, but found: {found}")]
    WrongType {
        param: &'static str,
        expected: &'static str,
        found: String,
    },

    /// Index representation is not supported yet.
    #[error("{kind} index is not supported yet, please use a range, i64 or u64 index instead")]
    UnsupportedIndexKind { kind: &'static str },

    /// Time index is not monotonically non-decreasing.
    #[error("time index must be sorted (monotonically non-decreasing), but found: {index}")]
    UnsortedIndex { index: String },

    /// Series contains no observations.
    #[error("`{name}` must contain at least one observation, but found an empty series")]
    EmptySeries { name: String },

    /// Every value in the series equals the first value.
    #[error("all values of `{name}` are the same: {value}")]
    ConstantSeries { name: String, value: f64 },

    /// Nested table has more (or fewer) rows than the single supported one.
    #[error("nested table must consist of a single row, but found: {rows} rows")]
    MultiRowInput { rows: usize },

    /// Reference nested series has zero observations.
    #[error("nested series in column `{column}` must contain at least one observation")]
    EmptyNestedSeries { column: String },

    /// A column's nested index differs from the reference index.
    #[error("found nested series with unequal time index in column `{column}`; all columns must share the same index")]
    InconsistentNestedIndex { column: String },

    /// Two series do not share an identical time index.
    #[error("found series with inconsistent time indices: expected {expected}, but found {found}")]
    IndexMismatch { expected: String, found: String },

    /// Training observations are not strictly before the evaluation index.
    #[error("`y_train` must end before the evaluation index starts, but training ends at {train_end} and evaluation starts at {test_start}")]
    TrainingLeaksIntoTest { train_end: i64, test_start: i64 },

    /// Array input is not one-dimensional.
    #[error("`{param}` must be a 1-dimensional array, but found {ndim} dimensions")]
    WrongDimension { param: &'static str, ndim: usize },

    /// Forecasting horizon holds values of a non-integral kind.
    #[error("forecasting horizon must be integer-valued, but found: {found}")]
    NonIntegerHorizon { found: String },

    /// Forecasting horizon has no steps.
    #[error("forecasting horizon cannot be empty, please specify at least one step to forecast")]
    EmptyHorizon,

    /// Forecasting horizon contains repeated steps.
    #[error("forecasting horizon must not contain duplicates, but found: {steps:?}")]
    DuplicateHorizonSteps { steps: Vec<i64> },

    /// Cutoff array has no entries.
    #[error("found empty `cutoffs` array, at least one cutoff point is required")]
    EmptyCutoffs,

    /// Numeric parameter lies outside its stated bound.
    #[error("`{param}` must be {bound}, but found: {value}")]
    OutOfRange {
        param: &'static str,
        bound: &'static str,
        value: String,
    },

    /// Paired sequences have different lengths.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Estimator has not been fitted yet.
    #[error("{message}")]
    NotFitted { message: String },
}
