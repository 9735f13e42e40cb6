//! Target series validation.

use crate::check::check_time_index;
use crate::core::Series;
use crate::error::{Result, ValidationError};

/// Flags controlling which series shapes are acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesOptions {
    /// Accept a series with zero observations.
    pub allow_empty: bool,
    /// Accept a series whose values are all equal.
    pub allow_constant: bool,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            allow_empty: false,
            allow_constant: true,
        }
    }
}

/// Validate a target series with the default options.
///
/// The series must be non-empty and carry a valid time index; constant
/// series are accepted by default. Returns the input unchanged on success;
/// this is advisory, not a sanitization step.
///
/// # Example
///
/// ```
/// use forecast_guard::check::check_y;
/// use forecast_guard::core::Series;
///
/// let y = Series::from_values("y", vec![1.0, 2.0, 3.0]);
/// assert!(check_y(&y).is_ok());
///
/// let empty = Series::from_values("y", vec![]);
/// assert!(check_y(&empty).is_err());
/// ```
pub fn check_y(y: &Series) -> Result<&Series> {
    check_y_with(y, SeriesOptions::default())
}

/// Validate a target series with explicit options.
pub fn check_y_with(y: &Series, options: SeriesOptions) -> Result<&Series> {
    if !options.allow_empty && y.is_empty() {
        return Err(ValidationError::EmptySeries {
            name: y.name().to_string(),
        });
    }

    if !options.allow_constant && y.is_constant() {
        return Err(ValidationError::ConstantSeries {
            name: y.name().to_string(),
            value: y.values()[0],
        });
    }

    check_time_index(y.index())?;
    Ok(y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TimeIndex;

    #[test]
    fn valid_series_passes_and_is_returned_unchanged() {
        let y = Series::from_values("y", vec![1.0, 2.0, 3.0]);
        let checked = check_y(&y).unwrap();
        assert_eq!(checked, &y);
    }

    #[test]
    fn empty_series_is_rejected_by_default() {
        let y = Series::from_values("y", vec![]);
        assert_eq!(
            check_y(&y),
            Err(ValidationError::EmptySeries {
                name: "y".to_string()
            })
        );
    }

    #[test]
    fn empty_series_can_be_allowed() {
        let y = Series::from_values("y", vec![]);
        let options = SeriesOptions {
            allow_empty: true,
            ..SeriesOptions::default()
        };
        assert!(check_y_with(&y, options).is_ok());
    }

    #[test]
    fn constant_series_is_accepted_by_default() {
        let y = Series::from_values("y", vec![5.0, 5.0, 5.0]);
        assert!(check_y(&y).is_ok());
    }

    #[test]
    fn constant_series_can_be_rejected() {
        let y = Series::from_values("y", vec![5.0, 5.0, 5.0]);
        let options = SeriesOptions {
            allow_constant: false,
            ..SeriesOptions::default()
        };
        assert_eq!(
            check_y_with(&y, options),
            Err(ValidationError::ConstantSeries {
                name: "y".to_string(),
                value: 5.0,
            })
        );
    }

    #[test]
    fn index_failures_propagate() {
        let y = Series::new(
            "y",
            TimeIndex::from(vec![2i64, 0, 1]),
            vec![1.0, 2.0, 3.0],
        )
        .unwrap();
        assert!(matches!(
            check_y(&y),
            Err(ValidationError::UnsortedIndex { .. })
        ));

        let y = Series::new("y", TimeIndex::from(vec![0.5f64, 1.5]), vec![1.0, 2.0]).unwrap();
        assert_eq!(
            check_y(&y),
            Err(ValidationError::UnsupportedIndexKind { kind: "f64" })
        );
    }
}
