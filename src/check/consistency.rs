//! Time index validation and cross-series consistency checks.

use crate::core::{Series, TimeIndex};
use crate::error::{Result, ValidationError};

/// Validate a single time index.
///
/// Fails when the representation is not a range, i64 or u64 index, or when
/// the positions are not monotonically non-decreasing. Returns the index
/// unchanged on success.
///
/// # Example
///
/// ```
/// use forecast_guard::check::check_time_index;
/// use forecast_guard::core::TimeIndex;
///
/// let index = TimeIndex::from(vec![0i64, 1, 2, 3]);
/// assert!(check_time_index(&index).is_ok());
///
/// let unsorted = TimeIndex::from(vec![3i64, 1, 2]);
/// assert!(check_time_index(&unsorted).is_err());
/// ```
pub fn check_time_index(index: &TimeIndex) -> Result<&TimeIndex> {
    if !index.is_supported() {
        return Err(ValidationError::UnsupportedIndexKind { kind: index.kind() });
    }
    if !index.is_monotonic() {
        return Err(ValidationError::UnsortedIndex {
            index: index.describe(),
        });
    }
    Ok(index)
}

/// Validate that series share an identical time index, and that training
/// observations precede them.
///
/// The first series establishes the reference index; every series in
/// `others` must carry an exactly equal index (same length and values,
/// order sensitive). When `y_train` is supplied, its index must end
/// strictly before the reference index starts: a training maximum equal to
/// the evaluation minimum already counts as leakage.
///
/// Purely diagnostic; no input is modified.
pub fn check_consistent_time_index(
    y: &Series,
    others: &[&Series],
    y_train: Option<&Series>,
) -> Result<()> {
    let reference = check_time_index(y.index())?;

    for series in others {
        let index = check_time_index(series.index())?;
        if !reference.equals(index) {
            return Err(ValidationError::IndexMismatch {
                expected: reference.describe(),
                found: index.describe(),
            });
        }
    }

    if let Some(train) = y_train {
        let train_index = check_time_index(train.index())?;
        // An empty training index has no maximum and cannot leak.
        if let (Some(train_end), Some(test_start)) =
            (train_index.max_position(), reference.min_position())
        {
            if train_end >= test_start {
                return Err(ValidationError::TrainingLeaksIntoTest {
                    train_end,
                    test_start,
                });
            }
        }
    }

    Ok(())
}
