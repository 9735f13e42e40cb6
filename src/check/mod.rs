//! Input validation for forecasting estimators.
//!
//! Each check borrows its input, retains nothing, and either returns the
//! input (or a canonical value type) or fails with a
//! [`ValidationError`](crate::error::ValidationError) describing the
//! violation.

mod consistency;
mod horizon;
mod params;
mod series;
mod table;

pub use consistency::{check_consistent_time_index, check_time_index};
pub use horizon::{check_fh, ForecastingHorizon, HorizonInput};
pub use params::{
    check_alpha, check_cutoffs, check_sp, check_step_length, check_window_length, AlphaInput,
    CutoffInput,
};
pub use series::{check_y, check_y_with, SeriesOptions};
pub use table::check_exog;

use crate::core::{NestedTable, Series};
use crate::error::{Result, ValidationError};

/// Validate a target series together with its exogenous features.
///
/// Checks the series, then the nested table, then that the table's
/// reference nested index equals the series' index, so that every feature
/// cell lines up with the target observations.
pub fn check_y_x(y: &Series, x: &NestedTable) -> Result<()> {
    check_y(y)?;
    check_exog(x)?;

    // check_exog guarantees a single row with at least one column.
    if let Some(cell) = x.cell(0, 0) {
        let reference = cell.effective_index();
        if !y.index().equals(&reference) {
            return Err(ValidationError::IndexMismatch {
                expected: y.index().describe(),
                found: reference.describe(),
            });
        }
    }

    Ok(())
}
