//! Exogenous nested table validation.

use crate::core::NestedTable;
use crate::error::{Result, ValidationError};

/// Validate a nested table of exogenous features.
///
/// The table must hold exactly one row (one multivariate instance) and at
/// least one column. The first column's cell establishes the reference
/// index, synthesized as a dense range for raw cells; it must be non-empty,
/// and every remaining column's effective index must be element-wise equal
/// to it. Returns the input unchanged on success.
pub fn check_exog(x: &NestedTable) -> Result<&NestedTable> {
    if x.n_rows() != 1 {
        return Err(ValidationError::MultiRowInput { rows: x.n_rows() });
    }

    let row = match x.row(0) {
        Some(row) => row,
        None => return Err(ValidationError::MultiRowInput { rows: 0 }),
    };
    let first = match row.first() {
        Some(cell) => cell,
        None => {
            return Err(ValidationError::WrongType {
                param: "x",
                expected: "a nested table with at least one column",
                found: "a table without columns".to_string(),
            })
        }
    };

    let names = x.column_names();
    let reference = first.effective_index();
    if reference.is_empty() {
        return Err(ValidationError::EmptyNestedSeries {
            column: names[0].clone(),
        });
    }

    for (cell, name) in row.iter().zip(names).skip(1) {
        // Raw cells are compared through a range index of their own length.
        if !reference.equals(&cell.effective_index()) {
            return Err(ValidationError::InconsistentNestedIndex {
                column: name.clone(),
            });
        }
    }

    Ok(x)
}
