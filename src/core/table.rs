//! Nested tables: tabular structures whose cells are themselves series.

use crate::core::{Series, TimeIndex};
use crate::error::{Result, ValidationError};

/// A single cell of a nested table.
///
/// Cells either carry their own time index (a nested [`Series`]) or are a
/// raw value sequence implicitly indexed `0..n`.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// A nested series with an explicit index.
    Indexed(Series),
    /// A raw value sequence without an index of its own.
    Raw(Vec<f64>),
}

impl Cell {
    /// Number of elements in the cell.
    pub fn len(&self) -> usize {
        match self {
            Self::Indexed(series) => series.len(),
            Self::Raw(values) => values.len(),
        }
    }

    /// Check if the cell holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cell's index, synthesizing a dense range for raw cells.
    pub fn effective_index(&self) -> TimeIndex {
        match self {
            Self::Indexed(series) => series.index().clone(),
            Self::Raw(values) => TimeIndex::range(values.len()),
        }
    }
}

impl From<Series> for Cell {
    fn from(series: Series) -> Self {
        Self::Indexed(series)
    }
}

impl From<Vec<f64>> for Cell {
    fn from(values: Vec<f64>) -> Self {
        Self::Raw(values)
    }
}

/// A tabular structure with named columns whose cells are series-valued.
///
/// A valid exogenous input holds exactly one row, representing one
/// multivariate instance; the row constraint is enforced by
/// [`check_exog`](crate::check::check_exog), not at construction, so that
/// malformed shapes can be reported with the proper error.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl NestedTable {
    /// Create a table, enforcing a rectangular shape.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        for row in &rows {
            if row.len() != columns.len() {
                return Err(ValidationError::DimensionMismatch {
                    expected: columns.len(),
                    got: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Create a table holding a single row of cells.
    pub fn single_row(columns: Vec<String>, cells: Vec<Cell>) -> Result<Self> {
        Self::new(columns, vec![cells])
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Column names in order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Cells of the given row, if present.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.rows.get(row).map(|r| r.as_slice())
    }

    /// Cell at the given row and column, if present.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }
}
