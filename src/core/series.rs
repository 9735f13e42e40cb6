//! Labeled one-dimensional value sequences.

use crate::core::TimeIndex;
use crate::error::{Result, ValidationError};

/// A named value sequence paired 1:1 with a [`TimeIndex`].
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    index: TimeIndex,
    values: Vec<f64>,
}

impl Series {
    /// Create a series, enforcing that index and values have equal length.
    pub fn new(name: impl Into<String>, index: TimeIndex, values: Vec<f64>) -> Result<Self> {
        if index.len() != values.len() {
            return Err(ValidationError::DimensionMismatch {
                expected: index.len(),
                got: values.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            index,
            values,
        })
    }

    /// Create a series over a dense range index sized to the values.
    pub fn from_values(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            index: TimeIndex::range(values.len()),
            values,
        }
    }

    /// Display name, used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Time index of the series.
    pub fn index(&self) -> &TimeIndex {
        &self.index
    }

    /// Observed values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check whether every value equals the first one.
    ///
    /// An empty series is not constant: there is no first value to equal.
    pub fn is_constant(&self) -> bool {
        match self.values.first() {
            Some(&first) => self.values.iter().all(|&v| v == first),
            None => false,
        }
    }
}
