//! Time index representations.

use chrono::{DateTime, Utc};

/// Ordered sequence of observation positions backing a [`Series`].
///
/// Only the dense auto-generated range and explicit integer sequences are
/// supported by the validators; the float and timestamp variants exist so
/// that unsupported representations can be named when rejected.
///
/// [`Series`]: crate::core::Series
#[derive(Debug, Clone, PartialEq)]
pub enum TimeIndex {
    /// Dense auto-generated positions `0..len`.
    Range { len: usize },
    /// Explicit signed integer positions.
    Int64(Vec<i64>),
    /// Explicit unsigned integer positions.
    UInt64(Vec<u64>),
    /// Floating-point positions (not supported yet).
    Float64(Vec<f64>),
    /// Calendar timestamps (not supported yet).
    Timestamps(Vec<DateTime<Utc>>),
}

impl TimeIndex {
    /// Create a dense range index of the given length.
    pub fn range(len: usize) -> Self {
        Self::Range { len }
    }

    /// Number of positions in the index.
    pub fn len(&self) -> usize {
        match self {
            Self::Range { len } => *len,
            Self::Int64(v) => v.len(),
            Self::UInt64(v) => v.len(),
            Self::Float64(v) => v.len(),
            Self::Timestamps(v) => v.len(),
        }
    }

    /// Check if the index has no positions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the underlying representation, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Range { .. } => "range",
            Self::Int64(_) => "i64",
            Self::UInt64(_) => "u64",
            Self::Float64(_) => "f64",
            Self::Timestamps(_) => "timestamp",
        }
    }

    /// Whether this representation is one the validators accept.
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Range { .. } | Self::Int64(_) | Self::UInt64(_))
    }

    /// Check that positions never decrease.
    pub fn is_monotonic(&self) -> bool {
        match self {
            Self::Range { .. } => true,
            Self::Int64(v) => v.windows(2).all(|w| w[0] <= w[1]),
            Self::UInt64(v) => v.windows(2).all(|w| w[0] <= w[1]),
            Self::Float64(v) => v.windows(2).all(|w| w[0] <= w[1]),
            Self::Timestamps(v) => v.windows(2).all(|w| w[0] <= w[1]),
        }
    }

    /// Position at `i` as an integer, for the supported representations.
    ///
    /// Returns `None` out of bounds or for float/timestamp indices.
    /// Unsigned positions are assumed to fit in `i64`.
    pub fn position(&self, i: usize) -> Option<i64> {
        match self {
            Self::Range { len } => (i < *len).then_some(i as i64),
            Self::Int64(v) => v.get(i).copied(),
            Self::UInt64(v) => v.get(i).map(|&p| p as i64),
            Self::Float64(_) | Self::Timestamps(_) => None,
        }
    }

    /// Smallest position, `None` if the index is empty or unsupported.
    pub fn min_position(&self) -> Option<i64> {
        (0..self.len()).filter_map(|i| self.position(i)).min()
    }

    /// Largest position, `None` if the index is empty or unsupported.
    pub fn max_position(&self) -> Option<i64> {
        (0..self.len()).filter_map(|i| self.position(i)).max()
    }

    /// Value-based equality across representations: a range of length 3
    /// equals an explicit `[0, 1, 2]`.
    pub fn equals(&self, other: &TimeIndex) -> bool {
        if self.len() != other.len() {
            return false;
        }
        (0..self.len()).all(|i| match (self.position(i), other.position(i)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        })
    }

    /// Human-readable rendition for error messages.
    pub fn describe(&self) -> String {
        format!("{self:?}")
    }
}

impl From<Vec<i64>> for TimeIndex {
    fn from(values: Vec<i64>) -> Self {
        Self::Int64(values)
    }
}

impl From<Vec<u64>> for TimeIndex {
    fn from(values: Vec<u64>) -> Self {
        Self::UInt64(values)
    }
}

impl From<Vec<f64>> for TimeIndex {
    fn from(values: Vec<f64>) -> Self {
        Self::Float64(values)
    }
}

impl From<Vec<DateTime<Utc>>> for TimeIndex {
    fn from(values: Vec<DateTime<Utc>>) -> Self {
        Self::Timestamps(values)
    }
}
