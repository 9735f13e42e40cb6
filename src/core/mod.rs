//! Core data structures for forecasting input validation.

mod index;
mod series;
mod table;

pub use index::TimeIndex;
pub use series::Series;
pub use table::{Cell, NestedTable};
