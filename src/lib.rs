//! # forecast-guard
//!
//! Input validation for time series forecasting estimators.
//!
//! Before an estimator fits or predicts, its inputs — target series,
//! exogenous feature tables, forecasting horizons, cross-validation
//! generators, confidence levels, cutoff points — are normalized to
//! canonical shapes and checked for internal consistency: index kinds and
//! monotonicity, index equality across series, strict train/test
//! precedence, and horizon canonicalization (sorted, duplicate-free
//! integer steps).
//!
//! # Example
//!
//! ```
//! use forecast_guard::prelude::*;
//!
//! let y = Series::from_values("y", vec![1.0, 2.0, 3.0]);
//! check_y(&y)?;
//!
//! let fh = check_fh(vec![3i64, 1, 2])?;
//! assert_eq!(fh.steps(), &[1, 2, 3]);
//! # Ok::<(), forecast_guard::ValidationError>(())
//! ```

pub mod check;
pub mod core;
pub mod error;
pub mod estimator;
pub mod metrics;

pub use error::{Result, ValidationError};

pub mod prelude {
    pub use crate::check::{
        check_alpha, check_consistent_time_index, check_cutoffs, check_exog, check_fh, check_sp,
        check_step_length, check_time_index, check_window_length, check_y, check_y_with,
        check_y_x, ForecastingHorizon, SeriesOptions,
    };
    pub use crate::core::{Cell, NestedTable, Series, TimeIndex};
    pub use crate::error::{Result, ValidationError};
    pub use crate::estimator::{
        check_cv, check_is_fitted, check_is_fitted_in_transform, AttributePredicate, Estimator,
        TemporalSplitter,
    };
    pub use crate::metrics::{check_scoring, Metric};
}
