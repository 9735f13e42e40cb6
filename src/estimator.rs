//! Estimator-side contracts: fitted-state checks and the temporal
//! cross-validator capability boundary.

use crate::check::{check_step_length, check_window_length, ForecastingHorizon};
use crate::error::{Result, ValidationError};

const DEFAULT_FIT_MSG: &str = "This {name} instance is not fitted yet. Call 'fit' with \
                               appropriate arguments before using this method.";
const DEFAULT_TRANSFORM_MSG: &str = "This {name} instance has not been fitted yet. Call \
                                     'transform' with appropriate arguments before using this \
                                     method.";

/// Minimal surface an estimator exposes for fitted-state checks.
pub trait Estimator {
    /// Display name, substituted into not-fitted messages.
    fn name(&self) -> &str;

    /// Whether the named fitted attribute is present.
    fn has_attribute(&self, attribute: &str) -> bool;
}

/// How attribute presence is combined across the requested attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributePredicate {
    /// Every attribute must be present.
    #[default]
    All,
    /// At least one attribute must be present.
    Any,
}

/// Check that an estimator carries the given fitted attributes.
///
/// Fails with `NotFitted` when the predicate over attribute presence does
/// not hold; `{name}` in the message template (the default one when `msg`
/// is `None`) is replaced by the estimator's display name.
pub fn check_is_fitted(
    estimator: &dyn Estimator,
    attributes: &[&str],
    msg: Option<&str>,
    predicate: AttributePredicate,
) -> Result<()> {
    let fitted = match predicate {
        AttributePredicate::All => attributes.iter().all(|a| estimator.has_attribute(a)),
        AttributePredicate::Any => attributes.iter().any(|a| estimator.has_attribute(a)),
    };

    if fitted {
        Ok(())
    } else {
        let template = msg.unwrap_or(DEFAULT_FIT_MSG);
        Err(ValidationError::NotFitted {
            message: template.replace("{name}", estimator.name()),
        })
    }
}

/// Fitted-state check with a default message specialized for transformers
/// whose `transform` has not been called yet.
pub fn check_is_fitted_in_transform(
    estimator: &dyn Estimator,
    attributes: &[&str],
    msg: Option<&str>,
    predicate: AttributePredicate,
) -> Result<()> {
    let template = msg.unwrap_or(DEFAULT_TRANSFORM_MSG);
    check_is_fitted(estimator, attributes, Some(template), predicate)
}

/// Capability contract for temporal cross-validation generators.
///
/// The splitting algorithm itself lives outside this crate; a conforming
/// splitter only has to report its canonical horizon and its window
/// parameters so they can be validated.
pub trait TemporalSplitter {
    /// The forecasting horizon used for each split.
    fn fh(&self) -> &ForecastingHorizon;

    /// Training window length, `None` when unset.
    fn window_length(&self) -> Option<i64>;

    /// Step length between split points, `None` when unset.
    fn step_length(&self) -> Option<i64>;
}

/// Validate a temporal cross-validation generator's reported parameters.
///
/// Returns the splitter unchanged on success.
pub fn check_cv(cv: &dyn TemporalSplitter) -> Result<&dyn TemporalSplitter> {
    check_window_length(cv.window_length())?;
    check_step_length(cv.step_length())?;
    Ok(cv)
}
