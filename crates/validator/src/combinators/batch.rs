//! Batch evaluation over a collection of candidate values
//!
//! [`validate_all`] and [`validate_any`] reduce per-value results to one
//! boolean in a single short-circuiting pass over the caller's slice. On
//! failure, [`OnFailure`] decides between an error and a plain `false`.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError, ValidationResult};

// ============================================================================
// FAILURE MODE
// ============================================================================

/// What a batch evaluation does when the aggregate check fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnFailure {
    /// Return `Err(ValidationError)` carrying every evaluated input.
    #[default]
    Raise,
    /// Return `Ok(false)`; the caller checks the boolean.
    Report,
}

impl OnFailure {
    /// Maps the classic `raise_on_failure` flag.
    pub const fn from_raise(raise_on_failure: bool) -> Self {
        if raise_on_failure { Self::Raise } else { Self::Report }
    }
}

// ============================================================================
// BATCH FUNCTIONS
// ============================================================================

/// Succeeds iff `validator` accepts every value.
///
/// An empty slice is vacuously accepted. With [`OnFailure::Raise`] the error
/// has code `all_failed`, lists all `values` in
/// [`inputs`](ValidationError::inputs), records the index of the first
/// rejected value as the `index` param and nests that value's own error.
///
/// # Examples
///
/// ```
/// use ojkit_validator::combinators::{OnFailure, validate_all};
/// use ojkit_validator::validators::RangeValidator;
///
/// let validator = RangeValidator::new(Some(0), Some(10)).unwrap();
///
/// assert_eq!(validate_all(&validator, &[1, 2, 3], OnFailure::Raise), Ok(true));
///
/// let error = validate_all(&validator, &[1, 2, 30], OnFailure::Raise).unwrap_err();
/// assert_eq!(error.inputs, vec!["1", "2", "30"]);
/// assert_eq!(error.param("index"), Some("2"));
///
/// assert_eq!(validate_all(&validator, &[1, 2, 30], OnFailure::Report), Ok(false));
/// ```
pub fn validate_all<V>(
    validator: &V,
    values: &[V::Input],
    on_failure: OnFailure,
) -> ValidationResult<bool>
where
    V: Validate + ?Sized,
    V::Input: Display,
{
    let Some(index) = values.iter().position(|value| !validator.evaluate(value)) else {
        return Ok(true);
    };
    tracing::trace!(index, value = %values[index], "value rejected");

    match on_failure {
        OnFailure::Report => {
            tracing::warn!(
                index,
                total = values.len(),
                "batch validation failed, reporting false"
            );
            Ok(false)
        }
        OnFailure::Raise => {
            let mut error = ValidationError::new(
                "all_failed",
                format!(
                    "Value at index {index} of {} did not pass the validation",
                    values.len()
                ),
            )
            .with_param("index", index.to_string())
            .with_param("total", values.len().to_string())
            .with_inputs(values);

            if let Err(detail) = validator.validate(&values[index]) {
                error = error.with_nested_error(detail);
            }
            Err(error)
        }
    }
}

/// Succeeds iff `validator` accepts at least one value.
///
/// An empty slice fails. With [`OnFailure::Raise`] the error has code
/// `any_failed` and lists all `values` in
/// [`inputs`](ValidationError::inputs).
///
/// # Examples
///
/// ```
/// use ojkit_validator::combinators::{OnFailure, validate_any};
/// use ojkit_validator::validators::natural;
///
/// let validator = natural().unwrap();
///
/// assert_eq!(validate_any(&validator, &[-1, 0, 3], OnFailure::Raise), Ok(true));
/// assert!(validate_any(&validator, &[-1, 0], OnFailure::Raise).is_err());
/// ```
pub fn validate_any<V>(
    validator: &V,
    values: &[V::Input],
    on_failure: OnFailure,
) -> ValidationResult<bool>
where
    V: Validate + ?Sized,
    V::Input: Display,
{
    if values.iter().any(|value| validator.evaluate(value)) {
        return Ok(true);
    }

    match on_failure {
        OnFailure::Report => {
            tracing::warn!(
                total = values.len(),
                "batch validation failed, reporting false"
            );
            Ok(false)
        }
        OnFailure::Raise => Err(ValidationError::new(
            "any_failed",
            format!("None of {} values passed the validation", values.len()),
        )
        .with_param("total", values.len().to_string())
        .with_inputs(values)),
    }
}

// ============================================================================
// TESTS
// ============================================================================
