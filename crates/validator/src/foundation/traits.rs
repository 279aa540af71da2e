//! Core traits for the validation system

use std::fmt::Display;

use crate::combinators::{OnFailure, validate_all, validate_any};
use crate::foundation::{ValidationError, ValidationResult};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The evaluation capability every validator exposes.
///
/// [`evaluate`](Validate::evaluate) is the hot path: a plain boolean with no
/// allocation. [`validate`](Validate::validate) answers the same question but
/// explains a rejection with a structured [`ValidationError`]. The two must
/// always agree.
///
/// Implementations hold no mutable state, so repeated evaluation of the same
/// value always yields the same result and a validator can be shared between
/// threads for read-only use.
///
/// # Examples
///
/// ```rust
/// use ojkit_validator::foundation::Validate;
/// use ojkit_validator::ValidationError;
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn evaluate(&self, input: &i64) -> bool {
///         input % 2 == 0
///     }
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         if self.evaluate(input) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("even", "Value must be even"))
///         }
///     }
/// }
///
/// assert!(Even.evaluate(&4));
/// assert!(Even.validate(&3).is_err());
/// ```
pub trait Validate {
    /// The value type being validated.
    type Input;

    /// Returns whether `input` is accepted.
    fn evaluate(&self, input: &Self::Input) -> bool;

    /// Returns `Ok(())` if `input` is accepted, otherwise the reason it was
    /// rejected.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn evaluate(&self, input: &Self::Input) -> bool {
        (**self).evaluate(input)
    }

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing batch evaluation for validators.
///
/// Automatically implemented for all types that implement [`Validate`].
///
/// # Examples
///
/// ```rust
/// use ojkit_validator::prelude::*;
///
/// let validator = RangeValidator::new(Some(0), Some(10)).unwrap();
///
/// assert_eq!(validator.validate_any(&[30, 5], OnFailure::Raise), Ok(true));
/// assert_eq!(validator.validate_any(&[30, 50], OnFailure::Report), Ok(false));
/// ```
pub trait ValidateExt: Validate {
    /// Succeeds iff every value is accepted.
    ///
    /// See [`validate_all`](crate::combinators::validate_all).
    fn validate_all(
        &self,
        values: &[Self::Input],
        on_failure: OnFailure,
    ) -> ValidationResult<bool>
    where
        Self::Input: Display,
    {
        validate_all(self, values, on_failure)
    }

    /// Succeeds iff at least one value is accepted.
    ///
    /// See [`validate_any`](crate::combinators::validate_any).
    fn validate_any(
        &self,
        values: &[Self::Input],
        on_failure: OnFailure,
    ) -> ValidationResult<bool>
    where
        Self::Input: Display,
    {
        validate_any(self, values, on_failure)
    }
}

impl<T: Validate + ?Sized> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
