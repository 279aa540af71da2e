//! Built-in validators
//!
//! - **Range**: [`within`], [`Range`], [`RangeValidator`]
//! - **Rules**: [`Rule`], [`RuleValidator`]
//! - **Presets**: [`IntCoverage`], [`int32`], [`uint32`], [`int64`],
//!   [`uint64`], [`natural`], [`TimeBudget`], [`time_budget`]
//! - [`Validator`]: the closed set of validator variants behind one type.

pub mod presets;
pub mod range;
pub mod rules;

use std::fmt::Display;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use presets::{
    DEFAULT_THROUGHPUT, INT32_MAX, INT32_MIN, INT64_MAX, INT64_MIN, IntCoverage, NATURAL_MIN,
    TimeBudget, UINT32_MAX, UINT32_MIN, UINT64_MAX, UINT64_MIN, int32, int64, natural,
    time_budget, uint32, uint64,
};
pub use range::{Range, RangeValidator, within};
pub use rules::{Rule, RuleValidator};

// ============================================================================
// VALIDATOR
// ============================================================================

/// Either kind of validator.
///
/// Presets return the concrete variant they build; convert with `into()`
/// when a single type is needed, e.g. to choose between a range and a rule
/// set at runtime.
///
/// # Examples
///
/// ```
/// use ojkit_validator::validators::{Validator, RangeValidator, int32};
/// use ojkit_validator::foundation::Validate;
///
/// let choices: Vec<Validator<i128>> = vec![
///     RangeValidator::new(Some(0), Some(9)).unwrap().into(),
///     int32().unwrap().into(),
/// ];
///
/// assert!(choices.iter().all(|v| v.evaluate(&5)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Validator<T> {
    /// A single range.
    Range(RangeValidator<T>),
    /// Ordered allow/deny rules.
    Rules(RuleValidator<T>),
}

impl<T> From<RangeValidator<T>> for Validator<T> {
    fn from(validator: RangeValidator<T>) -> Self {
        Self::Range(validator)
    }
}

impl<T> From<RuleValidator<T>> for Validator<T> {
    fn from(validator: RuleValidator<T>) -> Self {
        Self::Rules(validator)
    }
}

impl<T: PartialOrd + Display> Validate for Validator<T> {
    type Input = T;

    #[inline]
    fn evaluate(&self, input: &T) -> bool {
        match self {
            Self::Range(v) => v.evaluate(input),
            Self::Rules(v) => v.evaluate(input),
        }
    }

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        match self {
            Self::Range(v) => v.validate(input),
            Self::Rules(v) => v.validate(input),
        }
    }
}
