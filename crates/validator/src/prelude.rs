//! Prelude module for convenient imports.
//!
//! ```rust
//! use ojkit_validator::prelude::*;
//!
//! let validator = IntCoverage::new().int32(true).build().unwrap();
//! assert_eq!(validator.validate_all(&[1, -1, 0], OnFailure::Raise), Ok(true));
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    ConfigError, ConfigResult, Error, Validate, ValidateExt, ValidationError, ValidationResult,
};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{
    IntCoverage, Range, RangeValidator, Rule, RuleValidator, TimeBudget, Validator, int32, int64,
    natural, time_budget, uint32, uint64, within,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{OnFailure, validate_all, validate_any};
