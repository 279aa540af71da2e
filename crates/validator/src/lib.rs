//! # ojkit-validator
//!
//! Declarative numeric constraints for competitive-programming test data.
//!
//! ## Quick Start
//!
//! ```rust
//! use ojkit_validator::prelude::*;
//!
//! // Values must fit in a signed 32-bit integer.
//! let validator = int32().unwrap();
//! assert!(validator.evaluate(&2_147_483_647));
//! assert!(!validator.evaluate(&2_147_483_648));
//!
//! // Batch evaluation over parsed tokens.
//! let limits = RangeValidator::new(Some(0), Some(10)).unwrap();
//! assert_eq!(limits.validate_all(&[1, 2, 3], OnFailure::Raise), Ok(true));
//! assert!(limits.validate_all(&[1, 2, 30], OnFailure::Raise).is_err());
//! assert_eq!(limits.validate_all(&[1, 2, 30], OnFailure::Report), Ok(false));
//! ```
//!
//! ## Building blocks
//!
//! - [`within`](validators::within): the inclusive range predicate.
//! - [`RangeValidator`](validators::RangeValidator): one optionally open range.
//! - [`RuleValidator`](validators::RuleValidator): ordered allow/deny rules
//!   evaluated with short-circuit failure.
//! - [`IntCoverage`](validators::IntCoverage) and
//!   [`TimeBudget`](validators::TimeBudget): presets for integer domains and
//!   time limits.
//! - [`validate_all`](combinators::validate_all) /
//!   [`validate_any`](combinators::validate_any): batch evaluation.

// ValidationError carries the rendered input collection.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod validators;

pub use foundation::{ConfigError, ConfigResult, Error, ValidationError, ValidationResult};
