//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ConfigError`], [`ValidationError`], [`Error`]
//!
//! Every validator answers one question, "is this value accepted?", through
//! [`Validate::evaluate`]. [`Validate::validate`] answers the same question
//! with a structured explanation, and [`ValidateExt`] lifts both to batches.

pub mod error;
pub mod traits;

pub use error::{ConfigError, Error, ValidationError};
pub use traits::{Validate, ValidateExt};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A construction result using `ConfigError`.
pub type ConfigResult<T> = Result<T, ConfigError>;
