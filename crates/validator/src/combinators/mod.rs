//! Combinators over validators
//!
//! - [`validate_all`], [`validate_any`]: reduce a collection of values to one
//!   outcome, raising or reporting on failure per [`OnFailure`].

pub mod batch;

pub use batch::{OnFailure, validate_all, validate_any};
