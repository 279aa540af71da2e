//! Error types for construction and validation failures
//!
//! Two kinds of failure exist:
//!
//! - [`ConfigError`]: a validator could not be built (inverted bounds, an
//!   empty rule list, a preset without any domain flag, a bad time budget).
//! - [`ValidationError`]: a value or a batch of values was rejected. The
//!   error is structured (code, message, params, nested detail) and, for
//!   batch failures, carries the whole evaluated input collection.
//!
//! String fields use `Cow<'static, str>` so static codes and messages do not
//! allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// A validator could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Both bounds are present and the lower one exceeds the upper one.
    #[error("lower bound {lo} is greater than upper bound {hi}")]
    InvertedBounds { lo: String, hi: String },

    /// A bound does not compare equal to itself (floating-point NaN).
    #[error("bound {bound} is not comparable")]
    IncomparableBound { bound: String },

    /// A rule-based validator needs at least one rule.
    #[error("rule list must not be empty")]
    EmptyRules,

    /// An integer coverage preset was built with every flag unset.
    #[error("no constraints specified")]
    NoConstraints,

    /// The time budget or throughput cannot produce an operation bound.
    #[error("invalid time budget: {reason}")]
    InvalidTimeBudget { reason: String },
}

impl ConfigError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvertedBounds { .. } => "CONFIG_INVERTED_BOUNDS",
            Self::IncomparableBound { .. } => "CONFIG_INCOMPARABLE_BOUND",
            Self::EmptyRules => "CONFIG_EMPTY_RULES",
            Self::NoConstraints => "CONFIG_NO_CONSTRAINTS",
            Self::InvalidTimeBudget { .. } => "CONFIG_INVALID_TIME_BUDGET",
        }
    }

    pub(crate) fn inverted_bounds(lo: impl fmt::Display, hi: impl fmt::Display) -> Self {
        Self::InvertedBounds {
            lo: lo.to_string(),
            hi: hi.to_string(),
        }
    }

    pub(crate) fn invalid_time_budget(reason: impl Into<String>) -> Self {
        Self::InvalidTimeBudget {
            reason: reason.into(),
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// Per-value failures describe which bound or rule rejected the value.
/// Batch failures (see [`validate_all`](crate::combinators::validate_all))
/// additionally carry every evaluated input in [`inputs`](Self::inputs) and
/// nest the detail of the first rejected value.
///
/// # Examples
///
/// ```rust
/// use ojkit_validator::ValidationError;
///
/// let error = ValidationError::new("above_max", "Value must be at most 10")
///     .with_param("max", "10")
///     .with_param("actual", "11");
///
/// assert_eq!(error.param("actual"), Some("11"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "below_min", "outside_allowed", "inside_denied", "all_failed"
    pub code: Cow<'static, str>,

    /// Human-readable error message.
    pub message: Cow<'static, str>,

    /// Ordered key-value parameters (typically 1-3).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Detail of the values that caused a batch failure.
    pub nested: Vec<ValidationError>,

    /// The full input collection of a batch evaluation, rendered for
    /// diagnostics. Empty for per-value errors.
    pub inputs: Vec<String>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
            nested: Vec::new(),
            inputs: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Records the evaluated input collection.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_inputs<T: fmt::Display>(mut self, inputs: &[T]) -> Self {
        self.inputs = inputs.iter().map(ToString::to_string).collect();
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error has nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        if !self.inputs.is_empty() {
            write!(f, "\n  Inputs: [{}]", self.inputs.join(", "))?;
        }

        if !self.nested.is_empty() {
            write!(f, "\n  Nested errors:")?;
            for (i, error) in self.nested.iter().enumerate() {
                write!(f, "\n    {}. {}", i + 1, error)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "below_min" error.
    pub fn below_min<T: fmt::Display>(min: T, actual: T) -> Self {
        Self::new("below_min", format!("Value must be at least {min}"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "above_max" error.
    pub fn above_max<T: fmt::Display>(max: T, actual: T) -> Self {
        Self::new("above_max", format!("Value must be at most {max}"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "outside_allowed" error for an allow-rule the value misses.
    pub fn outside_allowed(rule: usize, range: impl fmt::Display, actual: impl fmt::Display) -> Self {
        Self::new(
            "outside_allowed",
            format!("Value must lie within allowed range {range}"),
        )
        .with_param("rule", rule.to_string())
        .with_param("range", range.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates an "inside_denied" error for a deny-rule the value hits.
    pub fn inside_denied(rule: usize, range: impl fmt::Display, actual: impl fmt::Display) -> Self {
        Self::new(
            "inside_denied",
            format!("Value must not lie within denied range {range}"),
        )
        .with_param("rule", rule.to_string())
        .with_param("range", range.to_string())
        .with_param("actual", actual.to_string())
    }
}

// ============================================================================
// CRATE ERROR
// ============================================================================

/// Either failure kind, for callers that want a single error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Construction failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Evaluation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// ============================================================================
// TESTS
// ============================================================================
