//! Preset validators for standard integer domains and time budgets

use serde::{Deserialize, Serialize};

use crate::foundation::{ConfigError, ConfigResult};
use crate::validators::range::{Range, RangeValidator};
use crate::validators::rules::{Rule, RuleValidator};

// ============================================================================
// DOMAIN CONSTANTS
// ============================================================================

/// Smallest value of a signed 32-bit integer, `-2^31`.
pub const INT32_MIN: i128 = i32::MIN as i128;
/// Largest value of a signed 32-bit integer, `2^31 - 1`.
pub const INT32_MAX: i128 = i32::MAX as i128;
/// Smallest value of an unsigned 32-bit integer.
pub const UINT32_MIN: i128 = 0;
/// Largest value of an unsigned 32-bit integer, `2^32 - 1`.
pub const UINT32_MAX: i128 = u32::MAX as i128;
/// Smallest value of a signed 64-bit integer, `-2^63`.
pub const INT64_MIN: i128 = i64::MIN as i128;
/// Largest value of a signed 64-bit integer, `2^63 - 1`.
pub const INT64_MAX: i128 = i64::MAX as i128;
/// Smallest value of an unsigned 64-bit integer.
pub const UINT64_MIN: i128 = 0;
/// Largest value of an unsigned 64-bit integer, `2^64 - 1`.
pub const UINT64_MAX: i128 = u64::MAX as i128;
/// Smallest natural number.
pub const NATURAL_MIN: i128 = 1;

/// Assumed operations per second for [`TimeBudget`].
pub const DEFAULT_THROUGHPUT: f64 = 5e8;

// ============================================================================
// INTEGER COVERAGE
// ============================================================================

/// Builds a [`RuleValidator`] over `i128` from per-domain flags.
///
/// Each flag that is set contributes one rule, always in the order
/// int32, uint32, int64, uint64, natural. `true` allows the domain, `false`
/// denies it, an unset flag contributes nothing.
///
/// Because rules short-circuit in that fixed order, a deny flag on a wider
/// domain is unreachable for values a narrower allow flag already rejected:
/// with `int32 = allow` and `int64 = deny`, both `2^31` and `2^40` fail on
/// the int32 rule.
///
/// # Examples
///
/// ```
/// use ojkit_validator::validators::IntCoverage;
/// use ojkit_validator::foundation::Validate;
///
/// let validator = IntCoverage::new().int64(true).uint32(false).build().unwrap();
///
/// assert!(validator.evaluate(&-1));
/// assert!(!validator.evaluate(&7)); // inside uint32, denied
/// assert!(validator.evaluate(&(1_i128 << 40)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntCoverage {
    /// Signed 32-bit domain.
    pub int32: Option<bool>,
    /// Unsigned 32-bit domain.
    pub uint32: Option<bool>,
    /// Signed 64-bit domain.
    pub int64: Option<bool>,
    /// Unsigned 64-bit domain.
    pub uint64: Option<bool>,
    /// Natural numbers, `[1, +inf)`.
    pub natural: Option<bool>,
}

impl IntCoverage {
    /// Creates a coverage with every flag unset.
    pub const fn new() -> Self {
        Self {
            int32: None,
            uint32: None,
            int64: None,
            uint64: None,
            natural: None,
        }
    }

    /// Sets the int32 flag.
    pub const fn int32(mut self, allow: bool) -> Self {
        self.int32 = Some(allow);
        self
    }

    /// Sets the uint32 flag.
    pub const fn uint32(mut self, allow: bool) -> Self {
        self.uint32 = Some(allow);
        self
    }

    /// Sets the int64 flag.
    pub const fn int64(mut self, allow: bool) -> Self {
        self.int64 = Some(allow);
        self
    }

    /// Sets the uint64 flag.
    pub const fn uint64(mut self, allow: bool) -> Self {
        self.uint64 = Some(allow);
        self
    }

    /// Sets the natural-number flag.
    pub const fn natural(mut self, allow: bool) -> Self {
        self.natural = Some(allow);
        self
    }

    /// Returns true if no flag is set.
    pub const fn is_empty(&self) -> bool {
        self.int32.is_none()
            && self.uint32.is_none()
            && self.int64.is_none()
            && self.uint64.is_none()
            && self.natural.is_none()
    }

    /// Builds the rule validator.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoConstraints`] when no flag is set.
    pub fn build(&self) -> ConfigResult<RuleValidator<i128>> {
        if self.is_empty() {
            return Err(ConfigError::NoConstraints);
        }

        let domains = [
            (self.int32, Range::between(INT32_MIN, INT32_MAX)?),
            (self.uint32, Range::between(UINT32_MIN, UINT32_MAX)?),
            (self.int64, Range::between(INT64_MIN, INT64_MAX)?),
            (self.uint64, Range::between(UINT64_MIN, UINT64_MAX)?),
            (self.natural, Range::at_least(NATURAL_MIN)?),
        ];

        RuleValidator::new(
            domains
                .into_iter()
                .filter_map(|(flag, range)| flag.map(|allow| Rule::new(range, allow))),
        )
    }
}

/// Values must fit in a signed 32-bit integer.
pub fn int32() -> ConfigResult<RuleValidator<i128>> {
    IntCoverage::new().int32(true).build()
}

/// Values must fit in an unsigned 32-bit integer.
pub fn uint32() -> ConfigResult<RuleValidator<i128>> {
    IntCoverage::new().uint32(true).build()
}

/// Values must fit in a signed 64-bit integer.
pub fn int64() -> ConfigResult<RuleValidator<i128>> {
    IntCoverage::new().int64(true).build()
}

/// Values must fit in an unsigned 64-bit integer.
pub fn uint64() -> ConfigResult<RuleValidator<i128>> {
    IntCoverage::new().uint64(true).build()
}

/// Values must be natural numbers (`>= 1`).
pub fn natural() -> ConfigResult<RuleValidator<i128>> {
    IntCoverage::new().natural(true).build()
}

// ============================================================================
// TIME BUDGET
// ============================================================================

/// Converts a wall-clock limit into an upper bound on operation counts.
///
/// The bound is `floor(throughput * seconds)` with no lower bound. Values are
/// integer operation counts, so flooring does not change which counts are
/// accepted.
///
/// # Examples
///
/// ```
/// use ojkit_validator::validators::TimeBudget;
/// use ojkit_validator::foundation::Validate;
///
/// let validator = TimeBudget::new(2.0).build().unwrap();
/// assert!(validator.evaluate(&1_000_000_000));
/// assert!(!validator.evaluate(&1_000_000_001));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeBudget {
    /// Time limit in seconds.
    pub seconds: f64,
    /// Operations per second.
    #[serde(default = "default_throughput")]
    pub throughput: f64,
}

fn default_throughput() -> f64 {
    DEFAULT_THROUGHPUT
}

impl TimeBudget {
    /// A budget of `seconds` at [`DEFAULT_THROUGHPUT`].
    pub const fn new(seconds: f64) -> Self {
        Self {
            seconds,
            throughput: DEFAULT_THROUGHPUT,
        }
    }

    /// Overrides the assumed operations per second.
    pub const fn with_throughput(mut self, throughput: f64) -> Self {
        self.throughput = throughput;
        self
    }

    /// The largest permitted operation count.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidTimeBudget`] when either factor is negative or
    /// not finite, or the product does not fit in `i128`.
    pub fn max_operations(&self) -> ConfigResult<i128> {
        for (name, factor) in [("seconds", self.seconds), ("throughput", self.throughput)] {
            if !factor.is_finite() || factor < 0.0 {
                return Err(ConfigError::invalid_time_budget(format!(
                    "{name} must be a finite non-negative number, got {factor}"
                )));
            }
        }

        let product = (self.throughput * self.seconds).floor();
        if product >= i128::MAX as f64 {
            return Err(ConfigError::invalid_time_budget(format!(
                "{} operations per second for {}s overflows the operation count",
                self.throughput, self.seconds
            )));
        }
        Ok(product as i128)
    }

    /// Builds the range validator `(-inf, max_operations]`.
    pub fn build(&self) -> ConfigResult<RangeValidator<i128>> {
        let hi = self.max_operations()?;
        RangeValidator::new(None, Some(hi))
    }
}

/// Shortcut for `TimeBudget::new(seconds).build()`.
pub fn time_budget(seconds: f64) -> ConfigResult<RangeValidator<i128>> {
    TimeBudget::new(seconds).build()
}

// ============================================================================
// TESTS
// ============================================================================
