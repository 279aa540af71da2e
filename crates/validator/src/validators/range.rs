//! Inclusive ranges with optionally open sides

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::foundation::{ConfigError, ConfigResult, Validate, ValidationError};

// ============================================================================
// RANGE PREDICATE
// ============================================================================

/// Returns whether `value` lies in the inclusive interval `[lo, hi]`.
///
/// An absent bound leaves that side unbounded.
///
/// # Examples
///
/// ```
/// use ojkit_validator::validators::within;
///
/// assert!(within(&5, Some(&0), Some(&10)));
/// assert!(within(&10, Some(&0), Some(&10)));
/// assert!(!within(&11, Some(&0), Some(&10)));
/// assert!(within(&-1_000, None, Some(&10)));
/// assert!(within(&i64::MAX, None, None));
/// ```
#[inline]
pub fn within<T: PartialOrd>(value: &T, lo: Option<&T>, hi: Option<&T>) -> bool {
    if lo.is_some_and(|lo| value < lo) {
        return false;
    }
    if hi.is_some_and(|hi| value > hi) {
        return false;
    }
    true
}

// ============================================================================
// RANGE
// ============================================================================

/// An inclusive interval `[lo, hi]` where either side may be unbounded.
///
/// Both bounds present implies `lo <= hi`; [`Range::new`] refuses anything
/// else, so a constructed `Range` is always well ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range<T> {
    lo: Option<T>,
    hi: Option<T>,
}

impl<T> Range<T> {
    /// A range with no bounds; every value lies inside it.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { lo: None, hi: None }
    }

    /// The lower bound, if any.
    pub fn lo(&self) -> Option<&T> {
        self.lo.as_ref()
    }

    /// The upper bound, if any.
    pub fn hi(&self) -> Option<&T> {
        self.hi.as_ref()
    }
}

impl<T: PartialOrd + Display> Range<T> {
    /// Creates a range from optional bounds.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvertedBounds`] when both bounds are set and `lo > hi`.
    /// - [`ConfigError::IncomparableBound`] when a bound is NaN.
    pub fn new(lo: Option<T>, hi: Option<T>) -> ConfigResult<Self> {
        for bound in lo.iter().chain(hi.iter()) {
            if bound.partial_cmp(bound).is_none() {
                return Err(ConfigError::IncomparableBound {
                    bound: bound.to_string(),
                });
            }
        }
        if let (Some(lo), Some(hi)) = (&lo, &hi)
            && lo > hi
        {
            return Err(ConfigError::inverted_bounds(lo, hi));
        }
        Ok(Self { lo, hi })
    }

    /// Creates `[lo, hi]`.
    pub fn between(lo: T, hi: T) -> ConfigResult<Self> {
        Self::new(Some(lo), Some(hi))
    }

    /// Creates `[lo, +inf)`.
    pub fn at_least(lo: T) -> ConfigResult<Self> {
        Self::new(Some(lo), None)
    }

    /// Creates `(-inf, hi]`.
    pub fn at_most(hi: T) -> ConfigResult<Self> {
        Self::new(None, Some(hi))
    }
}

impl<T: PartialOrd> Range<T> {
    /// Returns whether `value` lies inside this range.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        within(value, self.lo.as_ref(), self.hi.as_ref())
    }
}

impl<T> Default for Range<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: Display> Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lo {
            Some(lo) => write!(f, "[{lo}, ")?,
            None => write!(f, "(-inf, ")?,
        }
        match &self.hi {
            Some(hi) => write!(f, "{hi}]"),
            None => write!(f, "+inf)"),
        }
    }
}

/// Deserialization re-checks bound ordering.
impl<'de, T> Deserialize<'de> for Range<T>
where
    T: Deserialize<'de> + PartialOrd + Display,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawRange<T> {
            lo: Option<T>,
            hi: Option<T>,
        }

        let raw = RawRange::<T>::deserialize(deserializer)?;
        Self::new(raw.lo, raw.hi).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// RANGE VALIDATOR
// ============================================================================

/// Accepts a value iff it lies inside a single range.
///
/// # Examples
///
/// ```
/// use ojkit_validator::validators::RangeValidator;
/// use ojkit_validator::foundation::Validate;
///
/// let validator = RangeValidator::new(Some(1), None).unwrap();
/// assert!(validator.evaluate(&1));
/// assert!(!validator.evaluate(&0));
///
/// assert!(RangeValidator::new(Some(5), Some(3)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeValidator<T> {
    range: Range<T>,
}

impl<T: PartialOrd + Display> RangeValidator<T> {
    /// Creates a validator from optional bounds.
    ///
    /// # Errors
    ///
    /// Fails like [`Range::new`].
    pub fn new(lo: Option<T>, hi: Option<T>) -> ConfigResult<Self> {
        let range = Range::new(lo, hi)?;
        tracing::debug!(%range, "built range validator");
        Ok(Self { range })
    }
}

impl<T> RangeValidator<T> {
    /// Wraps an already validated range.
    pub const fn from_range(range: Range<T>) -> Self {
        Self { range }
    }

    /// The accepted range.
    pub fn range(&self) -> &Range<T> {
        &self.range
    }
}

impl<T> From<Range<T>> for RangeValidator<T> {
    fn from(range: Range<T>) -> Self {
        Self::from_range(range)
    }
}

impl<T: PartialOrd + Display> Validate for RangeValidator<T> {
    type Input = T;

    #[inline]
    fn evaluate(&self, input: &T) -> bool {
        self.range.contains(input)
    }

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if let Some(lo) = self.range.lo()
            && input < lo
        {
            return Err(ValidationError::below_min(lo, input));
        }
        if let Some(hi) = self.range.hi()
            && input > hi
        {
            return Err(ValidationError::above_max(hi, input));
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
