//! Ordered allow/deny rules
//!
//! A [`RuleValidator`] scans its rules in insertion order and stops at the
//! first rule the value violates:
//!
//! - an **allow** rule is violated by a value *outside* its range;
//! - a **deny** rule is violated by a value *inside* its range.
//!
//! A value is accepted only when no rule is violated. Allow rules therefore
//! compose with AND ("inside every allowed range"), not OR, and deny rules
//! are independent exclusions.
//!
//! "Later rules take precedence" holds only in a narrow sense: a later rule
//! can reject a value that every earlier rule let through, but it can never
//! rescue a value an earlier allow rule already rejected. Order rules from
//! the most general to the most specific when layering is intended.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::foundation::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::validators::range::Range;

// ============================================================================
// RULE
// ============================================================================

/// A range tagged as required membership (allow) or forbidden membership
/// (deny).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + PartialOrd + Display"))]
pub struct Rule<T> {
    /// The sub-domain this rule talks about.
    pub range: Range<T>,
    /// `true` for allow, `false` for deny.
    pub allow: bool,
}

impl<T> Rule<T> {
    /// Creates a rule.
    pub const fn new(range: Range<T>, allow: bool) -> Self {
        Self { range, allow }
    }

    /// Values outside `range` are rejected.
    pub const fn allow(range: Range<T>) -> Self {
        Self::new(range, true)
    }

    /// Values inside `range` are rejected.
    pub const fn deny(range: Range<T>) -> Self {
        Self::new(range, false)
    }
}

impl<T: PartialOrd> Rule<T> {
    /// Returns whether `value` passes this rule on its own.
    #[inline]
    pub fn admits(&self, value: &T) -> bool {
        self.range.contains(value) == self.allow
    }
}

impl<T: Display> Display for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.allow { "allow" } else { "deny" };
        write!(f, "{verb} {}", self.range)
    }
}

// ============================================================================
// RULE VALIDATOR
// ============================================================================

/// Evaluates an ordered, non-empty list of [`Rule`]s with short-circuit
/// failure.
///
/// # Examples
///
/// ```
/// use ojkit_validator::validators::{Range, Rule, RuleValidator};
/// use ojkit_validator::foundation::Validate;
///
/// let validator = RuleValidator::new([
///     Rule::allow(Range::between(0, 100).unwrap()),
///     Rule::deny(Range::between(40, 60).unwrap()),
/// ])
/// .unwrap();
///
/// assert!(validator.evaluate(&10));
/// assert!(!validator.evaluate(&50)); // denied by the second rule
/// assert!(!validator.evaluate(&150)); // outside the first rule
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleValidator<T> {
    rules: SmallVec<[Rule<T>; 5]>,
}

impl<T: Display> RuleValidator<T> {
    /// Creates a validator from rules in priority order (first = lowest).
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyRules`] when `rules` yields nothing.
    pub fn new(rules: impl IntoIterator<Item = Rule<T>>) -> ConfigResult<Self> {
        let rules: SmallVec<[Rule<T>; 5]> = rules.into_iter().collect();
        if rules.is_empty() {
            return Err(ConfigError::EmptyRules);
        }
        tracing::debug!(
            rules = rules.len(),
            first = %rules[0],
            "built rule validator"
        );
        Ok(Self { rules })
    }
}

impl<T> RuleValidator<T> {
    /// The rules in evaluation order.
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }
}

impl<T: PartialOrd> RuleValidator<T> {
    /// Returns the index and rule of the first violation, scanning in
    /// insertion order.
    pub fn first_violation(&self, value: &T) -> Option<(usize, &Rule<T>)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| !rule.admits(value))
    }
}

impl<T: PartialOrd + Display> Validate for RuleValidator<T> {
    type Input = T;

    #[inline]
    fn evaluate(&self, input: &T) -> bool {
        self.rules.iter().all(|rule| rule.admits(input))
    }

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        match self.first_violation(input) {
            None => Ok(()),
            Some((index, rule)) if rule.allow => {
                Err(ValidationError::outside_allowed(index, &rule.range, input))
            }
            Some((index, rule)) => Err(ValidationError::inside_denied(index, &rule.range, input)),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn range(lo: i64, hi: i64) -> Range<i64> {
        Range::between(lo, hi).unwrap()
    }

    #[test]
    fn test_single_allow_rule() {
        let validator = RuleValidator::new([Rule::allow(range(0, 10))]).unwrap();
        assert!(validator.evaluate(&5));
        assert!(!validator.evaluate(&-1));
        assert!(validator.evaluate(&10));
        assert!(!validator.evaluate(&11));
    }

    #[test]
    fn test_allow_then_deny() {
        let validator =
            RuleValidator::new([Rule::allow(range(0, 100)), Rule::deny(range(40, 60))]).unwrap();

        assert!(!validator.evaluate(&50));
        assert!(validator.evaluate(&10));
        // Inside the allowed range and outside the denied band.
        assert!(validator.evaluate(&70));
        assert!(!validator.evaluate(&150));

        assert_eq!(validator.first_violation(&50).map(|(i, _)| i), Some(1));
        assert_eq!(validator.first_violation(&150).map(|(i, _)| i), Some(0));
    }

    #[test]
    fn test_allow_rules_are_conjunctive() {
        let validator =
            RuleValidator::new([Rule::allow(range(0, 10)), Rule::allow(range(5, 20))]).unwrap();

        assert!(validator.evaluate(&7));
        // In the first range only.
        assert!(!validator.evaluate(&3));
        // A later allow rule cannot rescue a value the first one rejected.
        assert!(!validator.evaluate(&15));
    }

    #[test]
    fn test_deny_only() {
        let validator = RuleValidator::new([Rule::deny(Range::at_most(0).unwrap())]).unwrap();
        assert!(validator.evaluate(&1));
        assert!(!validator.evaluate(&0));
        assert!(!validator.evaluate(&i64::MIN));
    }

    #[test]
    fn test_empty_rules_rejected() {
        let rules: Vec<Rule<i64>> = Vec::new();
        assert_eq!(RuleValidator::new(rules), Err(ConfigError::EmptyRules));
    }

    #[test]
    fn test_validate_reports_rule() {
        let validator =
            RuleValidator::new([Rule::allow(range(0, 100)), Rule::deny(range(40, 60))]).unwrap();

        let denied = validator.validate(&50).unwrap_err();
        assert_eq!(denied.code, "inside_denied");
        assert_eq!(denied.param("rule"), Some("1"));
        assert_eq!(denied.param("range"), Some("[40, 60]"));

        let outside = validator.validate(&-5).unwrap_err();
        assert_eq!(outside.code, "outside_allowed");
        assert_eq!(outside.param("rule"), Some("0"));
        assert_eq!(outside.param("actual"), Some("-5"));
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(Rule::allow(range(0, 1)).to_string(), "allow [0, 1]");
        assert_eq!(
            Rule::deny(Range::<i64>::unbounded()).to_string(),
            "deny (-inf, +inf)"
        );
    }
}
