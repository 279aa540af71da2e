//! Test-case identifiers
//!
//! An id names the `{id}.in` / `{id}.out` pair inside an archive, so it must
//! be a plain, non-empty file stem. Ids come from the caller, from an
//! [`IdAllocator`] the caller owns, or from the test-case content itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::ProblemError;

/// Hex digits kept from the SHA-256 of a content-addressed id.
const CONTENT_ID_LEN: usize = 12;

/// A validated test-case id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TestCaseId(String);

impl TestCaseId {
    /// Validates and wraps an id.
    ///
    /// # Errors
    ///
    /// [`ProblemError::InvalidId`] for an empty id, a path separator, a
    /// leading dot or a control character.
    pub fn new(id: impl Into<String>) -> Result<Self, ProblemError> {
        let id = id.into();
        let reason = if id.is_empty() {
            Some("must not be empty")
        } else if id.contains(['/', '\\']) {
            Some("must not contain path separators")
        } else if id.starts_with('.') {
            Some("must not start with a dot")
        } else if id.chars().any(char::is_control) {
            Some("must not contain control characters")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ProblemError::InvalidId { id, reason }),
            None => Ok(Self(id)),
        }
    }

    /// Derives an id from the SHA-256 of the input and output text.
    ///
    /// Identical test cases map to the same id, which makes duplicates
    /// detectable when they are added to a problem.
    pub fn from_content(input: &str, output: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(input.as_bytes());
        hasher.update([0_u8]);
        hasher.update(output.as_bytes());
        let mut digest = hex::encode(hasher.finalize());
        digest.truncate(CONTENT_ID_LEN);
        Self(digest)
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TestCaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TestCaseId {
    type Err = ProblemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TestCaseId {
    type Error = ProblemError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TestCaseId> for String {
    fn from(id: TestCaseId) -> Self {
        id.0
    }
}

impl AsRef<str> for TestCaseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Hands out sequential ids `"1"`, `"2"`, … .
///
/// Each allocator counts independently; two problems built side by side
/// never share a counter. The sequence ends after `u64::MAX`.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: Option<u64>,
}

impl IdAllocator {
    /// An allocator whose first id is `"1"`.
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// An allocator whose first id is `start`.
    pub const fn starting_at(start: u64) -> Self {
        Self { next: Some(start) }
    }

    /// Returns the next id, or `None` once the counter is exhausted.
    pub fn next_id(&mut self) -> Option<TestCaseId> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(TestCaseId(current.to_string()))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for IdAllocator {
    type Item = TestCaseId;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("a/b")]
    #[case("a\\b")]
    #[case(".hidden")]
    #[case("tab\tid")]
    fn test_invalid_ids(#[case] id: &str) {
        assert!(matches!(
            TestCaseId::new(id),
            Err(ProblemError::InvalidId { .. })
        ));
    }

    #[test]
    fn test_valid_id() {
        let id: TestCaseId = "sample-1".parse().unwrap();
        assert_eq!(id.as_str(), "sample-1");
        assert_eq!(id.to_string(), "sample-1");
    }

    #[test]
    fn test_allocators_are_independent() {
        let mut first = IdAllocator::new();
        let mut second = IdAllocator::new();

        assert_eq!(first.next_id().unwrap().as_str(), "1");
        assert_eq!(first.next_id().unwrap().as_str(), "2");
        assert_eq!(second.next_id().unwrap().as_str(), "1");
    }

    #[test]
    fn test_allocator_start() {
        let ids: Vec<String> = IdAllocator::starting_at(10)
            .take(3)
            .map(String::from)
            .collect();
        assert_eq!(ids, vec!["10", "11", "12"]);
    }

    #[test]
    fn test_allocator_starts_exactly_at_zero() {
        let mut ids = IdAllocator::starting_at(0);
        assert_eq!(ids.next_id().unwrap().as_str(), "0");
        assert_eq!(ids.next_id().unwrap().as_str(), "1");
    }

    #[test]
    fn test_allocator_ends_after_max() {
        let mut ids = IdAllocator::starting_at(u64::MAX);
        assert_eq!(ids.next_id().unwrap().as_str(), u64::MAX.to_string());
        assert!(ids.next_id().is_none());
        assert_eq!(ids.next(), None);
    }

    #[test]
    fn test_content_ids() {
        let a = TestCaseId::from_content("1 2\n", "3\n");
        let b = TestCaseId::from_content("1 2\n", "3\n");
        let c = TestCaseId::from_content("1 2\n3\n", "");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_str().len(), CONTENT_ID_LEN);
        assert!(TestCaseId::new(a.as_str()).is_ok());
    }

    #[test]
    fn test_serde_validates() {
        let id: TestCaseId = serde_json::from_str(r#""7""#).unwrap();
        assert_eq!(id.as_str(), "7");
        assert!(serde_json::from_str::<TestCaseId>(r#""../x""#).is_err());
    }
}
