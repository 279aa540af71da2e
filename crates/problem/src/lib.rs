//! # ojkit-problem
//!
//! Test-case storage and judge archive packaging.
//!
//! A [`Problem`] collects [`TestCase`]s keyed by [`TestCaseId`] and writes
//! them out the way an online judge expects: `{id}.in`, `{id}.out` and an
//! `info` manifest carrying sizes, file names and the MD5 of each trimmed
//! output.
//!
//! ```
//! use ojkit_problem::{normalize, Problem, TestCase};
//!
//! let mut problem = Problem::new("a-plus-b");
//! problem
//!     .add_testcase(TestCase::from_content(normalize("1 2"), normalize("3")))
//!     .unwrap();
//!
//! let manifest = problem.manifest();
//! assert!(!manifest.spj);
//! assert_eq!(manifest.testcases.len(), 1);
//! ```

mod error;
mod id;
mod normalize;
mod problem;
mod testcase;

pub use error::{ProblemError, ProblemResult};
pub use id::{IdAllocator, TestCaseId};
pub use normalize::normalize;
pub use problem::{MANIFEST_NAME, Manifest, Problem};
pub use testcase::{TestCase, TestCaseEntry, parse_tokens};
