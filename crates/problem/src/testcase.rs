//! A single input/output pair

use std::fs;
use std::path::Path;
use std::str::FromStr;

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

use crate::error::{ProblemError, ProblemResult};
use crate::id::TestCaseId;
use crate::normalize::normalize;

/// One test case: an id plus the input and expected output text.
///
/// # Examples
///
/// ```
/// use ojkit_problem::{TestCase, TestCaseId};
///
/// let case = TestCase::new(TestCaseId::new("1").unwrap())
///     .with_input("2\n1 2\n")
///     .with_output("3\n");
///
/// assert_eq!(case.input_name(), "1.in");
/// assert_eq!(case.output_name(), "1.out");
/// assert_eq!(case.input_tokens::<i64>().unwrap(), vec![2, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    id: TestCaseId,
    input: String,
    output: String,
}

/// The per-test-case record of the `info` manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseEntry {
    /// Hex MD5 of the output with surrounding whitespace trimmed.
    pub stripped_output_md5: String,
    /// Byte length of the input.
    pub input_size: usize,
    /// Byte length of the output.
    pub output_size: usize,
    /// `{id}.in`
    pub input_name: String,
    /// `{id}.out`
    pub output_name: String,
}

/// Parses every whitespace-separated token of `text` as `T`.
///
/// # Errors
///
/// Returns the first token that fails to parse, with its parse error.
pub fn parse_tokens<T: FromStr>(text: &str) -> Result<Vec<T>, (String, T::Err)> {
    text.split_whitespace()
        .map(|token| token.parse().map_err(|e| (token.to_owned(), e)))
        .collect()
}

impl TestCase {
    /// An empty test case.
    pub fn new(id: TestCaseId) -> Self {
        Self {
            id,
            input: String::new(),
            output: String::new(),
        }
    }

    /// A test case whose id is derived from its content.
    pub fn from_content(input: impl Into<String>, output: impl Into<String>) -> Self {
        let input = input.into();
        let output = output.into();
        Self {
            id: TestCaseId::from_content(&input, &output),
            input,
            output,
        }
    }

    /// Sets the input text.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    /// Sets the expected output text.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// Applies [`normalize`] to both input and output.
    #[must_use = "builder methods must be chained or built"]
    pub fn normalized(mut self) -> Self {
        self.input = normalize(&self.input);
        self.output = normalize(&self.output);
        self
    }

    pub fn id(&self) -> &TestCaseId {
        &self.id
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn input_size(&self) -> usize {
        self.input.len()
    }

    pub fn output_size(&self) -> usize {
        self.output.len()
    }

    /// File name of the input inside an archive.
    pub fn input_name(&self) -> String {
        format!("{}.in", self.id)
    }

    /// File name of the output inside an archive.
    pub fn output_name(&self) -> String {
        format!("{}.out", self.id)
    }

    /// Hex MD5 of the output with surrounding whitespace trimmed.
    ///
    /// Judges compare this against the trimmed output of a submission.
    pub fn stripped_output_md5(&self) -> String {
        hex::encode(Md5::digest(self.output.trim().as_bytes()))
    }

    /// Parses every whitespace-separated token of the input as `T`.
    ///
    /// # Errors
    ///
    /// Returns the first token that fails to parse, with its parse error.
    pub fn input_tokens<T: FromStr>(&self) -> Result<Vec<T>, (String, T::Err)> {
        parse_tokens(&self.input)
    }

    /// The manifest record for this test case.
    pub fn manifest_entry(&self) -> TestCaseEntry {
        TestCaseEntry {
            stripped_output_md5: self.stripped_output_md5(),
            input_size: self.input_size(),
            output_size: self.output_size(),
            input_name: self.input_name(),
            output_name: self.output_name(),
        }
    }

    /// Writes `{id}.in` and `{id}.out` into `dir`.
    pub fn write_files(&self, dir: impl AsRef<Path>) -> ProblemResult<()> {
        let dir = dir.as_ref();
        for (name, content) in [
            (self.input_name(), &self.input),
            (self.output_name(), &self.output),
        ] {
            let path = dir.join(name);
            fs::write(&path, content).map_err(ProblemError::io(&path))?;
        }
        tracing::trace!(id = %self.id, dir = %dir.display(), "wrote test case files");
        Ok(())
    }
}
