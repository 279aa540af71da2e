//! Problems and judge archives
//!
//! A [`Problem`] owns its test cases and knows how to lay them out for a
//! judge: one `{id}.in` and `{id}.out` per case plus an `info` manifest.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{ProblemError, ProblemResult};
use crate::id::TestCaseId;
use crate::testcase::{TestCase, TestCaseEntry};

/// File name of the manifest inside a problem directory or archive.
pub const MANIFEST_NAME: &str = "info";

/// The `info` manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Whether the problem uses a special judge.
    pub spj: bool,
    pub testcases: BTreeMap<TestCaseId, TestCaseEntry>,
}

/// A titled collection of test cases.
#[derive(Debug, Clone, Default)]
pub struct Problem {
    title: String,
    spj: bool,
    testcases: BTreeMap<TestCaseId, TestCase>,
}

impl Problem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            spj: false,
            testcases: BTreeMap::new(),
        }
    }

    /// Marks the problem as judged by a special judge.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_spj(mut self, spj: bool) -> Self {
        self.spj = spj;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn spj(&self) -> bool {
        self.spj
    }

    pub fn len(&self) -> usize {
        self.testcases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.testcases.is_empty()
    }

    /// Test cases in id order.
    pub fn testcases(&self) -> impl Iterator<Item = &TestCase> {
        self.testcases.values()
    }

    pub fn get(&self, id: &TestCaseId) -> Option<&TestCase> {
        self.testcases.get(id)
    }

    /// Adds a test case.
    ///
    /// # Errors
    ///
    /// [`ProblemError::DuplicateTestCase`] if the id is already taken.
    pub fn add_testcase(&mut self, testcase: TestCase) -> ProblemResult<()> {
        match self.testcases.entry(testcase.id().clone()) {
            Entry::Occupied(entry) => Err(ProblemError::DuplicateTestCase {
                id: entry.key().to_string(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(testcase);
                Ok(())
            }
        }
    }

    /// Applies [`TestCase::normalized`] to every test case.
    #[must_use = "builder methods must be chained or built"]
    pub fn normalized(mut self) -> Self {
        self.testcases = self
            .testcases
            .into_iter()
            .map(|(id, case)| (id, case.normalized()))
            .collect();
        self
    }

    pub fn manifest(&self) -> Manifest {
        Manifest {
            spj: self.spj,
            testcases: self
                .testcases
                .iter()
                .map(|(id, case)| (id.clone(), case.manifest_entry()))
                .collect(),
        }
    }

    /// The manifest as JSON with every non-ASCII character escaped.
    pub fn manifest_json(&self) -> ProblemResult<String> {
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
        self.manifest().serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// `./{title}.zip`
    pub fn default_archive_path(&self) -> PathBuf {
        PathBuf::from(".").join(format!("{}.zip", self.title))
    }

    /// `./{title}`
    pub fn default_dir_path(&self) -> PathBuf {
        PathBuf::from(".").join(&self.title)
    }

    /// Writes every test case and the manifest into `dir`, creating it.
    pub fn write_dir(&self, dir: impl AsRef<Path>) -> ProblemResult<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(ProblemError::io(dir))?;
        for case in self.testcases.values() {
            case.write_files(dir)?;
        }
        let manifest = dir.join(MANIFEST_NAME);
        fs::write(&manifest, self.manifest_json()?).map_err(ProblemError::io(&manifest))?;

        tracing::info!(
            title = %self.title,
            testcases = self.testcases.len(),
            dir = %dir.display(),
            "problem directory written"
        );
        Ok(())
    }

    /// Writes every test case and the manifest into a zip archive.
    pub fn write_zip(&self, path: impl AsRef<Path>) -> ProblemResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(ProblemError::io(path))?;
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        for case in self.testcases.values() {
            zip.start_file(case.input_name(), options)?;
            zip.write_all(case.input().as_bytes())
                .map_err(ProblemError::io(path))?;
            zip.start_file(case.output_name(), options)?;
            zip.write_all(case.output().as_bytes())
                .map_err(ProblemError::io(path))?;
        }
        zip.start_file(MANIFEST_NAME, options)?;
        zip.write_all(self.manifest_json()?.as_bytes())
            .map_err(ProblemError::io(path))?;
        zip.finish()?;

        tracing::info!(
            title = %self.title,
            testcases = self.testcases.len(),
            path = %path.display(),
            "archive written"
        );
        Ok(())
    }

    /// Loads every `X.in` / `X.out` pair from `dir`.
    ///
    /// Files with other extensions are ignored.
    ///
    /// # Errors
    ///
    /// [`ProblemError::MissingPair`] when only one half of a pair exists,
    /// [`ProblemError::InvalidId`] when a file stem is not a valid id.
    pub fn load_dir(title: impl Into<String>, dir: impl AsRef<Path>) -> ProblemResult<Self> {
        let dir = dir.as_ref();
        let mut inputs = BTreeMap::new();
        let mut outputs = BTreeMap::new();

        for entry in fs::read_dir(dir).map_err(ProblemError::io(dir))? {
            let path = entry.map_err(ProblemError::io(dir))?.path();
            if !path.is_file() {
                continue;
            }
            let (Some(stem), Some(ext)) = (
                path.file_stem().and_then(|s| s.to_str()),
                path.extension().and_then(|s| s.to_str()),
            ) else {
                continue;
            };
            let side = match ext {
                "in" => &mut inputs,
                "out" => &mut outputs,
                _ => continue,
            };
            side.insert(stem.to_owned(), path);
        }

        let mut problem = Self::new(title);
        for (stem, input_path) in &inputs {
            let Some(output_path) = outputs.remove(stem) else {
                return Err(ProblemError::MissingPair {
                    id: stem.clone(),
                    missing: "output",
                    dir: dir.to_path_buf(),
                });
            };
            let case = TestCase::new(TestCaseId::new(stem.as_str())?)
                .with_input(read(input_path)?)
                .with_output(read(&output_path)?);
            problem.add_testcase(case)?;
        }
        if let Some(stem) = outputs.into_keys().next() {
            return Err(ProblemError::MissingPair {
                id: stem,
                missing: "input",
                dir: dir.to_path_buf(),
            });
        }

        tracing::debug!(
            dir = %dir.display(),
            testcases = problem.len(),
            "loaded test cases"
        );
        Ok(problem)
    }
}

fn read(path: &Path) -> ProblemResult<String> {
    fs::read_to_string(path).map_err(ProblemError::io(path))
}

/// JSON with `", "` / `": "` separators and non-ASCII characters escaped
/// as `\uXXXX`.
struct AsciiFormatter;

impl serde_json::ser::Formatter for AsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0_u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Problem {
        let mut problem = Problem::new("A+B");
        problem
            .add_testcase(
                TestCase::new(TestCaseId::new("1").unwrap())
                    .with_input("1 2\n")
                    .with_output("3\n"),
            )
            .unwrap();
        problem
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut problem = sample();
        let error = problem
            .add_testcase(TestCase::new(TestCaseId::new("1").unwrap()))
            .unwrap_err();
        assert!(matches!(error, ProblemError::DuplicateTestCase { ref id } if id == "1"));
        assert_eq!(problem.len(), 1);
    }

    #[test]
    fn test_manifest_json() {
        let json = sample().with_spj(true).manifest_json().unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"spj": true, "testcases": {"1": {"#,
                r#""stripped_output_md5": "eccbc87e4b5ce2fe28308fd9f2a7baf3", "#,
                r#""input_size": 4, "output_size": 2, "#,
                r#""input_name": "1.in", "output_name": "1.out"}}}"#
            )
        );
    }

    #[test]
    fn test_manifest_escapes_non_ascii() {
        let mut problem = Problem::new("unicode");
        problem
            .add_testcase(TestCase::new(TestCaseId::new("é😀").unwrap()))
            .unwrap();
        let json = problem.manifest_json().unwrap();

        assert!(json.is_ascii());
        assert!(json.contains(r#""\u00e9\ud83d\ude00.in""#));

        let manifest: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(manifest, problem.manifest());
    }

    #[test]
    fn test_default_archive_path() {
        assert_eq!(sample().default_archive_path(), Path::new("./A+B.zip"));
        assert_eq!(sample().default_dir_path(), Path::new("./A+B"));
    }

    #[test]
    fn test_normalized_problem() {
        let mut problem = Problem::new("p");
        problem
            .add_testcase(
                TestCase::new(TestCaseId::new("1").unwrap())
                    .with_input("  5  \n\n")
                    .with_output("\n 5"),
            )
            .unwrap();
        let problem = problem.normalized();
        let case = problem.testcases().next().unwrap();
        assert_eq!(case.input(), "5\n");
        assert_eq!(case.output(), "5\n");
    }
}
