use std::path::{Path, PathBuf};

/// Error type for test-case and problem operations.
///
/// Covers id rules, missing or duplicate test cases, file-system access,
/// manifest serialization and archive writing.
#[derive(Debug, thiserror::Error)]
pub enum ProblemError {
    /// Test-case id does not meet naming rules.
    #[error("invalid test case id `{id}`: {reason}")]
    InvalidId { id: String, reason: &'static str },

    /// A test case with the same id was already added.
    #[error("test case already exists: `{id}`")]
    DuplicateTestCase { id: String },

    /// Only one half of an `.in`/`.out` pair was found on disk.
    #[error("test case `{id}` has no matching {missing} file in {}", dir.display())]
    MissingPair {
        id: String,
        missing: &'static str,
        dir: PathBuf,
    },

    /// File-system access failed.
    #[error("i/o error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The `info` manifest could not be serialized.
    #[error("manifest serialization failed: {0}")]
    Manifest(#[from] serde_json::Error),

    /// The zip archive could not be written.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

impl ProblemError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidId { .. } => "PROBLEM_INVALID_ID",
            Self::DuplicateTestCase { .. } => "PROBLEM_DUPLICATE",
            Self::MissingPair { .. } => "PROBLEM_MISSING_PAIR",
            Self::Io { .. } => "PROBLEM_IO",
            Self::Manifest(_) => "PROBLEM_MANIFEST",
            Self::Archive(_) => "PROBLEM_ARCHIVE",
        }
    }

    pub(crate) fn io(path: impl AsRef<Path>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        move |source| Self::Io { path, source }
    }
}

/// Result type for problem operations.
pub type ProblemResult<T> = Result<T, ProblemError>;
