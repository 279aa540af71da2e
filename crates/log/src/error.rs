//! Error handling for ojkit-log

/// Errors raised while configuring or installing the logger.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    /// The filter directive could not be parsed.
    #[error("invalid filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },

    /// Unknown output format name.
    #[error("unknown log format '{0}' (expected pretty, compact or json)")]
    Format(String),

    /// A global subscriber is already installed.
    #[error("failed to install logger: {0}")]
    Init(String),
}

impl LogError {
    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Filter { .. } => "LOG_FILTER",
            Self::Format(_) => "LOG_FORMAT",
            Self::Init(_) => "LOG_INIT",
        }
    }
}

/// Result type for logging operations.
pub type LogResult<T> = Result<T, LogError>;
