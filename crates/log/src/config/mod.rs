//! Configuration types
//!
//! - [`Config`]: filter, output format, display flags
//! - presets: `from_env`, `development`, `production`

mod presets;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LogError;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level filter (e.g., "info", "debug,ojkit_problem=trace")
    pub level: String,

    /// Output format
    pub format: Format,

    /// Display configuration
    pub display: DisplayConfig,

    /// Service name recorded on the root span
    pub service: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Compact,
            display: DisplayConfig::default(),
            service: None,
        }
    }
}

/// Output format
///
/// Deserializes from any casing of its name, like [`FromStr`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable with colors and indentation
    Pretty,
    /// Compact single-line output
    #[default]
    Compact,
    /// Structured JSON output
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => f.write_str("pretty"),
            Self::Compact => f.write_str("compact"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for Format {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(LogError::Format(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Format {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Display configuration
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show timestamps
    #[serde(deserialize_with = "crate::flag::deserialize")]
    pub time: bool,
    /// Show source location (`file:line`)
    #[serde(deserialize_with = "crate::flag::deserialize")]
    pub source: bool,
    /// Show target module
    #[serde(deserialize_with = "crate::flag::deserialize")]
    pub target: bool,
    /// Show thread names
    #[serde(deserialize_with = "crate::flag::deserialize")]
    pub thread_names: bool,
    /// Use ANSI colors
    #[serde(deserialize_with = "crate::flag::deserialize")]
    pub colors: bool,
    /// Flatten JSON events
    #[serde(deserialize_with = "crate::flag::deserialize")]
    pub flatten: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: cfg!(debug_assertions),
            target: true,
            thread_names: false,
            colors: std::io::IsTerminal::is_terminal(&std::io::stderr()),
            flatten: true,
        }
    }
}

impl DisplayConfig {
    /// Applies `OJKIT_LOG_TIME`, `OJKIT_LOG_SOURCE` and `OJKIT_LOG_COLORS`.
    pub(crate) fn parse_env(&mut self, var: &impl Fn(&str) -> Option<String>) {
        let flag = |v: String| crate::flag::parse(&v).unwrap_or(true);
        if let Some(v) = var("OJKIT_LOG_TIME") {
            self.time = flag(v);
        }
        if let Some(v) = var("OJKIT_LOG_SOURCE") {
            self.source = flag(v);
        }
        if let Some(v) = var("OJKIT_LOG_COLORS") {
            self.colors = flag(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("pretty", Format::Pretty)]
    #[case("COMPACT", Format::Compact)]
    #[case("Json", Format::Json)]
    fn test_format_from_str(#[case] input: &str, #[case] expected: Format) {
        assert_eq!(input.parse::<Format>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_format() {
        let error = "logfmt".parse::<Format>().unwrap_err();
        assert_eq!(error, LogError::Format("logfmt".into()));
        assert_eq!(error.code(), "LOG_FORMAT");
    }

    #[rstest]
    #[case(r#""json""#, Format::Json)]
    #[case(r#""JSON""#, Format::Json)]
    #[case(r#""Pretty""#, Format::Pretty)]
    fn test_format_deserializes_any_case(#[case] json: &str, #[case] expected: Format) {
        assert_eq!(serde_json::from_str::<Format>(json).unwrap(), expected);
        assert_eq!(serde_json::to_string(&expected).unwrap(), format!("\"{expected}\""));
    }

    #[test]
    fn test_unknown_format_does_not_deserialize() {
        assert!(serde_json::from_str::<Format>(r#""logfmt""#).is_err());
    }

    #[test]
    fn test_display_flags_accept_numbers_and_words() {
        let display: DisplayConfig =
            serde_json::from_str(r#"{"time": 0, "colors": "off", "source": "YES"}"#).unwrap();
        assert!(!display.time);
        assert!(!display.colors);
        assert!(display.source);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{"level":"debug","format":"json"}"#).unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.service, None);
    }
}
