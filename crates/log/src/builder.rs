//! Logger builder implementation

use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{Config, DisplayConfig, Format};
use crate::error::{LogError, LogResult};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the logger alive
///
/// Holds the root span while a service name is configured; dropping the
/// guard exits it.
#[derive(Debug)]
#[must_use = "dropping the guard exits the root span"]
pub struct LoggerGuard {
    _root_span: Option<tracing::span::EnteredSpan>,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// The filter this builder installs.
    ///
    /// # Errors
    ///
    /// [`LogError::Filter`] if the level string is not a valid directive.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })
    }

    /// Build and install the logger as the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;
        let fmt_layer = fmt_layer(self.config.format, &self.config.display);

        Registry::default()
            .with(fmt_layer)
            .with(filter)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;

        let root_span = self.config.service.as_deref().map(|service| {
            tracing::info_span!("app", service = service).entered()
        });

        Ok(LoggerGuard {
            _root_span: root_span,
        })
    }
}

impl LoggerGuard {
    pub(crate) const fn noop() -> Self {
        Self { _root_span: None }
    }
}

/// The stderr format layer for `format` with `display` applied.
fn fmt_layer(format: Format, display: &DisplayConfig) -> BoxedLayer {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(display.colors)
        .with_target(display.target)
        .with_file(display.source)
        .with_line_number(display.source)
        .with_thread_names(display.thread_names);

    match (format, display.time) {
        (Format::Pretty, true) => layer.pretty().boxed(),
        (Format::Pretty, false) => layer.without_time().pretty().boxed(),
        (Format::Compact, true) => layer.compact().boxed(),
        (Format::Compact, false) => layer.without_time().compact().boxed(),
        (Format::Json, true) => layer.json().flatten_event(display.flatten).boxed(),
        (Format::Json, false) => layer
            .without_time()
            .json()
            .flatten_event(display.flatten)
            .boxed(),
    }
}
