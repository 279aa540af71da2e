//! # ojkit-log
//!
//! Logging setup shared by the ojkit binaries. Library crates only emit
//! `tracing` events; a binary installs a subscriber once at startup.
//!
//! ```no_run
//! fn main() -> Result<(), ojkit_log::LogError> {
//!     let _guard = ojkit_log::auto_init()?;
//!     tracing::info!(files = 3, "checking");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod builder;
mod config;
mod error;
pub mod flag;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

// ============================================================================
// Initialization Functions
// ============================================================================

/// Pick a configuration from the environment and build type, then install it
///
/// `OJKIT_LOG` or `RUST_LOG` selects [`Config::from_env`]; otherwise debug
/// builds get [`Config::development`] and release builds
/// [`Config::production`]. Returns a no-op guard when a global subscriber
/// is already installed.
pub fn auto_init() -> LogResult<LoggerGuard> {
    if tracing::dispatcher::has_been_set() {
        return Ok(LoggerGuard::noop());
    }

    if std::env::var_os("OJKIT_LOG").is_some() || std::env::var_os("RUST_LOG").is_some() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
