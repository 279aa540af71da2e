//! Global subscriber installation
//!
//! Kept in a single test: the global dispatcher can be set once per process.

use ojkit_log::{Config, Format, LogError};

#[test]
fn install_once_then_reject() {
    let config = Config {
        level: "debug".to_string(),
        format: Format::Json,
        service: Some("ojkit-test".to_string()),
        ..Config::default()
    };

    let guard = ojkit_log::init_with(config).unwrap();
    tracing::info!(case = 1, "inside the root span");
    assert!(tracing::dispatcher::has_been_set());

    let second = ojkit_log::init();
    assert!(matches!(second, Err(LogError::Init(_))));

    // A configured process gets a no-op guard instead of an error.
    assert!(ojkit_log::auto_init().is_ok());

    drop(guard);
}
