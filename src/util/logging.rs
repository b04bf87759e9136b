// LogWise - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - Host flag: debug_flag = true (sets the filter to debug)
//   - Host-supplied level string (e.g. from the embedding application's config)
//
// Output: stderr. Never logs raw log-line content above debug level.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem for an embedding host.
///
/// `debug_flag` is true when the host requested verbose diagnostics.
/// `host_level` is an optional level string supplied by the host.
///
/// Priority: RUST_LOG env var > debug_flag > host level > default "info".
pub fn init(debug_flag: bool, host_level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else if let Some(level) = host_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}
