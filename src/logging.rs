//! Logging setup for binaries and notebooks embedding seqdyn

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug` or `seqdyn_sequence=trace`)
pub const LOG_ENV: &str = "SEQDYN_LOG";

/// Install a `tracing` fmt subscriber filtered by `SEQDYN_LOG` (default `info`).
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging() -> bool {
    let log_level = std::env::var(LOG_ENV).unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .is_ok()
}
