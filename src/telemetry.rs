//! # Telemetry
//!
//! Tracing subscriber setup for the optimizer binary.

use crate::config::LoggingConfig;
use tracing_subscriber::{EnvFilter, fmt};

/// Builds the filter: `RUST_LOG` when set, the configured directive
/// otherwise.
#[must_use]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so stdout stays clean for command output. Calling this
/// twice keeps the first subscriber.
pub fn init(config: &LoggingConfig) {
    let filter = env_filter(config);
    let result = if config.json {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
