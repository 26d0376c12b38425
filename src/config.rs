//! # Configuration
//!
//! Layered runtime settings for the optimizer binary.
//!
//! Sources, lowest precedence first:
//!
//! ```text
//! built-in defaults → deazl.toml (optional) → DEAZL__* environment variables
//! ```
//!
//! Nested keys use a double underscore, e.g. `DEAZL__LOGGING__JSON=true` or
//! `DEAZL__OPTIMIZER__MAX_ITEMS_PER_REQUEST=200`. A `.env` file is read by
//! [`load`] before the environment is consulted.

use crate::application::use_cases::DEFAULT_MAX_ITEMS;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "DEAZL";

/// Default configuration file name, without extension.
pub const DEFAULT_CONFIG_FILE: &str = "deazl";

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Emit JSON log lines instead of human-readable ones.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

/// Optimizer limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Maximum number of items optimized in one request.
    pub max_items_per_request: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_items_per_request: DEFAULT_MAX_ITEMS,
        }
    }
}

/// Top-level application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Optimizer limits.
    pub optimizer: OptimizerConfig,
}

impl AppConfig {
    /// Builds settings from an optional file and an environment source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or a value has the
    /// wrong type.
    pub fn from_sources(file: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        builder = match file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };
        builder.add_source(env).build()?.try_deserialize()
    }

    /// Builds settings from TOML text, for embedding and tests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the text is not valid TOML for these
    /// settings.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

/// Returns the environment source for [`ENV_PREFIX`].
#[must_use]
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

/// Loads `.env`, then layers defaults, the config file and the environment.
///
/// # Errors
///
/// Returns `ConfigError` if a source is malformed.
pub fn load(file: Option<&Path>) -> Result<AppConfig, ConfigError> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env");
    }
    AppConfig::from_sources(file, environment())
}
