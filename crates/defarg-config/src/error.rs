//! Error types for defarg-config.

use defarg_core::{OverloadError, ParseVisibilityError};
use miette::Diagnostic;
use thiserror::Error;

/// Result type for defarg-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading a batch configuration.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file: {0}")]
    #[diagnostic(code(defarg::config::read))]
    ReadConfig(#[from] std::io::Error),

    /// Failed to parse TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    #[diagnostic(code(defarg::config::toml))]
    ParseToml(#[from] toml::de::Error),

    /// Failed to parse JSON configuration.
    #[error("Failed to parse JSON config: {0}")]
    #[diagnostic(code(defarg::config::json))]
    ParseJson(#[from] serde_json::Error),

    /// Configuration validation error.
    #[error("Config validation error: {0}")]
    #[diagnostic(code(defarg::config::validation))]
    Validation(String),

    /// Unknown visibility name.
    #[error("Method '{method}': {source}")]
    #[diagnostic(code(defarg::config::visibility))]
    Visibility {
        method: String,
        #[source]
        source: ParseVisibilityError,
    },

    /// A method or argument was rejected by the generator.
    #[error("Method '{method}': {source}")]
    #[diagnostic(code(defarg::config::method))]
    Overload {
        method: String,
        #[source]
        #[diagnostic_source]
        source: OverloadError,
    },
}
