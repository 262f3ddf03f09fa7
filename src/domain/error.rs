use std::io;

use thiserror::Error;

/// Library-wide error type for simple-pagination setup operations.
///
/// Render calls never produce this type: they return the template engine's
/// own error unchanged.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file could not be parsed.
    #[error("Malformed pagination config: {0}")]
    MalformedConfig(#[from] toml::de::Error),

    /// Configuration parsed but failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Configuration file missing at the requested location.
    #[error("Pagination config not found: {0}")]
    ConfigMissing(String),
}

/// Configuration capability error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
