//! Pagination configuration loading from disk.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, PaginationConfig, parse_config_content};

/// Load and validate pagination configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<PaginationConfig, AppError> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => AppError::ConfigMissing(path.display().to_string()),
        _ => AppError::Io(err),
    })?;
    let config = parse_config_content(&content)?;
    log::debug!(
        "loaded pagination config from {} (default template '{}')",
        path.display(),
        config.default_template
    );
    Ok(config)
}

/// Like [`load_config`], but a missing file yields the built-in defaults.
pub fn load_config_or_default(path: &Path) -> Result<PaginationConfig, AppError> {
    match load_config(path) {
        Err(AppError::ConfigMissing(_)) => Ok(PaginationConfig::default()),
        other => other,
    }
}
