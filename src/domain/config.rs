//! Pagination configuration (`[simple_pagination]` table).

use serde::Deserialize;

use super::error::{AppError, ConfigError};
use crate::adapters::bundled_templates::DEFAULT_TEMPLATE;

/// Root of a configuration file. Unknown tables are ignored so the section can
/// live inside a larger host configuration.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    simple_pagination: PaginationConfig,
}

/// Settings consumed by [`crate::PaginationExtension::from_config`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaginationConfig {
    /// Template rendered when a call does not name one.
    #[serde(default = "default_template")]
    pub default_template: String,
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { default_template: default_template() }
    }
}

impl PaginationConfig {
    pub fn new(default_template: impl Into<String>) -> Self {
        Self { default_template: default_template.into() }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_template.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "simple_pagination.default_template must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Parse and validate pagination configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<PaginationConfig, AppError> {
    let file: ConfigFile = toml::from_str(content)?;
    let config = file.simple_pagination;
    config.validate()?;
    Ok(config)
}
