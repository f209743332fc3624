//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::catalog::Product;
use crate::config::schema::StorefrontConfig;
use crate::config::validation::{check_products, validate_config, ValidationError};

/// Error type for configuration loading and backend construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Seed file error: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Invalid URL {0}")]
    Url(String),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<StorefrontConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: StorefrontConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Read a JSON array of products used to seed the in-memory catalog.
///
/// Seed entries get the same id and price checks as inline products.
pub fn load_seed_products(path: &Path) -> Result<Vec<Product>, ConfigError> {
    let content = fs::read_to_string(path)?;
    let products: Vec<Product> = serde_json::from_str(&content)?;

    let errors = check_products(&products);
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors));
    }
    tracing::info!(path = %path.display(), count = products.len(), "Loaded catalog seed");
    Ok(products)
}
