//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that http backends carry a usable base URL
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Detect duplicate product ids in the inline catalog
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: StorefrontConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::catalog::Product;
use crate::config::schema::{BackendKind, StorefrontConfig};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    NonPositive(&'static str),

    #[error("{0} is required for the http backend")]
    MissingBaseUrl(&'static str),

    #[error("{field}: {value:?} is not an http(s) URL")]
    InvalidUrl { field: &'static str, value: String },

    #[error("cart.cookie.name {0:?} is not a valid cookie name")]
    InvalidCookieName(String),

    #[error("catalog: duplicate product id {0:?}")]
    DuplicateProduct(String),

    #[error("catalog: product {0:?} has a negative price")]
    NegativePrice(String),
}

pub fn validate_config(config: &StorefrontConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::NonPositive("timeouts.request_secs"));
    }
    if config.timeouts.upstream_connect_secs == 0 {
        errors.push(ValidationError::NonPositive("timeouts.upstream_connect_secs"));
    }
    if config.timeouts.upstream_request_secs == 0 {
        errors.push(ValidationError::NonPositive("timeouts.upstream_request_secs"));
    }
    if config.security.max_body_size == 0 {
        errors.push(ValidationError::NonPositive("security.max_body_size"));
    }
    if config.catalog.retries.enabled && config.catalog.retries.max_attempts == 0 {
        errors.push(ValidationError::NonPositive("catalog.retries.max_attempts"));
    }
    if config.cart.retries.enabled && config.cart.retries.max_attempts == 0 {
        errors.push(ValidationError::NonPositive("cart.retries.max_attempts"));
    }

    if config.catalog.backend == BackendKind::Http {
        check_base_url(&mut errors, "catalog.base_url", config.catalog.base_url.as_deref());
    }
    if config.cart.backend == BackendKind::Http {
        check_base_url(&mut errors, "cart.base_url", config.cart.base_url.as_deref());
    }

    if !is_cookie_token(&config.cart.cookie.name) {
        errors.push(ValidationError::InvalidCookieName(config.cart.cookie.name.clone()));
    }

    errors.extend(check_products(&config.catalog.products));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Catalog entries must have unique ids and non-negative prices.
pub fn check_products(products: &[Product]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    for product in products {
        if !seen.insert(product.id.as_str()) {
            errors.push(ValidationError::DuplicateProduct(product.id.clone()));
        }
        if product.price < 0 {
            errors.push(ValidationError::NegativePrice(product.id.clone()));
        }
    }
    errors
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn check_base_url(errors: &mut Vec<ValidationError>, field: &'static str, value: Option<&str>) {
    let Some(value) = value else {
        errors.push(ValidationError::MissingBaseUrl(field));
        return;
    };
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        }),
    }
}

/// RFC 6265 token: visible ASCII minus separators.
fn is_cookie_token(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| {
            b.is_ascii_graphic() && !b"()<>@,;:\\\"/[]?={}".contains(&b)
        })
}
