//! Request-level error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::observability::metrics;

/// Errors surfaced by catalog, cart, and page handlers.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// The catalog has no product with this id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The cart service has no cart with this id.
    #[error("Cart not found: {0}")]
    CartNotFound(String),

    /// Submitted form data is inconsistent with the request.
    #[error("Invalid form: {0}")]
    InvalidForm(String),

    /// Transport failure talking to the commerce API.
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The commerce API answered with an unexpected status.
    #[error("Upstream returned {status} for {endpoint}")]
    UpstreamStatus { endpoint: String, status: u16 },

    /// The commerce API answered with a body we could not decode.
    #[error("Failed to decode upstream payload: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;

impl StorefrontError {
    pub fn status(&self) -> StatusCode {
        match self {
            StorefrontError::ProductNotFound(_) | StorefrontError::CartNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            StorefrontError::InvalidForm(_) => StatusCode::BAD_REQUEST,
            StorefrontError::Upstream(_)
            | StorefrontError::UpstreamStatus { .. }
            | StorefrontError::Decode(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::BAD_GATEWAY {
            tracing::error!(error = %self, "Commerce API failure");
            metrics::record_upstream_error();
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            StorefrontError::ProductNotFound("p1".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            StorefrontError::InvalidForm("mismatch".into()).status(),
            StatusCode::BAD_REQUEST
        );
        let err = StorefrontError::UpstreamStatus {
            endpoint: "http://api/products".into(),
            status: 500,
        };
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "Upstream returned 500 for http://api/products");
    }

    #[test]
    fn test_not_found_display() {
        let err = StorefrontError::ProductNotFound("sku-42".to_string());
        assert_eq!(err.to_string(), "Product not found: sku-42");
    }
}
