//! Retry classification.
//!
//! # Design Decisions
//! - Callers only retry GETs; this module decides on the outcome alone
//! - Connection errors always retryable
//! - Gateway-style 5xx retryable, other statuses final

use axum::http::StatusCode;

/// Whether an attempt that ended with `status` (or a network error) is worth repeating.
pub fn is_retryable(status: Option<StatusCode>, network_error: bool) -> bool {
    if network_error {
        return true;
    }
    matches!(
        status,
        Some(StatusCode::BAD_GATEWAY)
            | Some(StatusCode::SERVICE_UNAVAILABLE)
            | Some(StatusCode::GATEWAY_TIMEOUT)
    )
}
