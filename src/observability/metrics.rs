//! Metrics collection and exposition.
//!
//! # Metrics
//! - `storefront_requests_total` (counter): requests by method, route, status
//! - `storefront_request_duration_seconds` (histogram): latency by route
//! - `storefront_cart_additions_total` (counter): successful add-to-cart submissions
//! - `storefront_carts_created_total` (counter): carts created for new visitors
//! - `storefront_upstream_errors_total` (counter): commerce API failures

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its scrape listener on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Middleware recording per-route request count and latency.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "unmatched".to_string(), |p| p.as_str().to_string());

    let response = next.run(request).await;
    record_request(method, route, response.status().as_u16(), start);
    response
}

pub fn record_request(method: String, route: String, status: u16, start: Instant) {
    counter!(
        "storefront_requests_total",
        "method" => method,
        "route" => route.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("storefront_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_cart_addition() {
    counter!("storefront_cart_additions_total").increment(1);
}

pub fn record_cart_created() {
    counter!("storefront_carts_created_total").increment(1);
}

pub fn record_upstream_error() {
    counter!("storefront_upstream_errors_total").increment(1);
}
