//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit, metrics)
//! - Bind server to listener and drain on shutdown

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::cart::{self, CartStore};
use crate::catalog::{self, Catalog};
use crate::config::{ConfigError, StorefrontConfig};
use crate::http::pages;
use crate::http::session::CartCookie;
use crate::lifecycle::shutdown;
use crate::observability::metrics;
use crate::pricing::Currency;

fn request_span(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    pub carts: Arc<dyn CartStore>,
    pub cart_cookie: Arc<CartCookie>,
    pub currency: Currency,
}

impl AppState {
    pub fn new(config: &StorefrontConfig, catalog: Arc<dyn Catalog>, carts: Arc<dyn CartStore>) -> Self {
        Self {
            catalog,
            carts,
            cart_cookie: Arc::new(CartCookie::new(&config.cart.cookie)),
            currency: config.pricing.currency,
        }
    }
}

/// HTTP server for the storefront.
pub struct HttpServer {
    router: Router,
    config: StorefrontConfig,
}

impl HttpServer {
    /// Create a server with the catalog and cart backends named in `config`.
    pub fn new(config: StorefrontConfig) -> Result<Self, ConfigError> {
        let catalog = catalog::build(&config)?;
        let carts = cart::build(&config)?;
        let state = AppState::new(&config, catalog, carts);
        Ok(Self::with_state(config, state))
    }

    /// Create a server around already-constructed backends.
    pub fn with_state(config: StorefrontConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &StorefrontConfig, state: AppState) -> Router {
        Router::new()
            .route("/product/{product_id}", get(pages::product_page))
            .route("/product/{product_id}/cart", post(pages::add_product_to_cart))
            .route("/cart", get(pages::current_cart))
            .route("/health", get(pages::health))
            .with_state(state)
            .route_layer(middleware::from_fn(metrics::track_requests))
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Serve on `listener` until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }
}
