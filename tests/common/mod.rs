//! Shared utilities for integration tests.

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use storefront::cart::{CartId, CartStore, MemoryCartStore};
use storefront::catalog::{Catalog, Category, MemoryCatalog, Product, ProductImage};
use storefront::config::StorefrontConfig;
use storefront::http::HttpServer;
use storefront::lifecycle::Shutdown;

pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "lamp".into(),
            name: "Desk Lamp".into(),
            description: "Brass desk lamp".into(),
            images: vec![ProductImage {
                url: "https://cdn.example/lamp.png".into(),
                alt: Some("Lamp".into()),
            }],
            price: 4999,
            categories: vec![Category {
                name: "Lighting".into(),
                slug: "lighting".into(),
            }],
        },
        Product {
            id: "mug".into(),
            name: "Mug".into(),
            description: "Stoneware mug".into(),
            images: vec![],
            price: 123_400,
            categories: vec![],
        },
    ]
}

/// Config with the sample catalog and in-memory carts.
pub fn memory_config() -> StorefrontConfig {
    let mut config = StorefrontConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.catalog.products = sample_products();
    config
}

/// Start the storefront on an ephemeral port.
pub async fn spawn_storefront(config: StorefrontConfig) -> (SocketAddr, Shutdown) {
    let server = HttpServer::new(config).expect("valid test config");
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}

/// Client that does not follow redirects, so 303s can be inspected.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}

/// In-process stand-in for the remote commerce API.
#[derive(Clone)]
pub struct MockCommerceApi {
    pub catalog: Arc<MemoryCatalog>,
    pub carts: MemoryCartStore,
    /// Product reads answered with 503 before the API recovers.
    pub failing_reads: Arc<AtomicU32>,
    pub product_reads: Arc<AtomicU32>,
    /// Cart lookups answered with 503 before the API recovers.
    pub failing_cart_reads: Arc<AtomicU32>,
    pub cart_reads: Arc<AtomicU32>,
    /// Item additions answered with 503 before the API recovers.
    pub failing_item_adds: Arc<AtomicU32>,
    pub item_adds: Arc<AtomicU32>,
}

/// Consume one scripted failure, if any remain.
fn take_failure(remaining: &AtomicU32) -> bool {
    remaining
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddItem {
    product_id: String,
    quantity: u32,
}

async fn list_products(State(api): State<MockCommerceApi>) -> Json<Vec<Product>> {
    Json(api.catalog.list_products().await.unwrap())
}

async fn get_product(State(api): State<MockCommerceApi>, Path(id): Path<String>) -> Response {
    api.product_reads.fetch_add(1, Ordering::SeqCst);
    if take_failure(&api.failing_reads) {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    match api.catalog.get_product(&id).await.unwrap() {
        Some(product) => Json(product).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create_cart(State(api): State<MockCommerceApi>) -> Response {
    Json(api.carts.create_cart().await.unwrap()).into_response()
}

async fn get_cart(State(api): State<MockCommerceApi>, Path(id): Path<String>) -> Response {
    api.cart_reads.fetch_add(1, Ordering::SeqCst);
    if take_failure(&api.failing_cart_reads) {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    match api.carts.get_cart(&CartId::from(id)).await.unwrap() {
        Some(cart) => Json(cart).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn add_item(
    State(api): State<MockCommerceApi>,
    Path(id): Path<String>,
    Json(item): Json<AddItem>,
) -> Response {
    api.item_adds.fetch_add(1, Ordering::SeqCst);
    if take_failure(&api.failing_item_adds) {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    let id = CartId::from(id);
    let mut result = None;
    for _ in 0..item.quantity {
        match api.carts.add_to_cart(&id, &item.product_id).await {
            Ok(cart) => result = Some(cart),
            Err(_) => return StatusCode::NOT_FOUND.into_response(),
        }
    }
    match result {
        Some(cart) => Json(cart).into_response(),
        None => StatusCode::BAD_REQUEST.into_response(),
    }
}

/// Start the mock API; returns its base URL (`http://addr/api`).
pub async fn start_mock_commerce_api(failing_reads: u32) -> (String, MockCommerceApi) {
    let api = MockCommerceApi {
        catalog: Arc::new(MemoryCatalog::new(sample_products())),
        carts: MemoryCartStore::new(),
        failing_reads: Arc::new(AtomicU32::new(failing_reads)),
        product_reads: Arc::new(AtomicU32::new(0)),
        failing_cart_reads: Arc::new(AtomicU32::new(0)),
        cart_reads: Arc::new(AtomicU32::new(0)),
        failing_item_adds: Arc::new(AtomicU32::new(0)),
        item_adds: Arc::new(AtomicU32::new(0)),
    };

    let app = Router::new()
        .route("/api/products", get(list_products))
        .route("/api/products/{id}", get(get_product))
        .route("/api/carts", post(create_cart))
        .route("/api/carts/{id}", get(get_cart))
        .route("/api/carts/{id}/items", post(add_item))
        .with_state(api.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{addr}/api"), api)
}
