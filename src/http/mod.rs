//! HTTP surface of the storefront.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, timeout, body limit, tracing)
//!     → pages.rs (product page, add-to-cart form, cart view)
//!         → session.rs (cart cookie in / out)
//!         → catalog / cart backends
//!     → JSON view or 303 redirect to the client
//! ```

pub mod pages;
pub mod server;
pub mod session;

pub use server::{AppState, HttpServer};
pub use session::CartCookie;
