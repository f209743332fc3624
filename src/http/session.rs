//! Cart cookie handling.
//!
//! The cookie is the only state a visitor carries: its value names a cart
//! record in the cart service.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::cart::CartId;
use crate::config::CartCookieConfig;

/// Reads and issues the cart identity cookie.
#[derive(Debug, Clone)]
pub struct CartCookie {
    name: String,
    http_only: bool,
    secure: bool,
}

impl CartCookie {
    pub fn new(config: &CartCookieConfig) -> Self {
        Self {
            name: config.name.clone(),
            http_only: config.http_only,
            secure: config.secure,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cart id presented by the client, if any.
    pub fn cart_id(&self, jar: &CookieJar) -> Option<CartId> {
        jar.get(&self.name)
            .map(|cookie| cookie.value().trim())
            .filter(|value| !value.is_empty())
            .map(CartId::from)
    }

    /// Add the cookie naming `cart_id` to the response jar.
    pub fn issue(&self, jar: CookieJar, cart_id: &CartId) -> CookieJar {
        let cookie = Cookie::build((self.name.clone(), cart_id.to_string()))
            .path("/")
            .http_only(self.http_only)
            .secure(self.secure)
            .same_site(SameSite::Lax);
        jar.add(cookie)
    }
}

impl Default for CartCookie {
    fn default() -> Self {
        Self::new(&CartCookieConfig::default())
    }
}
