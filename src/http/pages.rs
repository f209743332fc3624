//! Product page and add-to-cart handlers.
//!
//! The product page is served as a view model; presentation is left to the
//! client. The add-to-cart form posts back to the page's own path and is
//! answered with a 303 redirect so a browser reload does not resubmit it.

use axum::{
    extract::{Path, State},
    response::Redirect,
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartItem};
use crate::catalog::Product;
use crate::error::{Result, StorefrontError};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::pricing::{format_price, Currency};

/// Hidden form field carrying the product id.
pub const PRODUCT_ID_FIELD: &str = "productId";

/// Path-segment encode set, plus `/` and `%` so an id always stays one segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

pub fn product_path(product_id: &str) -> String {
    format!("/product/{}", utf8_percent_encode(product_id, SEGMENT))
}

pub fn add_to_cart_path(product_id: &str) -> String {
    format!("/product/{}/cart", utf8_percent_encode(product_id, SEGMENT))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub category: Option<String>,
    pub price: PriceView,
    pub add_to_cart: FormView,
}

#[derive(Debug, Serialize)]
pub struct PriceView {
    pub amount: i64,
    pub currency: &'static str,
    pub formatted: String,
}

#[derive(Debug, Serialize)]
pub struct FormView {
    pub action: String,
    pub method: &'static str,
    pub fields: Vec<HiddenField>,
}

#[derive(Debug, Serialize)]
pub struct HiddenField {
    pub name: &'static str,
    pub value: String,
}

impl ProductPage {
    pub fn new(product: &Product, currency: Currency) -> Self {
        let image = product.primary_image();
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            image: image.map(|i| i.url.clone()),
            // Fall back to the product name, as the page does for its <img>.
            image_alt: image.map(|i| i.alt.clone().unwrap_or_else(|| product.name.clone())),
            category: product.primary_category().map(|c| c.name.clone()),
            price: PriceView {
                amount: product.price,
                currency: currency.code(),
                formatted: format_price(product.price, currency),
            },
            add_to_cart: FormView {
                action: add_to_cart_path(&product.id),
                method: "POST",
                fields: vec![HiddenField {
                    name: PRODUCT_ID_FIELD,
                    value: product.id.clone(),
                }],
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AddToCartForm {
    #[serde(rename = "productId")]
    pub product_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub id: Option<String>,
    pub items: Vec<CartItem>,
    pub total_quantity: u32,
}

impl CartView {
    pub fn empty() -> Self {
        Self {
            id: None,
            items: Vec::new(),
            total_quantity: 0,
        }
    }
}

impl From<Cart> for CartView {
    fn from(cart: Cart) -> Self {
        let total_quantity = cart.total_quantity();
        Self {
            id: Some(cart.id.to_string()),
            items: cart.items,
            total_quantity,
        }
    }
}

async fn load_product(state: &AppState, product_id: &str) -> Result<Product> {
    state
        .catalog
        .get_product(product_id)
        .await?
        .ok_or_else(|| StorefrontError::ProductNotFound(product_id.to_string()))
}

/// `GET /product/{product_id}`
pub async fn product_page(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ProductPage>> {
    let product = load_product(&state, &product_id).await?;
    Ok(Json(ProductPage::new(&product, state.currency)))
}

/// `POST /product/{product_id}/cart`
pub async fn add_product_to_cart(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    jar: CookieJar,
    Form(form): Form<AddToCartForm>,
) -> Result<(CookieJar, Redirect)> {
    if let Some(submitted) = form.product_id.as_deref() {
        if submitted != product_id {
            return Err(StorefrontError::InvalidForm(format!(
                "{PRODUCT_ID_FIELD} {submitted:?} does not match product {product_id:?}"
            )));
        }
    }
    load_product(&state, &product_id).await?;
    let redirect = Redirect::to(&product_path(&product_id));

    let existing = state.cart_cookie.cart_id(&jar);
    let cart = state.carts.get_or_create_cart(existing.as_ref()).await?;
    let jar = state.cart_cookie.issue(jar, &cart.id);

    let cart = state.carts.add_to_cart(&cart.id, &product_id).await?;
    metrics::record_cart_addition();
    tracing::info!(
        cart_id = %cart.id,
        product_id = %product_id,
        quantity = cart.quantity_of(&product_id),
        "Added product to cart"
    );

    Ok((jar, redirect))
}

/// `GET /cart`
pub async fn current_cart(State(state): State<AppState>, jar: CookieJar) -> Result<Json<CartView>> {
    let Some(cart_id) = state.cart_cookie.cart_id(&jar) else {
        return Ok(Json(CartView::empty()));
    };
    let view = state
        .carts
        .get_cart(&cart_id)
        .await?
        .map_or_else(CartView::empty, CartView::from);
    Ok(Json(view))
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
