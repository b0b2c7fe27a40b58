//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//! GET  /store                  - Store settings for the header
//!
//! # Products
//! GET  /products               - Catalog, filtered by ?category= and ?q=
//! GET  /products/{id}          - Product detail
//!
//! # Cart
//! GET  /cart                   - Cart contents
//! POST /cart/add               - Explicit add-to-cart (may warn on stock)
//! POST /cart/update            - Quantity delta (silent on stock limit)
//! GET  /cart/count             - Cart count badge
//!
//! # Checkout
//! POST /checkout               - Compose order, deduct stock, clear cart
//!
//! # Admin (credential-gated; not a security boundary)
//! POST   /admin/login          - Static credential check
//! POST   /admin/products       - Create product
//! PUT    /admin/products/{id}  - Update product
//! DELETE /admin/products/{id}  - Delete product
//! PUT    /admin/settings       - Full-replace store settings
//! POST   /admin/describe       - Generate a product description
//! ```

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod products;
pub mod store;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/count", get(cart::count))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login))
        .route("/products", post(admin::create_product))
        .route("/products/{id}", put(admin::update_product))
        .route("/products/{id}", delete(admin::delete_product))
        .route("/settings", put(admin::update_settings))
        .route("/describe", post(admin::describe))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Store header
        .route("/store", get(store::show))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", post(checkout::submit))
        // Admin surface
        .nest("/admin", admin_routes())
}
