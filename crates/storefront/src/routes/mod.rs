//! HTTP route handlers for the storefront JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                      - Liveness check
//! GET    /health/ready                - Readiness check (DB ping)
//!
//! # Catalog (public)
//! GET    /api/products                - ?id= | ?category= | ?search= | all
//!
//! # Cart (requires auth)
//! GET    /api/cart                    - List items, newest first
//! POST   /api/cart                    - Add item
//! PATCH  /api/cart/{id}               - Update quantity
//! DELETE /api/cart/{id}               - Remove item
//! DELETE /api/cart                    - Clear cart
//!
//! # Addresses (requires auth)
//! GET    /api/addresses               - List, default first
//! POST   /api/addresses               - Create
//! PUT    /api/addresses/{id}          - Update
//! PUT    /api/addresses/{id}/default  - Make default (atomic)
//! DELETE /api/addresses/{id}          - Delete
//!
//! # Orders (requires auth)
//! POST   /api/orders/create           - Place order (COD or online)
//! POST   /api/orders/cancel           - Cancel order
//! GET    /api/orders                  - Order history
//! GET    /api/orders/{id}             - Order with items
//!
//! # Payment
//! POST   /api/payment/verify          - Verify gateway signature (auth)
//! GET    /api/payment/config          - Public gateway key id
//!
//! # Uploads (requires auth)
//! POST   /api/uploads/design          - Upload a design image
//!
//! # Auth boundary
//! POST   /api/auth/logout             - Clear session
//! ```

pub mod addresses;
pub mod auth;
pub mod cart;
pub mod orders;
pub mod payment;
pub mod products;
pub mod uploads;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::list).post(cart::add).delete(cart::clear))
        .route("/{id}", delete(cart::remove).patch(cart::update_quantity))
}

/// Create the address routes router.
pub fn address_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(addresses::list).post(addresses::create))
        .route("/{id}", put(addresses::update).delete(addresses::remove))
        .route("/{id}/default", put(addresses::make_default))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list))
        .route("/create", post(orders::create))
        .route("/cancel", post(orders::cancel))
        .route("/{id}", get(orders::show))
}

/// Create the payment routes router.
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/verify", post(payment::verify))
        .route("/config", get(payment::config))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    let api = Router::new()
        .route("/products", get(products::index))
        .nest("/cart", cart_routes())
        .nest("/addresses", address_routes())
        .nest("/orders", order_routes())
        .nest("/payment", payment_routes())
        .route("/uploads/design", post(uploads::design))
        .route("/auth/logout", post(auth::logout));

    Router::new().nest("/api", api)
}
