//! HTTP route handlers for the Glamora API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                    - Liveness string
//! GET  /health              - Health check
//! GET  /health/ready        - Readiness check (verifies database)
//!
//! # Catalog
//! GET  /api/products        - List all products
//! POST /api/products        - Add a product
//!
//! # Account
//! POST /api/signup          - Register a user
//! POST /api/login           - Verify credentials
//!
//! # Orders
//! POST /api/orders          - Place an order
//! GET  /api/orders/{email}  - Order history for a user, newest first
//! ```
//!
//! All request and response bodies are JSON; failures carry a single
//! `{"error": "..."}` object.

pub mod account;
pub mod catalog;
pub mod orders;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new().route("/", get(catalog::index).post(catalog::create))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(account::signup))
        .route("/login", post(account::login))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::create))
        .route("/{email}", get(orders::index))
}

/// Create all `/api` routes.
pub fn routes() -> Router<AppState> {
    Router::new().nest(
        "/api",
        Router::new()
            .nest("/products", catalog_routes())
            .merge(account_routes())
            .nest("/orders", order_routes()),
    )
}
