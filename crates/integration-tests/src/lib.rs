//! Integration tests for the Glamora API.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p glamora-cli -- migrate
//!
//! # Start the API
//! cargo run -p glamora-api
//!
//! # Run integration tests (ignored by default)
//! cargo test -p glamora-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `GLAMORA_BASE_URL` - Base URL of the running API (default
//!   `http://localhost:10000`)
//! - `GLAMORA_DATABASE_URL` - Used by tests that inspect stored rows
//!   directly (e.g., that a stored password is hashed)
//!
//! # Test Categories
//!
//! - `catalog` - Product add/list behavior
//! - `account` - Signup/login behavior
//! - `orders` - Order placement and per-user history

use reqwest::Client;
use uuid::Uuid;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("GLAMORA_BASE_URL").unwrap_or_else(|_| "http://localhost:10000".to_string())
}

/// Create an HTTP client for tests.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}

/// A fresh email address that no other test run has used.
#[must_use]
pub fn unique_email() -> String {
    format!("test-{}@glamora.test", Uuid::new_v4())
}

/// A fresh product natural key that no other test run has used.
#[must_use]
pub fn unique_product_id() -> String {
    format!("SKU-{}", Uuid::new_v4())
}
