//! Integration tests for the product catalog.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p glamora-api)
//!
//! Run with: cargo test -p glamora-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use glamora_core::Product;
use glamora_integration_tests::{api_base_url, client, unique_product_id};

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_liveness_banner() {
    let resp = client()
        .get(api_base_url())
        .send()
        .await
        .expect("Failed to reach API");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert_eq!(body, "Glamora API is Running...");
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_added_products_appear_in_listing() {
    let client = client();
    let base_url = api_base_url();

    let product_id = unique_product_id();
    let resp = client
        .post(format!("{base_url}/api/products"))
        .json(&json!({
            "productId": product_id,
            "name": "Velvet Clutch",
            "price": 49.99,
            "category": "Bags",
        }))
        .send()
        .await
        .expect("Failed to add product");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Product = resp.json().await.expect("Failed to parse response");
    assert_eq!(created.product_id, product_id);
    assert_eq!(created.category.as_deref(), Some("Bags"));

    let resp = client
        .get(format!("{base_url}/api/products"))
        .send()
        .await
        .expect("Failed to list products");

    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Product> = resp.json().await.expect("Failed to parse listing");
    assert!(
        products.iter().any(|p| p.product_id == product_id),
        "created product missing from listing"
    );
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_duplicate_product_id_is_rejected() {
    let client = client();
    let base_url = api_base_url();

    let product_id = unique_product_id();
    let body = json!({
        "productId": product_id,
        "name": "Silk Scarf",
        "price": 20,
    });

    let resp = client
        .post(format!("{base_url}/api/products"))
        .json(&body)
        .send()
        .await
        .expect("Failed to add product");
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Same natural key again: rejected, listing unchanged.
    let resp = client
        .post(format!("{base_url}/api/products"))
        .json(&body)
        .send()
        .await
        .expect("Failed to send duplicate");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = resp.json().await.expect("Failed to parse error");
    assert!(error["error"].is_string());

    let resp = client
        .get(format!("{base_url}/api/products"))
        .send()
        .await
        .expect("Failed to list products");
    let products: Vec<Value> = resp.json().await.expect("Failed to parse listing");
    let copies = products
        .iter()
        .filter(|p| p["productId"] == product_id.as_str())
        .count();
    assert_eq!(copies, 1, "duplicate insert must not mutate stored state");
}

#[tokio::test]
#[ignore = "Requires running API server and PostgreSQL"]
async fn test_missing_required_field_is_rejected() {
    let resp = client()
        .post(format!("{}/api/products", api_base_url()))
        .json(&json!({"name": "No natural key", "price": 5}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = resp.json().await.expect("Failed to parse error");
    assert!(error["error"].is_string());
}
