//! Catalog route handlers.
//!
//! Products are created once and read via list-all; there is no update,
//! delete, filtering, or pagination.

use axum::{Json, extract::State, http::StatusCode};

use glamora_core::Product;

use crate::db::products::{NewProduct, ProductRepository};
use crate::error::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

/// List all products.
///
/// GET /api/products
///
/// # Errors
///
/// Returns 500 with a fixed message on any retrieval fault.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = ProductRepository::new(state.pool())
        .list()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to fetch products");
            AppError::Internal("Failed to fetch products".to_owned())
        })?;

    Ok(Json(products))
}

/// Add a new product.
///
/// POST /api/products
///
/// The body is persisted as-is; the unique index on `product_id` is the
/// only validation beyond deserialization.
///
/// # Errors
///
/// Returns 400 with a fixed message on any failure, uniqueness collisions
/// included.
pub async fn create(
    State(state): State<AppState>,
    AppJson(new_product): AppJson<NewProduct>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let product = ProductRepository::new(state.pool())
        .create(&new_product)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, product_id = %new_product.product_id, "failed to add product");
            AppError::BadRequest("Failed to add product. Ensure ProductID is unique.".to_owned())
        })?;

    Ok((StatusCode::CREATED, Json(product)))
}
