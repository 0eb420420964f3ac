//! Order route handlers.
//!
//! Orders are immutable snapshots: created at checkout, read via per-user
//! listing, never updated. The client-supplied `totalAmount` is stored
//! without being recomputed from `items`.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use glamora_core::Order;

use crate::db::orders::{NewOrder, OrderRepository};
use crate::error::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

/// Place an order.
///
/// POST /api/orders
///
/// `status` and `createdAt` are filled in server-side; the response is the
/// stored order including its generated identity and timestamp.
///
/// # Errors
///
/// Returns 400 on any fault.
pub async fn create(
    State(state): State<AppState>,
    AppJson(new_order): AppJson<NewOrder>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    let order = OrderRepository::new(state.pool())
        .create(&new_order)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, user_email = %new_order.user_email, "failed to create order");
            AppError::BadRequest("Failed to create order".to_owned())
        })?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// List a user's orders, newest first.
///
/// GET /api/orders/{email}
///
/// The email is not checked against the `users` table; an unknown email
/// yields an empty list.
///
/// # Errors
///
/// Returns 500 on any retrieval fault.
pub async fn index(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Order>>, AppError> {
    let orders = OrderRepository::new(state.pool())
        .list_for_email(&email)
        .await?;

    Ok(Json(orders))
}
