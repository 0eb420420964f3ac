//! Order repository for database operations.

use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;

use glamora_core::Order;

use super::RepositoryError;

/// Fields accepted when creating an order.
///
/// Mirrors the POST `/api/orders` request body. `items` is kept opaque and
/// `total_amount` is stored as supplied; `status` and `created_at` are
/// filled in by database defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_email: String,
    pub items: serde_json::Value,
    pub total_amount: Decimal,
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new order snapshot.
    ///
    /// The referenced user email is not checked against the `users` table;
    /// orders are weak references by design.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, order: &NewOrder) -> Result<Order, RepositoryError> {
        let created = sqlx::query_as::<_, Order>(
            r"
            INSERT INTO orders (user_email, items, total_amount)
            VALUES ($1, $2, $3)
            RETURNING id, user_email, items, total_amount, status, created_at
            ",
        )
        .bind(&order.user_email)
        .bind(&order.items)
        .bind(order.total_amount)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }

    /// Get all orders for a user email, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_email(&self, email: &str) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_email, items, total_amount, status, created_at
            FROM orders
            WHERE user_email = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(email)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }
}
