//! Product repository for database operations.

use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;

use glamora_core::Product;

use super::RepositoryError;

/// Fields accepted when creating a product.
///
/// Mirrors the POST `/api/products` request body. `product_id` is the
/// caller-supplied natural key; everything else is stored as-is.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub product_id: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get all products in storage order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, product_id, name, price, category, image, description
            FROM products
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the `product_id` already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let created = sqlx::query_as::<_, Product>(
            r"
            INSERT INTO products (product_id, name, price, category, image, description)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, product_id, name, price, category, image, description
            ",
        )
        .bind(&product.product_id)
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.category)
        .bind(&product.image)
        .bind(&product.description)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("product id already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(created)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_accepts_camel_case_body() {
        let body = r#"{
            "productId": "SKU-001",
            "name": "Velvet Clutch",
            "price": 49.99,
            "category": "Bags"
        }"#;

        let product: NewProduct = serde_json::from_str(body).unwrap();
        assert_eq!(product.product_id, "SKU-001");
        assert_eq!(product.category.as_deref(), Some("Bags"));
        assert!(product.image.is_none());
    }

    #[test]
    fn test_new_product_requires_product_id() {
        let body = r#"{"name": "Velvet Clutch", "price": 49.99}"#;
        assert!(serde_json::from_str::<NewProduct>(body).is_err());
    }
}
