//! Product catalog record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ProductId;

/// A catalog product.
///
/// `product_id` is the natural key supplied by the caller at creation time
/// and is unique across all products; `id` is the storage-assigned identity.
/// Products are never updated or deleted by this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Product {
    /// Storage-assigned identity.
    pub id: ProductId,
    /// Caller-supplied natural key, unique across all products.
    pub product_id: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Optional category label.
    pub category: Option<String>,
    /// Optional image URL.
    pub image: Option<String>,
    /// Optional long description.
    pub description: Option<String>,
}
