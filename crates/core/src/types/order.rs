//! Order snapshot record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::OrderId;

/// The status every order is created with.
///
/// No transition endpoint exists, so this is currently the only reachable
/// status value.
pub const DEFAULT_ORDER_STATUS: &str = "Processing";

/// An order snapshot taken at checkout.
///
/// `user_email` is a weak reference to a [`crate::User`] by email; it is not
/// enforced by a constraint, so orders can exist for emails that were never
/// registered. `items` is stored opaquely: conceptually a sequence of
/// `{name, price, quantity}` entries, but the structure is not
/// schema-enforced. `total_amount` is client-supplied and not recomputed
/// from `items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Order {
    /// Storage-assigned identity.
    pub id: OrderId,
    /// Email of the user the order belongs to (weak reference).
    pub user_email: String,
    /// Line items, stored as opaque JSON.
    pub items: serde_json::Value,
    /// Client-supplied order total.
    pub total_amount: Decimal,
    /// Order status; defaults to [`DEFAULT_ORDER_STATUS`] at creation.
    pub status: String,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_order() -> Order {
        Order {
            id: OrderId::new(1),
            user_email: "a@x.com".to_owned(),
            items: json!([{"name": "Silk Scarf", "price": 20, "quantity": 2}]),
            total_amount: Decimal::new(40, 0),
            status: DEFAULT_ORDER_STATUS.to_owned(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = serde_json::to_value(sample_order()).unwrap();
        assert_eq!(json["userEmail"], "a@x.com");
        assert!(json.get("totalAmount").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("user_email").is_none());
    }

    #[test]
    fn test_items_are_preserved_verbatim() {
        let order = sample_order();
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["items"], order.items);
    }

    #[test]
    fn test_default_status() {
        assert_eq!(sample_order().status, "Processing");
    }
}
