//! Shared type definitions.
//!
//! Record types serialize with camelCase field names because that is the
//! wire contract the storefront frontend consumes.

pub mod id;
pub mod order;
pub mod product;
pub mod user;

pub use id::{OrderId, ProductId, UserId};
pub use order::Order;
pub use product::Product;
pub use user::User;
