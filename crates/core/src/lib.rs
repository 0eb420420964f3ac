//! Glamora Core - Shared types library.
//!
//! This crate provides common types used across all Glamora components:
//! - `api` - The public HTTP/JSON service
//! - `cli` - Command-line tools for migrations
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the `Product`, `User`, and `Order` records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
