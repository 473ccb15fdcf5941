//! # store-core
//!
//! Core types for the storefront API.
//!
//! This crate provides:
//! - `Amount` for JSON numbers rendered without trailing zeros
//! - `Product` and `ProductCatalog` for the static catalog
//! - `Payment` for the payment echo endpoint
//! - `StoreError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use store_core::{Payment, ProductCatalog};
//!
//! let catalog = ProductCatalog::builtin();
//! assert_eq!(catalog.len(), 3);
//!
//! let payment = Payment::from_json(br#"{"id":"1","amount":100.00}"#).unwrap();
//! assert_eq!(payment.amount.to_string(), "100");
//! ```

pub mod amount;
pub mod error;
pub mod payment;
pub mod product;

// Re-exports for convenience
pub use amount::Amount;
pub use error::{StoreError, StoreResult};
pub use payment::Payment;
pub use product::{Product, ProductCatalog};
