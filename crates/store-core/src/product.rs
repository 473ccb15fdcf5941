//! # Product Types
//!
//! Product catalog types for storefront.
//! The catalog is fixed at build time and shared read-only by every request.

use crate::amount::Amount;
use serde::{Deserialize, Serialize};

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: Amount,
}

impl Product {
    /// Create a new product
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: impl Into<Amount>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
        }
    }
}

/// Ordered, immutable product catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Create a catalog from products, keeping their order
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in catalog served by the API
    pub fn builtin() -> Self {
        Self::new(vec![
            Product::new("1", "Product 1", 10.0),
            Product::new("2", "Product 2", 20.0),
            Product::new("3", "Product 3", 30.0),
        ])
    }

    /// Find a product by ID
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
