//! The static product catalog.

use serde::{Deserialize, Serialize};

/// A catalog product. Read-only; there is no product lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// The hardcoded catalog served by `GET /api/products`.
pub fn catalog() -> Vec<Product> {
    vec![Product {
        id: 123,
        name: "Chicken breast".to_string(),
        price: 12.99,
    }]
}
