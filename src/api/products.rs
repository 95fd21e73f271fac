//! Product catalog handler.

use axum::Json;

use crate::store::products::{self, Product};

/// `GET /api/products` — the static catalog.
pub async fn list_products() -> Json<Vec<Product>> {
    Json(products::catalog())
}
