//! The greeting route.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// `GET /` — responds 201 with a greeting. The 201 status is part of the
/// published API surface and is kept for compatibility.
pub async fn hello() -> impl IntoResponse {
    (StatusCode::CREATED, Json(json!({"msg": "Hello World!!"})))
}
