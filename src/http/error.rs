//! Request error taxonomy.
//!
//! # Responsibilities
//! - Define the error cases a handler can surface
//! - Map each case to its HTTP status and JSON body
//!
//! # Design Decisions
//! - Malformed path id → 400, missing record → 404, failed body
//!   validation → 400 with the full field-error list
//! - Every error is terminal for the request; no 5xx path is produced
//!   deliberately

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error type for request handling.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request. Invalid ID.")]
    InvalidId,

    #[error("User not found.")]
    NotFound,

    #[error("validation failed for {0:?}")]
    Validation(Vec<FieldError>),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidId => (
                StatusCode::BAD_REQUEST,
                Json(json!({"msg": "Bad request. Invalid ID."})),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({"msg": "User not found."})),
            )
                .into_response(),
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({"errors": errors}))).into_response()
            }
        }
    }
}
