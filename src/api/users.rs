//! User CRUD handlers.
//!
//! # Responsibilities
//! - Parse the `:id` path parameter once, as a typed extractor
//! - Dispatch list/filter, lookup, create, replace, merge, and delete to
//!   the store
//! - Map missing records and bad ids to the error taxonomy
//!
//! # Design Decisions
//! - Id resolution is a typed extractor, so every id-scoped handler shares
//!   the same parse-or-400 step and receives the id by value
//! - Lookup failure (404) stays in the handler, after the store call

use axum::extract::{FromRequestParts, Path, Query, State};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::api::validation::validate_new_user;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::store::User;

/// The `:id` path parameter, parsed as a base-10 integer.
///
/// Extraction fails with 400 when the segment is not an integer; whether a
/// record with that id exists is the handler's concern.
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId)?;
        raw.parse().map(UserId).map_err(|_| ApiError::InvalidId)
    }
}

/// Query parameters for `GET /api/users`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub filter: Option<String>,
    pub value: Option<String>,
}

/// `GET /api/users` — the full list, or a filtered view when both `filter`
/// and `value` are given. A partial or absent query falls back to the full
/// list.
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<User>> {
    match (query.filter.as_deref(), query.value.as_deref()) {
        (Some(filter), Some(value)) if !filter.is_empty() && !value.is_empty() => {
            Json(state.store.filter(filter, value))
        }
        _ => Json(state.store.list()),
    }
}

/// `GET /api/users/:id`
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, ApiError> {
    state.store.get(id).map(Json).ok_or(ApiError::NotFound)
}

/// `POST /api/users` — validate, assign the next id, insert.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let errors = validate_new_user(&body);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let user = state.store.create(body);
    tracing::debug!(id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// `PUT /api/users/:id` — full replacement; only the id survives.
pub async fn replace_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<User>, ApiError> {
    let user = state.store.replace(id, body).ok_or(ApiError::NotFound)?;
    tracing::debug!(id, "User replaced");
    Ok(Json(user))
}

/// `PATCH /api/users/:id` — shallow merge of the supplied fields.
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<User>, ApiError> {
    let user = state.store.merge(id, body).ok_or(ApiError::NotFound)?;
    tracing::debug!(id, "User updated");
    Ok(Json(user))
}

/// `DELETE /api/users/:id`
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, ApiError> {
    let user = state.store.remove(id).ok_or(ApiError::NotFound)?;
    tracing::debug!(id, "User deleted");
    Ok(Json(user))
}
