//! Create-path body validation.
//!
//! # Responsibilities
//! - Enforce the username rules on user creation
//! - Report every violated rule, not just the first
//!
//! # Design Decisions
//! - Only `username` is validated; all other submitted fields pass through
//! - Update paths (PUT/PATCH) are deliberately unvalidated, matching the
//!   create-only policy of the API surface

use serde_json::{Map, Value};

use crate::http::error::FieldError;

/// Minimum username length, in characters.
pub const USERNAME_MIN: usize = 5;

/// Maximum username length, in characters.
pub const USERNAME_MAX: usize = 32;

/// Validate a create-user body. Returns the full list of field errors;
/// empty means the body is acceptable.
pub fn validate_new_user(body: &Map<String, Value>) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match body.get("username") {
        None => {
            errors.push(FieldError::new("username", "username is required"));
        }
        Some(Value::String(username)) => {
            let length = username.chars().count();
            if !(USERNAME_MIN..=USERNAME_MAX).contains(&length) {
                errors.push(FieldError::new(
                    "username",
                    format!(
                        "username must be between {USERNAME_MIN} and {USERNAME_MAX} characters"
                    ),
                ));
            }
        }
        Some(_) => {
            errors.push(FieldError::new("username", "username must be a string"));
        }
    }

    errors
}
