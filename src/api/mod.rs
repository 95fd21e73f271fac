//! Request handlers.
//!
//! # Responsibilities
//! - Extract path parameters, query parameters, and JSON bodies
//! - Validate create-path input
//! - Read and mutate the user store
//! - Emit JSON responses with the right status codes

pub mod products;
pub mod root;
pub mod users;
pub mod validation;
