//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routes, middleware layers)
//!     → request.rs (add request ID)
//!     → api handlers (read/mutate the store)
//!     → error.rs (map failures to status + JSON body)
//!     → Send to client
//! ```

pub mod error;
pub mod request;
pub mod server;

pub use error::{ApiError, FieldError};
pub use request::{RequestId, RequestIdExt, RequestIdLayer, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
