//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     USER_API_CONFIG set? → loader.rs (TOML file) : schema defaults
//!     → PORT env override
//!     → validation.rs (semantic checks, all errors collected)
//!     → AppConfig handed to HttpServer
//! ```

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, ConfigError};
pub use schema::AppConfig;
pub use validation::{validate_config, ValidationError};
