//! In-memory user directory HTTP service.

pub mod api;
pub mod config;
pub mod http;
pub mod store;

pub use config::schema::AppConfig;
pub use http::HttpServer;
