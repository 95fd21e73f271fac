//! User directory API server.
//!
//! A small CRUD service over an in-memory user collection, built with Tokio
//! and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────┐
//!                    │               USER API                    │
//!                    │                                           │
//!   Client Request   │  ┌─────────┐   ┌──────────┐   ┌───────┐  │
//!   ─────────────────┼─▶│  http   │──▶│   api    │──▶│ store │  │
//!                    │  │ server  │   │ handlers │   │ users │  │
//!                    │  └─────────┘   └────┬─────┘   └───────┘  │
//!                    │                     │                     │
//!   Client Response  │  ┌─────────┐        │                     │
//!   ◀────────────────┼──│ error / │◀───────┘                     │
//!                    │  │  JSON   │                              │
//!                    │  └─────────┘                              │
//!                    │                                           │
//!                    │  ┌─────────────────────────────────────┐  │
//!                    │  │        Cross-Cutting Concerns       │  │
//!                    │  │  ┌────────┐ ┌─────────┐ ┌────────┐  │  │
//!                    │  │  │ config │ │ request │ │tracing │  │  │
//!                    │  │  │        │ │   ID    │ │        │  │  │
//!                    │  │  └────────┘ └─────────┘ └────────┘  │  │
//!                    │  └─────────────────────────────────────┘  │
//!                    └───────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_api::config;
use user_api::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("user-api v0.1.0 starting");

    // Load configuration (optional TOML file + PORT override)
    let config = config::load_from_env()?;

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
