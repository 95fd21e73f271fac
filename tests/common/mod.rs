//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use user_api::{AppConfig, HttpServer};

/// Spawn a server with a fresh seeded store on an ephemeral port and
/// return its address. Each caller gets its own isolated collection.
pub async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(AppConfig::default());
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Client without connection pooling, so servers spawned per-test never
/// share sockets.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
