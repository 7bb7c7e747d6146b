//! Modulus HTTP API server
//!
//! Exposes the batch modular-exponentiation API over HTTP and optionally
//! serves the bundled web client from the root path.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

use server::{ServerConfig, start_server};

/// Start the HTTP server with the default configuration
pub async fn start() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    start_server(ServerConfig::default()).await
}

/// Start the HTTP server with a custom configuration
pub async fn start_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    start_server(config).await
}
