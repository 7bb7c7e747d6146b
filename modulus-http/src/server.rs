use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes::create_api_router;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Value of the Access-Control-Allow-Origin header, `*` by default
    pub allow_origin: String,

    /// Directory with the bundled web client, served at the root path
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8081,
            allow_origin: "*".to_string(),
            static_dir: None,
        }
    }
}

/// Assemble the application router for the given configuration.
///
/// CORS and trace layers wrap the API routes and, when configured, the
/// static web client, so every response carries the CORS headers.
pub fn build_router(config: &ServerConfig) -> Result<Router, header::InvalidHeaderValue> {
    let allow_origin = if config.allow_origin == "*" {
        AllowOrigin::any()
    } else {
        AllowOrigin::exact(HeaderValue::from_str(&config.allow_origin)?)
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
        ]);

    let mut app = create_api_router();
    if let Some(dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    Ok(app.layer(TraceLayer::new_for_http()).layer(cors))
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config)?;

    info!("Allowing origin: {}", config.allow_origin);
    if let Some(dir) = &config.static_dir {
        info!("Serving web client from {}", dir.display());
    }

    // Parse the socket address
    let addr = format!("{}:{}", config.host, config.port).parse::<SocketAddr>()?;

    // Start the server
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
