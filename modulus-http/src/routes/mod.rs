use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use modulus_core::query::{ModExp, ModExpQuery};
use utoipa::OpenApi;

use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::modexp::query_modexps),
    components(schemas(ModExp, ModExpQuery))
)]
struct ApiDoc;

/// Create the main API router
pub fn create_api_router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(openapi))
        .nest("/api", api_router())
}

fn api_router() -> Router {
    Router::new().route(
        "/modexp",
        post(handlers::modexp::query_modexps).options(handlers::modexp::preflight),
    )
}

/// Health check endpoint for container health monitoring
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Serve the OpenAPI document
async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
