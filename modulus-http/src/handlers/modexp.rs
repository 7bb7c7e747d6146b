use axum::body::Bytes;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::debug;

use modulus_core::query::ModExpQuery;
use modulus_core::{codec, evaluator};

use crate::error::AppError;

/// Calculate a batch of modular exponentiations
///
/// Decodes the query, resolves per-item operands against the query-level
/// defaults, computes every modexp and returns the response in the shape
/// the query asked for: results only (brief, the default), or the full
/// query echoed back with results.
///
/// The body is taken raw rather than through the `Json` extractor so the
/// codec owns both the decode error mapping and the response shaping.
#[utoipa::path(
    post,
    path = "/api/modexp",
    request_body = ModExpQuery,
    responses(
        (status = 200, description = "All modexps calculated", body = ModExpQuery),
        (status = 400, description = "Empty or malformed request body"),
        (status = 500, description = "Query could not be evaluated")
    )
)]
pub async fn query_modexps(body: Bytes) -> Result<Response, AppError> {
    let query = codec::decode(&body)?;
    let brief = query.is_brief();
    debug!("Evaluating {} modexp(s), brief: {}", query.modexps.len(), brief);

    let response = evaluator::evaluate(query)?;
    let body = codec::encode(&response, brief)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Capability probe on the modexp endpoint
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
