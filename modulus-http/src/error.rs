//! Error handling for modulus-http
//!
//! Maps the core error kinds onto HTTP status codes and a JSON error
//! body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use modulus_core::error::{EvalError, ParseError};
use serde_json::json;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body could not be decoded
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Query decoded but could not be evaluated
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl AppError {
    /// Get the status code and error message for this error.
    ///
    /// Undecodable bodies are client errors; invalid queries keep the
    /// legacy 500 mapping of the wire contract.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Parse(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::Eval(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
