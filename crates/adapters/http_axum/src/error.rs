//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use automata_domain::error::AutomataError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps request failures to an HTTP response with the JSON error body.
///
/// Every failure here is a deterministic rejection of bad input, so the
/// status is always `400 Bad Request`.
pub enum ApiError {
    /// Domain-level rejection of a submitted value.
    Domain(AutomataError),
    /// The body could not be parsed as the expected JSON shape.
    InvalidBody,
}

impl From<AutomataError> for ApiError {
    fn from(err: AutomataError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(_: JsonRejection) -> Self {
        Self::InvalidBody
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::Domain(AutomataError::Validation(err)) => err.to_string(),
            Self::InvalidBody => "Invalid request body.".to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message })).into_response()
    }
}
