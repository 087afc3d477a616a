//! API error envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use tscribe_llm::LlmError;
use tscribe_transcript::TranscriptError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transcript(#[from] TranscriptError),

    #[error("{0}")]
    Llm(#[from] LlmError),
}

impl ApiError {
    /// Stable discriminant surfaced in the envelope so callers do not have
    /// to string-match on the message text.
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Transcript(e) => e.kind(),
            ApiError::Llm(e) => e.kind(),
        }
    }

    fn status_code(&self) -> StatusCode {
        // Pipeline failures keep a uniform 500 regardless of kind; callers
        // discriminate on `kind`, not the status. Malformed request bodies
        // are rejected by the extractor layer with 4xx before this runs.
        match self {
            ApiError::Transcript(_) | ApiError::Llm(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// The JSON error envelope: backward-compatible message text plus the
/// machine-readable `kind` tag.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let kind = self.kind();

        // The underlying cause (e.g. the transport error inside a fetch
        // failure) rides along as `details`.
        let details = std::error::Error::source(&self)
            .and_then(std::error::Error::source)
            .map(|cause| cause.to_string());
        error!(kind, error = %self, details = ?details, "Request failed");

        let body = ErrorResponse {
            error: self.to_string(),
            kind,
            details,
        };

        (status, Json(body)).into_response()
    }
}
