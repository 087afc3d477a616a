//! Transcript extraction handler.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractRequest {
    pub video_url: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub transcript: String,
}

/// `POST /api/transcript/extract`
pub async fn extract_transcript(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> ApiResult<Json<ExtractResponse>> {
    // No pre-validation here: the pipeline's URL parser classifies every
    // non-matching string, empty included, as an invalid URL.
    let transcript = state.transcript.extract(&request.video_url).await?;
    Ok(Json(ExtractResponse { transcript }))
}
