//! Analysis handler.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tscribe_llm::AnalyzeRequest;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: Value,
}

/// `POST /api/transcript/analyze`
pub async fn analyze_transcript(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let result = state.engine.analyze(&request).await?;
    Ok(Json(AnalyzeResponse { result }))
}
