//! Model catalog handler.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tscribe_models::Model;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<Model>,
}

/// `GET /api/models`
pub async fn list_models(State(state): State<AppState>) -> ApiResult<Json<ModelsResponse>> {
    let models = state.catalog.list().await?;
    Ok(Json(ModelsResponse { models }))
}
