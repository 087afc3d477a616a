//! Extractor preset listing.

use axum::Json;
use serde::Serialize;
use tscribe_models::extractor::EXTRACTORS;
use tscribe_models::Extractor;

#[derive(Debug, Serialize)]
pub struct ExtractorsResponse {
    pub extractors: &'static [Extractor],
}

/// `GET /api/extractors`
pub async fn list_extractors() -> Json<ExtractorsResponse> {
    Json(ExtractorsResponse {
        extractors: EXTRACTORS,
    })
}
