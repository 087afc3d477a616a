//! Axum HTTP API server.
//!
//! This crate provides:
//! - `POST /api/transcript/extract` and `POST /api/transcript/analyze`
//! - Model catalog and extractor listings
//! - The embedded single-page UI
//! - Request logging, request IDs, CORS, and body-size limits

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
