//! Application state.

use std::sync::Arc;

use tscribe_llm::{AnalysisEngine, LlmConfig, ModelCatalog};
use tscribe_transcript::TranscriptClient;

use crate::config::ApiConfig;

/// Shared application state.
///
/// Nothing here holds per-request state; the model catalog's internal cache
/// is the only process-wide mutable data.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub transcript: Arc<TranscriptClient>,
    pub catalog: Arc<ModelCatalog>,
    pub engine: Arc<AnalysisEngine>,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: ApiConfig, llm_config: LlmConfig) -> Self {
        Self {
            config,
            transcript: Arc::new(TranscriptClient::from_env()),
            catalog: Arc::new(ModelCatalog::new(&llm_config)),
            engine: Arc::new(AnalysisEngine::new(llm_config)),
        }
    }

    /// Swap the transcript client (tests point it at a mock origin).
    pub fn with_transcript_client(mut self, client: TranscriptClient) -> Self {
        self.transcript = Arc::new(client);
        self
    }
}
