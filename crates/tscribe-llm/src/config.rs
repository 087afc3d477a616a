//! LLM configuration.

const DEFAULT_ANTHROPIC_BASE: &str = "https://api.anthropic.com";

/// Configuration for the catalog client and the analysis engine.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Base URI of the model-serving backend. The models listing and
    /// hosted-model analysis fail fast with a descriptive error when absent.
    pub model_server_uri: Option<String>,
    /// Required only when invoking the Claude model.
    pub anthropic_api_key: Option<String>,
    /// Anthropic API origin (override for tests).
    pub anthropic_base_url: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model_server_uri: None,
            anthropic_api_key: None,
            anthropic_base_url: DEFAULT_ANTHROPIC_BASE.to_string(),
        }
    }
}

impl LlmConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            model_server_uri: std::env::var("MODEL_SERVER_URI")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            anthropic_base_url: std::env::var("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ANTHROPIC_BASE.to_string()),
        }
    }
}
