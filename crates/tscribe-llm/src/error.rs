//! Analysis error types.

use thiserror::Error;

pub type LlmResult<T> = Result<T, LlmError>;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),

    #[error("Model '{0}' has no live deployment")]
    NoDeployment(String),

    #[error("LLM request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("LLM API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Unusable LLM reply: {0}")]
    BadReply(String),
}

impl LlmError {
    /// Stable machine-readable discriminant for the API error envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            LlmError::MissingConfig(_) => "MISSING_CONFIG",
            LlmError::NoDeployment(_) => "NO_DEPLOYMENT",
            LlmError::Request(_) => "LLM_REQUEST_FAILED",
            LlmError::Api { .. } => "LLM_API_ERROR",
            LlmError::BadReply(_) => "BAD_REPLY",
        }
    }
}
