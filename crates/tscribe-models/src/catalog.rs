//! Model catalog entries.

use serde::{Deserialize, Serialize};

/// Provider family for a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    /// Served by the configured model-serving backend behind an
    /// OpenAI-compatible per-deployment endpoint.
    Hosted,
    /// Anthropic Messages API.
    Claude,
}

/// A live deployment of a hosted model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: String,
    pub lb_port: u16,
}

/// One entry in the model catalog.
///
/// Hosted models without a deployment are listed but not invocable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub label: String,
    pub api_identifier: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub model_type: ModelType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<Deployment>,
}

impl Model {
    pub fn is_invocable(&self) -> bool {
        match self.model_type {
            ModelType::Claude => true,
            ModelType::Hosted => self.deployment.is_some(),
        }
    }
}
