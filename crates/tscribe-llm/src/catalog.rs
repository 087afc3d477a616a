//! Model and deployment discovery.

use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info};
use tscribe_models::{Deployment, Model, ModelType};

use crate::config::LlmConfig;
use crate::error::{LlmError, LlmResult};

/// Deployment state reported by the model-serving backend for a live
/// deployment; everything else is filtered out of the catalog.
const DEPLOYED: &str = "DEPLOYED";

#[derive(Debug, Deserialize)]
struct BackendModel {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BackendDeployment {
    id: String,
    m_id: String,
    status: String,
    lb_port: u16,
}

/// Lists models and live deployments from the model-serving backend,
/// merges them with the built-in Claude entry, and caches the result.
///
/// The cache is the only process-wide state in the application; it is
/// populated on first use and never invalidated within a process lifetime.
pub struct ModelCatalog {
    http: Client,
    base_uri: Option<String>,
    cache: RwLock<Option<Vec<Model>>>,
}

impl ModelCatalog {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            http: Client::new(),
            base_uri: config
                .model_server_uri
                .as_ref()
                .map(|s| s.trim_end_matches('/').to_string()),
            cache: RwLock::new(None),
        }
    }

    /// List the available models, populating the cache on first use.
    pub async fn list(&self) -> LlmResult<Vec<Model>> {
        if let Some(models) = self.cache.read().await.as_ref() {
            return Ok(models.clone());
        }

        let base = self
            .base_uri
            .as_deref()
            .ok_or(LlmError::MissingConfig("MODEL_SERVER_URI is not configured"))?;

        let backend_models: Vec<BackendModel> =
            self.get_json(&format!("{base}/models/")).await?;
        let deployments: Vec<BackendDeployment> =
            self.get_json(&format!("{base}/serving/deployments")).await?;
        debug!(
            models = backend_models.len(),
            deployments = deployments.len(),
            "Fetched model catalog from backend"
        );

        let mut models = vec![claude_model()];
        for m in backend_models {
            let deployment = deployments
                .iter()
                .find(|d| d.m_id == m.id && d.status == DEPLOYED)
                .map(|d| Deployment {
                    id: d.id.clone(),
                    lb_port: d.lb_port,
                });
            models.push(Model {
                label: m.name.unwrap_or_else(|| m.id.clone()),
                api_identifier: m.id.clone(),
                id: m.id,
                description: m.description.unwrap_or_default(),
                model_type: ModelType::Hosted,
                deployment,
            });
        }

        info!(count = models.len(), "Model catalog populated");
        *self.cache.write().await = Some(models.clone());
        Ok(models)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> LlmResult<T> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

/// The built-in Anthropic entry, always listed first.
fn claude_model() -> Model {
    Model {
        id: "claude".to_string(),
        label: "Claude 3.5 Sonnet".to_string(),
        api_identifier: "claude-3-5-sonnet-latest".to_string(),
        description: "Anthropic's Claude via the Messages API".to_string(),
        model_type: ModelType::Claude,
        deployment: None,
    }
}
