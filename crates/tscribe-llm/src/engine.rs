//! The analysis entry point.

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use tscribe_models::{Extractor, Model, ModelType};

use crate::config::LlmConfig;
use crate::error::LlmResult;
use crate::prompt::build_prompt;
use crate::providers::{call_claude, call_hosted};
use crate::reply::parse_reply;

/// One analysis request: a transcript, a model descriptor from the catalog,
/// and the extractor to run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub transcript: String,
    pub model: Model,
    pub extractor_id: String,
    #[serde(default)]
    pub custom_prompt: Option<String>,
}

/// Selects a provider from the request's model descriptor, builds the
/// schema-constrained prompt, invokes the LLM, and parses the reply into
/// the extractor's typed output shape.
pub struct AnalysisEngine {
    http: Client,
    config: LlmConfig,
}

impl AnalysisEngine {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub async fn analyze(&self, request: &AnalyzeRequest) -> LlmResult<Value> {
        let extractor = Extractor::find(&request.extractor_id);
        let prompt = build_prompt(
            extractor,
            request.custom_prompt.as_deref(),
            &request.transcript,
        );

        info!(
            extractor = extractor.id,
            model = %request.model.id,
            transcript_chars = request.transcript.len(),
            "Running analysis"
        );

        let reply = match request.model.model_type {
            ModelType::Claude => {
                call_claude(&self.http, &self.config, &request.model, &prompt).await?
            }
            ModelType::Hosted => {
                call_hosted(&self.http, &self.config, &request.model, &prompt).await?
            }
        };

        parse_reply(extractor.id, &reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use tscribe_models::Deployment;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn hosted_model(lb_port: u16) -> Model {
        Model {
            id: "llama-3-8b".to_string(),
            label: "Llama 3 8B".to_string(),
            api_identifier: "llama-3-8b-instruct".to_string(),
            description: String::new(),
            model_type: ModelType::Hosted,
            deployment: Some(Deployment {
                id: "dep-1".to_string(),
                lb_port,
            }),
        }
    }

    fn server_port(uri: &str) -> u16 {
        uri.rsplit(':').next().unwrap().parse().unwrap()
    }

    #[tokio::test]
    async fn hosted_analysis_round_trip() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_string_contains("llama-3-8b-instruct"))
            .and(body_string_contains("the transcript"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"choices":[{"message":{"role":"assistant",
                    "content":"```json\n{\"analysis\": \"insightful\"}\n```"}}]}"#,
            ))
            .mount(&server)
            .await;

        let config = LlmConfig {
            model_server_uri: Some(server.uri()),
            ..LlmConfig::default()
        };
        let engine = AnalysisEngine::new(config);

        let request = AnalyzeRequest {
            transcript: "the transcript".to_string(),
            model: hosted_model(server_port(&server.uri())),
            extractor_id: "custom".to_string(),
            custom_prompt: None,
        };
        let result = engine.analyze(&request).await.unwrap();
        assert_eq!(result["analysis"], "insightful");
    }

    #[tokio::test]
    async fn claude_analysis_round_trip() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "test-key"))
            .and(header("anthropic-version", "2023-06-01"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"content":[{"type":"text",
                    "text":"{\"quotes\":[{\"text\":\"t\",\"significance\":\"s\",\"context\":\"c\"}]}"}]}"#,
            ))
            .mount(&server)
            .await;

        let config = LlmConfig {
            model_server_uri: None,
            anthropic_api_key: Some("test-key".to_string()),
            anthropic_base_url: server.uri(),
        };
        let engine = AnalysisEngine::new(config);

        let request = AnalyzeRequest {
            transcript: "t".to_string(),
            model: Model {
                id: "claude".to_string(),
                label: "Claude".to_string(),
                api_identifier: "claude-3-5-sonnet-latest".to_string(),
                description: String::new(),
                model_type: ModelType::Claude,
                deployment: None,
            },
            extractor_id: "key-quotes".to_string(),
            custom_prompt: None,
        };
        let result = engine.analyze(&request).await.unwrap();
        assert_eq!(result["quotes"][0]["significance"], "s");
    }

    #[tokio::test]
    async fn hosted_without_backend_uri_fails_fast() {
        let engine = AnalysisEngine::new(LlmConfig::default());
        let request = AnalyzeRequest {
            transcript: "t".to_string(),
            model: hosted_model(9001),
            extractor_id: "custom".to_string(),
            custom_prompt: None,
        };
        let err = engine.analyze(&request).await.unwrap_err();
        assert!(matches!(err, LlmError::MissingConfig(_)));
    }

    #[tokio::test]
    async fn hosted_without_deployment_is_rejected() {
        let config = LlmConfig {
            model_server_uri: Some("https://models.example.com/api".to_string()),
            ..LlmConfig::default()
        };
        let engine = AnalysisEngine::new(config);
        let mut model = hosted_model(9001);
        model.deployment = None;
        let request = AnalyzeRequest {
            transcript: "t".to_string(),
            model,
            extractor_id: "custom".to_string(),
            custom_prompt: None,
        };
        let err = engine.analyze(&request).await.unwrap_err();
        assert!(matches!(err, LlmError::NoDeployment(_)));
    }

    #[tokio::test]
    async fn api_error_status_is_surfaced() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let config = LlmConfig {
            model_server_uri: Some(server.uri()),
            ..LlmConfig::default()
        };
        let engine = AnalysisEngine::new(config);
        let request = AnalyzeRequest {
            transcript: "t".to_string(),
            model: hosted_model(server_port(&server.uri())),
            extractor_id: "custom".to_string(),
            custom_prompt: None,
        };
        let err = engine.analyze(&request).await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 500, .. }));
    }
}
