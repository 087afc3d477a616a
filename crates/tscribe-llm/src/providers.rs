//! Provider invocation: Anthropic Messages API and OpenAI-compatible
//! hosted deployments.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use tscribe_models::Model;

use crate::config::LlmConfig;
use crate::error::{LlmError, LlmResult};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 4096;

/// Derive the chat-completions endpoint for a hosted deployment.
///
/// The host comes from the configured backend base URI with the scheme
/// stripped (deployment load balancers speak plain HTTP), any `/api`
/// suffix removed, and the deployment's own port substituted.
pub fn hosted_chat_url(base_uri: &str, lb_port: u16) -> String {
    let trimmed = base_uri.trim_end_matches('/');
    let trimmed = trimmed.strip_suffix("/api").unwrap_or(trimmed);
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let host = without_scheme
        .split(['/', ':'])
        .next()
        .unwrap_or(without_scheme);
    format!("http://{host}:{lb_port}/v1/chat/completions")
}

// OpenAI-compatible wire shapes (request and the consumed reply slice).

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContent>,
}

#[derive(Debug, Deserialize)]
struct AnthropicContent {
    #[serde(default)]
    text: String,
}

/// Invoke a hosted deployment's OpenAI-compatible endpoint.
pub async fn call_hosted(
    http: &Client,
    config: &LlmConfig,
    model: &Model,
    prompt: &str,
) -> LlmResult<String> {
    let base = config
        .model_server_uri
        .as_deref()
        .ok_or(LlmError::MissingConfig("MODEL_SERVER_URI is not configured"))?;
    let deployment = model
        .deployment
        .as_ref()
        .ok_or_else(|| LlmError::NoDeployment(model.id.clone()))?;

    let url = hosted_chat_url(base, deployment.lb_port);
    debug!(model = %model.api_identifier, url = %url, "Calling hosted deployment");

    let response = http
        .post(&url)
        .json(&ChatRequest {
            model: &model.api_identifier,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        })
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(LlmError::Api {
            status: status.as_u16(),
            body,
        });
    }

    let reply: ChatResponse = response.json().await?;
    reply
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or_else(|| LlmError::BadReply("no choices in completion response".to_string()))
}

/// Invoke the Anthropic Messages API.
pub async fn call_claude(
    http: &Client,
    config: &LlmConfig,
    model: &Model,
    prompt: &str,
) -> LlmResult<String> {
    let api_key = config
        .anthropic_api_key
        .as_deref()
        .ok_or(LlmError::MissingConfig("ANTHROPIC_API_KEY is not configured"))?;

    let url = format!("{}/v1/messages", config.anthropic_base_url.trim_end_matches('/'));
    debug!(model = %model.api_identifier, "Calling Anthropic Messages API");

    let response = http
        .post(&url)
        .header("x-api-key", api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(&json!({
            "model": model.api_identifier,
            "max_tokens": MAX_TOKENS,
            "messages": [{"role": "user", "content": prompt}],
        }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(LlmError::Api {
            status: status.as_u16(),
            body,
        });
    }

    let reply: AnthropicResponse = response.json().await?;
    reply
        .content
        .into_iter()
        .next()
        .map(|c| c.text)
        .ok_or_else(|| LlmError::BadReply("no content in Anthropic response".to_string()))
}
