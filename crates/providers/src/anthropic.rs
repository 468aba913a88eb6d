//! Anthropic messages backend.
//!
//! Uses `x-api-key` header authentication (not Bearer) plus the
//! `anthropic-version` header. Same message-list shape as the OpenAI
//! adapter; the top-level system field is not used — the assembled payload
//! already carries the instruction preamble. The reply is the first content
//! block's text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use cityguide_core::error::ProviderError;
use cityguide_core::{ChatBackend, Message, ProviderSettings, Role};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

/// Anthropic messages API adapter.
pub struct AnthropicBackend {
    settings: ProviderSettings,
    client: reqwest::Client,
}

impl AnthropicBackend {
    pub fn new(settings: ProviderSettings, client: reqwest::Client) -> Self {
        Self { settings, client }
    }

    fn to_api_messages(payload: &str, history: &[Message]) -> Vec<ApiMessage> {
        let mut messages: Vec<ApiMessage> = history
            .iter()
            .map(|m| ApiMessage {
                role: match m.role {
                    Role::User => "user",
                    Role::Assistant => "assistant",
                },
                content: m.content.clone(),
            })
            .collect();

        messages.push(ApiMessage {
            role: "user",
            content: payload.to_string(),
        });

        messages
    }
}

#[async_trait]
impl ChatBackend for AnthropicBackend {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn chat(
        &self,
        payload: &str,
        history: &[Message],
    ) -> std::result::Result<String, ProviderError> {
        if self.settings.api_key.is_empty() {
            return Err(ProviderError::MissingCredential("Anthropic"));
        }

        let body = serde_json::json!({
            "model": self.settings.model,
            "messages": Self::to_api_messages(payload, history),
            "max_tokens": MAX_TOKENS,
        });

        debug!(backend = "anthropic", model = %self.settings.model, "Sending chat request");

        let response = self
            .client
            .post(&self.settings.endpoint)
            .header("x-api-key", &self.settings.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Anthropic API error");
            return Err(ProviderError::Api {
                status,
                body: error_body,
            });
        }

        let api_resp: ApiResponse = response.json().await.map_err(|e| ProviderError::Api {
            status: 200,
            body: format!("Failed to parse Anthropic response: {e}"),
        })?;

        api_resp
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or_else(|| {
                ProviderError::EmptyReply("No content blocks in Anthropic response".into())
            })
    }
}

// --- Anthropic API types ---

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: String,
}
