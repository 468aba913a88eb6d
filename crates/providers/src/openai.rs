//! OpenAI chat-completions backend.
//!
//! Bearer-token auth; the history maps role-for-role onto the `messages`
//! list with the assembled payload appended as the final user turn. The
//! reply is the first choice's message content.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use cityguide_core::error::ProviderError;
use cityguide_core::{ChatBackend, Message, ProviderSettings, Role};

const TEMPERATURE: f32 = 0.7;

/// OpenAI chat-completions adapter.
pub struct OpenAiBackend {
    settings: ProviderSettings,
    client: reqwest::Client,
}

impl OpenAiBackend {
    pub fn new(settings: ProviderSettings, client: reqwest::Client) -> Self {
        Self { settings, client }
    }

    /// Map the history plus the current payload onto the wire message list.
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
impl ChatBackend for OpenAiBackend {
    fn name(&self) -> &str {
        "openai"
    }

    async fn chat(
        &self,
        payload: &str,
        history: &[Message],
    ) -> std::result::Result<String, ProviderError> {
        if self.settings.api_key.is_empty() {
            return Err(ProviderError::MissingCredential("OpenAI"));
        }

        let body = serde_json::json!({
            "model": self.settings.model,
            "messages": Self::to_api_messages(payload, history),
            "temperature": TEMPERATURE,
        });

        debug!(backend = "openai", model = %self.settings.model, "Sending chat request");

        let response = self
            .client
            .post(&self.settings.endpoint)
            .header("Authorization", format!("Bearer {}", self.settings.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "OpenAI API error");
            return Err(ProviderError::Api {
                status,
                body: error_body,
            });
        }

        let api_resp: ApiResponse = response.json().await.map_err(|e| ProviderError::Api {
            status: 200,
            body: format!("Failed to parse OpenAI response: {e}"),
        })?;

        api_resp
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::EmptyReply("No choices in OpenAI response".into()))
    }
}

// --- OpenAI API types ---

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    content: String,
}
