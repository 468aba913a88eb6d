//! Generic passthrough backend for self-hosted endpoints.
//!
//! Sends a raw `{message, history}` envelope with no remapping. The bearer
//! token is optional — an endpoint URL is the only hard requirement. The
//! reply is the first of the `response`/`message`/`content` fields present
//! in the body, falling back to the raw serialized body so an unknown
//! response shape still surfaces something to the user.

use async_trait::async_trait;
use tracing::{debug, warn};

use cityguide_core::error::ProviderError;
use cityguide_core::{ChatBackend, Message, ProviderSettings};

/// Passthrough adapter for custom `{message, history}` endpoints.
pub struct CustomBackend {
    settings: ProviderSettings,
    client: reqwest::Client,
}

impl CustomBackend {
    pub fn new(settings: ProviderSettings, client: reqwest::Client) -> Self {
        Self { settings, client }
    }

    /// Pull the reply text out of a response body of unknown shape.
    fn extract_reply(body: serde_json::Value) -> String {
        for field in ["response", "message", "content"] {
            match body.get(field) {
                Some(serde_json::Value::Null) | None => continue,
                Some(serde_json::Value::String(text)) => return text.clone(),
                Some(other) => return other.to_string(),
            }
        }
        body.to_string()
    }
}

#[async_trait]
impl ChatBackend for CustomBackend {
    fn name(&self) -> &str {
        "custom"
    }

    async fn chat(
        &self,
        payload: &str,
        history: &[Message],
    ) -> std::result::Result<String, ProviderError> {
        if self.settings.endpoint.is_empty() {
            return Err(ProviderError::MissingEndpoint("Custom"));
        }

        let body = serde_json::json!({
            "message": payload,
            "history": history,
        });

        debug!(backend = "custom", endpoint = %self.settings.endpoint, "Sending chat request");

        let mut request = self
            .client
            .post(&self.settings.endpoint)
            .header("Content-Type", "application/json")
            .json(&body);

        if !self.settings.api_key.is_empty() {
            request = request.header(
                "Authorization",
                format!("Bearer {}", self.settings.api_key),
            );
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Custom API error");
            return Err(ProviderError::Api {
                status,
                body: error_body,
            });
        }

        let body: serde_json::Value =
            response.json().await.map_err(|e| ProviderError::Api {
                status: 200,
                body: format!("Failed to parse custom API response: {e}"),
            })?;

        Ok(Self::extract_reply(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityguide_core::ProviderId;

    #[tokio::test]
    async fn missing_endpoint_fails_before_network() {
        let backend = CustomBackend::new(
            ProviderSettings::defaults_for(ProviderId::Custom),
            crate::http_client(),
        );
        let err = backend.chat("hello", &[]).await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingEndpoint("Custom")));
    }

    #[test]
    fn extract_prefers_response_field() {
        let body = serde_json::json!({"response": "a", "message": "b", "content": "c"});
        assert_eq!(CustomBackend::extract_reply(body), "a");
    }

    #[test]
    fn extract_skips_null_fields() {
        let body = serde_json::json!({"response": null, "message": "fallback"});
        assert_eq!(CustomBackend::extract_reply(body), "fallback");
    }

    #[test]
    fn extract_falls_back_to_raw_body() {
        let body = serde_json::json!({"unexpected": {"nested": true}});
        let reply = CustomBackend::extract_reply(body);
        assert!(reply.contains("unexpected"));
        assert!(reply.contains("nested"));
    }
}
