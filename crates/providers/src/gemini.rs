//! Google Gemini generateContent backend.
//!
//! `x-goog-api-key` header auth. The history is remapped to Gemini's
//! role/parts shape — `assistant` turns become `model` — with the assembled
//! payload appended as the final user part. Search grounding is enabled via
//! the `google_search` tool so the model can pull in live web results. The
//! reply is the first candidate's first part; an empty candidate list is an
//! error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use cityguide_core::error::ProviderError;
use cityguide_core::{ChatBackend, Message, ProviderSettings, Role};

/// Gemini generateContent adapter.
pub struct GeminiBackend {
    settings: ProviderSettings,
    client: reqwest::Client,
}

impl GeminiBackend {
    pub fn new(settings: ProviderSettings, client: reqwest::Client) -> Self {
        Self { settings, client }
    }

    /// The endpoint setting is the models base URL; the model name and
    /// method are appended per request.
    fn request_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.model
        )
    }

    fn to_api_contents(payload: &str, history: &[Message]) -> Vec<ApiContent> {
        let mut contents: Vec<ApiContent> = history
            .iter()
            .map(|m| ApiContent {
                role: match m.role {
                    Role::User => "user",
                    Role::Assistant => "model",
                },
                parts: vec![ApiPart {
                    text: m.content.clone(),
                }],
            })
            .collect();

        contents.push(ApiContent {
            role: "user",
            parts: vec![ApiPart {
                text: payload.to_string(),
            }],
        });

        contents
    }
}

#[async_trait]
impl ChatBackend for GeminiBackend {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn chat(
        &self,
        payload: &str,
        history: &[Message],
    ) -> std::result::Result<String, ProviderError> {
        if self.settings.api_key.is_empty() {
            return Err(ProviderError::MissingCredential("Gemini"));
        }

        let body = serde_json::json!({
            "contents": Self::to_api_contents(payload, history),
            "tools": [{ "google_search": {} }],
        });

        debug!(backend = "gemini", model = %self.settings.model, "Sending chat request");

        let response = self
            .client
            .post(self.request_url())
            .header("x-goog-api-key", &self.settings.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Gemini API error");
            return Err(ProviderError::Api {
                status,
                body: error_body,
            });
        }

        let api_resp: ApiResponse = response.json().await.map_err(|e| ProviderError::Api {
            status: 200,
            body: format!("Failed to parse Gemini response: {e}"),
        })?;

        api_resp
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| ProviderError::EmptyReply("No candidates in Gemini response".into()))
    }
}

// --- Gemini API types ---

#[derive(Debug, Serialize)]
struct ApiContent {
    role: &'static str,
    parts: Vec<ApiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
}

#[derive(Debug, Deserialize)]
struct ApiCandidate {
    content: ApiCandidateContent,
}

#[derive(Debug, Deserialize)]
struct ApiCandidateContent {
    #[serde(default)]
    parts: Vec<ApiPart>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityguide_core::ProviderId;

    fn backend(api_key: &str) -> GeminiBackend {
        let settings = ProviderSettings {
            api_key: api_key.into(),
            ..ProviderSettings::defaults_for(ProviderId::Gemini)
        };
        GeminiBackend::new(settings, crate::http_client())
    }

    #[tokio::test]
    async fn missing_credential_fails_before_network() {
        let err = backend("").chat("hello", &[]).await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredential("Gemini")));
    }

    #[test]
    fn request_url_appends_model_and_method() {
        let url = backend("key").request_url();
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn assistant_turns_remap_to_model_role() {
        let history = vec![Message::user("你好"), Message::assistant("你好！")];
        let contents = GeminiBackend::to_api_contents("逢甲夜市在哪？", &history);

        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0].role, "user");
        assert_eq!(contents[1].role, "model");
        assert_eq!(contents[2].role, "user");
        assert_eq!(contents[2].parts[0].text, "逢甲夜市在哪？");
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let resp: ApiResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        let reply = resp
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next());
        assert!(reply.is_none());
    }

    #[test]
    fn parse_first_candidate_part() {
        let resp: ApiResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"role": "model", "parts": [{"text": "在西屯區文華路。"}]}}]}"#,
        )
        .unwrap();
        let text = resp.candidates[0].content.parts[0].text.clone();
        assert_eq!(text, "在西屯區文華路。");
    }
}
