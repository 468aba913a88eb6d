//! ChatBackend trait — the abstraction over LLM backends.
//!
//! A backend knows how to send one assembled payload plus the conversation
//! history to an LLM and hand back the reply text. The orchestrator calls
//! [`ChatBackend::chat`] without knowing which backend is active — adding a
//! backend means adding one implementation, not editing the dispatch site.
//!
//! Implementations: OpenAI-style, Anthropic-style, Gemini-style, custom
//! passthrough, and a no-network mock.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ProviderError;
use crate::message::Message;

/// Identifier for a known LLM backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// Simulated backend — no network, canned replies. The startup default.
    Mock,
    /// OpenAI chat-completions style API
    OpenAi,
    /// Anthropic messages style API
    Anthropic,
    /// Google Gemini generateContent style API
    Gemini,
    /// Generic `{message, history}` passthrough endpoint
    Custom,
}

impl ProviderId {
    /// All known provider ids, in display order.
    pub const ALL: [ProviderId; 5] = [
        ProviderId::Mock,
        ProviderId::OpenAi,
        ProviderId::Anthropic,
        ProviderId::Gemini,
        ProviderId::Custom,
    ];

    /// The canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Mock => "mock",
            ProviderId::OpenAi => "openai",
            ProviderId::Anthropic => "anthropic",
            ProviderId::Gemini => "gemini",
            ProviderId::Custom => "custom",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mock" => Ok(ProviderId::Mock),
            "openai" => Ok(ProviderId::OpenAi),
            "anthropic" => Ok(ProviderId::Anthropic),
            "gemini" => Ok(ProviderId::Gemini),
            "custom" => Ok(ProviderId::Custom),
            _ => Err(()),
        }
    }
}

/// Connection settings for one backend.
///
/// Mutable in place when reconfigured; `api_key` may be empty only for
/// [`ProviderId::Mock`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// API credential. Empty means "not configured".
    #[serde(default)]
    pub api_key: String,

    /// Model identifier sent in the request body.
    #[serde(default)]
    pub model: String,

    /// Endpoint URL.
    #[serde(default)]
    pub endpoint: String,
}

impl ProviderSettings {
    /// Default settings for a backend (well-known model and endpoint).
    pub fn defaults_for(id: ProviderId) -> Self {
        match id {
            ProviderId::Mock => Self {
                api_key: String::new(),
                model: String::new(),
                endpoint: String::new(),
            },
            ProviderId::OpenAi => Self {
                api_key: String::new(),
                model: "gpt-3.5-turbo".into(),
                endpoint: "https://api.openai.com/v1/chat/completions".into(),
            },
            ProviderId::Anthropic => Self {
                api_key: String::new(),
                model: "claude-3-haiku-20240307".into(),
                endpoint: "https://api.anthropic.com/v1/messages".into(),
            },
            ProviderId::Gemini => Self {
                api_key: String::new(),
                model: "gemini-pro".into(),
                endpoint: "https://generativelanguage.googleapis.com/v1beta/models".into(),
            },
            ProviderId::Custom => Self {
                api_key: String::new(),
                model: String::new(),
                endpoint: String::new(),
            },
        }
    }

    /// Apply a partial update; fields not supplied are left unchanged.
    pub fn merge(&mut self, update: &ProviderUpdate) {
        if let Some(api_key) = &update.api_key {
            self.api_key = api_key.clone();
        }
        if let Some(model) = &update.model {
            self.model = model.clone();
        }
        if let Some(endpoint) = &update.endpoint {
            self.endpoint = endpoint.clone();
        }
    }
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field(
                "api_key",
                &if self.api_key.is_empty() { "" } else { "[REDACTED]" },
            )
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// A partial settings patch, used by `set_provider` and the env bootstrap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// The core backend trait.
///
/// `chat` takes the fully assembled payload and the caller-supplied history
/// and returns the reply text. One call per `send_message` invocation; no
/// retries are performed at this layer.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// A human-readable name for this backend (e.g. "openai", "mock").
    fn name(&self) -> &str;

    /// Send the payload and history, return the reply text.
    async fn chat(
        &self,
        payload: &str,
        history: &[Message],
    ) -> std::result::Result<String, ProviderError>;
}
