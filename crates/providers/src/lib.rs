//! LLM backend adapters for CityGuide.
//!
//! All adapters implement the `cityguide_core::ChatBackend` trait. The
//! registry holds the active selection and per-backend settings; the
//! [`build_backend`] factory is the single lookup-by-id site that maps a
//! snapshot of those settings to an adapter instance.

pub mod anthropic;
pub mod custom;
pub mod gemini;
pub mod mock;
pub mod openai;
pub mod registry;

pub use anthropic::AnthropicBackend;
pub use custom::CustomBackend;
pub use gemini::GeminiBackend;
pub use mock::MockBackend;
pub use openai::OpenAiBackend;
pub use registry::ProviderRegistry;

use cityguide_core::{ChatBackend, ProviderId, ProviderSettings};
use std::sync::Arc;

/// Build the adapter for a provider id from a settings snapshot.
///
/// Adapters are cheap per-dispatch values; they capture the settings as
/// they were at dispatch time, so a racing reconfiguration never affects an
/// in-flight call.
pub fn build_backend(
    id: ProviderId,
    settings: ProviderSettings,
    client: reqwest::Client,
) -> Arc<dyn ChatBackend> {
    match id {
        ProviderId::Mock => Arc::new(MockBackend::new()),
        ProviderId::OpenAi => Arc::new(OpenAiBackend::new(settings, client)),
        ProviderId::Anthropic => Arc::new(AnthropicBackend::new(settings, client)),
        ProviderId::Gemini => Arc::new(GeminiBackend::new(settings, client)),
        ProviderId::Custom => Arc::new(CustomBackend::new(settings, client)),
    }
}

/// A shared HTTP client with the default request timeout.
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(120))
        .build()
        .expect("Failed to create HTTP client")
}
