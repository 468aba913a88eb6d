//! CLI command implementations.

pub mod ask;
pub mod chat;
pub mod status;

use std::sync::Arc;

use anyhow::Context;

use cityguide_assistant::Assistant;
use cityguide_config::AppConfig;
use cityguide_providers::ProviderRegistry;
use cityguide_stations::MockStationGateway;

/// Load configuration and wire up the assistant.
///
/// The registry starts on the mock backend; the configured provider (file or
/// environment) is activated on top, with an unknown name falling back to
/// mock rather than failing startup.
pub fn bootstrap() -> anyhow::Result<(AppConfig, Arc<ProviderRegistry>, Assistant)> {
    let config = AppConfig::load().context("Failed to load config")?;

    let registry = Arc::new(ProviderRegistry::new());
    registry.set_provider(&config.provider, config.provider_update());

    let assistant = Assistant::new(
        &config.lexicon,
        Arc::new(MockStationGateway::new()),
        registry.clone(),
    );

    Ok((config, registry, assistant))
}
