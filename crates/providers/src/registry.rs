//! Provider registry — the active backend selection and its settings.
//!
//! Process-wide mutable state, held behind a lock rather than a module
//! global so it can be passed explicitly into the orchestrator. Every
//! dispatch takes a one-shot snapshot; a reconfiguration racing with an
//! in-flight call leaves that call on the settings it read at dispatch
//! time. Reconfiguration is an administrative action, expected to be rare
//! and not concurrent with traffic.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

use cityguide_core::{ChatBackend, ProviderId, ProviderSettings, ProviderUpdate};

/// Holds the active backend id and per-backend connection settings.
pub struct ProviderRegistry {
    state: RwLock<RegistryState>,
    client: reqwest::Client,
}

struct RegistryState {
    active: ProviderId,
    settings: HashMap<ProviderId, ProviderSettings>,
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderRegistry {
    /// Create a registry with every backend on its defaults and the mock
    /// backend active.
    pub fn new() -> Self {
        let settings = ProviderId::ALL
            .into_iter()
            .map(|id| (id, ProviderSettings::defaults_for(id)))
            .collect();

        Self {
            state: RwLock::new(RegistryState {
                active: ProviderId::Mock,
                settings,
            }),
            client: crate::http_client(),
        }
    }

    /// Activate a backend and partially merge `update` into its stored
    /// settings; fields not supplied are left unchanged.
    ///
    /// An unknown id never fails the call: it logs a warning and falls back
    /// to the mock backend, discarding the update.
    pub fn set_provider(&self, id: &str, update: ProviderUpdate) {
        let mut state = self.state.write().expect("provider registry lock poisoned");

        let Ok(id) = id.parse::<ProviderId>() else {
            warn!(provider = id, "Unknown provider, falling back to mock");
            state.active = ProviderId::Mock;
            return;
        };

        state.active = id;
        state
            .settings
            .entry(id)
            .or_insert_with(|| ProviderSettings::defaults_for(id))
            .merge(&update);

        info!(provider = %id, "Provider activated");
    }

    /// Snapshot the active backend id and its settings.
    pub fn active(&self) -> (ProviderId, ProviderSettings) {
        let state = self.state.read().expect("provider registry lock poisoned");
        let settings = state
            .settings
            .get(&state.active)
            .cloned()
            .unwrap_or_else(|| ProviderSettings::defaults_for(state.active));
        (state.active, settings)
    }

    /// Whether the active backend has what it needs to be called.
    ///
    /// Advisory only — dispatch does not consult this, so an unconfigured
    /// real backend fails at call time with a backend-specific error.
    pub fn is_configured(&self) -> bool {
        let (id, settings) = self.active();
        id == ProviderId::Mock || !settings.api_key.is_empty()
    }

    /// Build the adapter for the current snapshot.
    pub fn backend(&self) -> Arc<dyn ChatBackend> {
        let (id, settings) = self.active();
        crate::build_backend(id, settings, self.client.clone())
    }
}
