//! Configuration loading and lexicon datasets for CityGuide.
//!
//! Loads configuration from `~/.cityguide/config.toml` with environment
//! variable overrides. The file is optional — with no config and no
//! environment the assistant starts on the mock backend.
//!
//! The heuristic term lists (scope allow-list, augmentation triggers, known
//! station names) live here as a swappable [`Lexicon`] dataset rather than
//! inline literals, so domain coverage can be extended without touching
//! control flow.

pub mod lexicon;

pub use lexicon::Lexicon;

use cityguide_core::ProviderUpdate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.cityguide/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Which backend to activate at startup.
    #[serde(default = "default_provider")]
    pub provider: String,

    /// API credential for the selected backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model identifier override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Endpoint URL override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Term lists driving the scope filter and augmentation detector.
    #[serde(default)]
    pub lexicon: Lexicon,
}

fn default_provider() -> String {
    "mock".into()
}

fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("provider", &self.provider)
            .field("api_key", &redact(&self.api_key))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("lexicon", &self.lexicon)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: None,
            model: None,
            endpoint: None,
            lexicon: Lexicon::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.cityguide/config.toml).
    ///
    /// Environment variables take priority over the file:
    /// - `CITYGUIDE_PROVIDER`
    /// - `CITYGUIDE_API_KEY`
    /// - `CITYGUIDE_MODEL`
    /// - `CITYGUIDE_ENDPOINT`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if let Ok(provider) = std::env::var("CITYGUIDE_PROVIDER") {
            config.provider = provider;
        }
        if let Ok(api_key) = std::env::var("CITYGUIDE_API_KEY") {
            config.api_key = Some(api_key);
        }
        if let Ok(model) = std::env::var("CITYGUIDE_MODEL") {
            config.model = Some(model);
        }
        if let Ok(endpoint) = std::env::var("CITYGUIDE_ENDPOINT") {
            config.endpoint = Some(endpoint);
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".cityguide")
    }

    /// The partial settings patch to feed into `set_provider` at startup.
    pub fn provider_update(&self) -> ProviderUpdate {
        ProviderUpdate {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            endpoint: self.endpoint.clone(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_uses_mock() {
        let config = AppConfig::default();
        assert_eq!(config.provider, "mock");
        assert!(config.api_key.is_none());
        assert!(!config.lexicon.scope_terms.is_empty());
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.provider, "mock");
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.provider, config.provider);
        assert_eq!(parsed.lexicon.trigger_terms, config.lexicon.trigger_terms);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "provider = \"gemini\"\napi_key = \"test-key\"").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.provider, "gemini");
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert!(config.model.is_none());
        // Lexicon falls back to the built-in dataset
        assert!(!config.lexicon.station_names.is_empty());
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = AppConfig {
            api_key: Some("sk-secret".into()),
            ..AppConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
    }

    #[test]
    fn provider_update_carries_only_set_fields() {
        let config = AppConfig {
            api_key: Some("k".into()),
            model: Some("m".into()),
            ..AppConfig::default()
        };
        let update = config.provider_update();
        assert_eq!(update.api_key.as_deref(), Some("k"));
        assert_eq!(update.model.as_deref(), Some("m"));
        assert!(update.endpoint.is_none());
    }
}
