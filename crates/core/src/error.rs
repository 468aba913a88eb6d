//! Error types for the CityGuide domain.
//!
//! Uses `thiserror` for ergonomic error definitions. Each bounded context
//! has its own error enum; note that "out of scope" is a terminal outcome of
//! the pipeline, not an error, so it does not appear here.

use thiserror::Error;

/// The top-level error type for all CityGuide operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Provider errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Gateway errors ---
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failures from a backend adapter.
///
/// The credential check runs before any network I/O, so a missing key never
/// produces a wire call. None of these are retried by the pipeline; the
/// caller owns retry policy.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("{0} API key is not configured")]
    MissingCredential(&'static str),

    #[error("{0} endpoint is not configured")]
    MissingEndpoint(&'static str),

    #[error("API request failed: {body} (status: {status})")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend returned no reply: {0}")]
    EmptyReply(String),
}

/// Failures from the structured-data gateway.
///
/// The orchestrator downgrades these to an inline notice in the payload;
/// they never abort a conversation.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    #[error("Station data unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_status_and_body() {
        let err = Error::Provider(ProviderError::Api {
            status: 429,
            body: "Too many requests".into(),
        });
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn missing_credential_names_the_backend() {
        let err = ProviderError::MissingCredential("OpenAI");
        assert!(err.to_string().contains("OpenAI"));
    }

    #[test]
    fn gateway_error_displays_reason() {
        let err = Error::Gateway(GatewayError::Unavailable("connection refused".into()));
        assert!(err.to_string().contains("connection refused"));
    }
}
