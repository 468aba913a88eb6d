//! Core domain types and traits for CityGuide.
//!
//! This crate defines the value objects and capability seams shared by the
//! rest of the workspace:
//!
//! - [`Message`] / [`Role`] — one turn of a conversation
//! - [`StationRecord`] — a bike-share station snapshot
//! - [`ChatBackend`] — the abstraction over LLM backends
//! - [`StationGateway`] — the abstraction over the structured-data source
//! - the error taxonomy ([`ProviderError`], [`GatewayError`])

pub mod backend;
pub mod error;
pub mod gateway;
pub mod message;
pub mod station;

pub use backend::{ChatBackend, ProviderId, ProviderSettings, ProviderUpdate};
pub use error::{Error, GatewayError, ProviderError, Result};
pub use gateway::StationGateway;
pub use message::{Message, Role};
pub use station::{StationRecord, StationStatus};
