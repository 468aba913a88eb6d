//! StationGateway trait — the capability boundary to the structured-data
//! source.
//!
//! The gateway is swappable (mock vs. live) without touching any caller;
//! the orchestrator only sees this trait.

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::station::StationRecord;

/// Queries bike-share station snapshots.
#[async_trait]
pub trait StationGateway: Send + Sync {
    /// Query stations, optionally filtered by a name-substring key, truncated
    /// to `limit` records. A `None` key returns all known stations.
    async fn query_stations(
        &self,
        key: Option<&str>,
        limit: usize,
    ) -> std::result::Result<Vec<StationRecord>, GatewayError>;
}
