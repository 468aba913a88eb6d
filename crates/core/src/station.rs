//! Bike-share station snapshot types.
//!
//! Records returned by a [`crate::StationGateway`] are read-only snapshots:
//! every query re-fetches, nothing is cached or mutated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operational status of a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    /// In service
    Active,
    /// Temporarily out of service
    Inactive,
}

/// A single bike-share station snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationRecord {
    /// Station identifier
    pub id: u32,

    /// Station name (the augmentation key matches against this)
    pub name: String,

    /// Street address
    pub address: String,

    /// WGS84 latitude
    pub latitude: f64,

    /// WGS84 longitude
    pub longitude: f64,

    /// Bikes currently available to rent
    pub available_bikes: u32,

    /// Free docks currently available to return a bike
    pub available_spaces: u32,

    /// Total dock count
    pub total_spaces: u32,

    /// Operational status
    pub status: StationStatus,

    /// When this snapshot was taken
    pub updated_at: DateTime<Utc>,

    /// Distance from a query point in meters, set only by nearby queries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StationRecord {
        StationRecord {
            id: 1,
            name: "台中火車站".into(),
            address: "台中市中區建國路172號".into(),
            latitude: 24.137,
            longitude: 120.685,
            available_bikes: 15,
            available_spaces: 25,
            total_spaces: 40,
            status: StationStatus::Active,
            updated_at: Utc::now(),
            distance_m: None,
        }
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"status\":\"active\""));
    }

    #[test]
    fn distance_omitted_when_absent() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(!json.contains("distance_m"));
    }

    #[test]
    fn record_roundtrip() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: StationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "台中火車站");
        assert_eq!(back.status, StationStatus::Active);
    }
}
