//! In-process mock station gateway.
//!
//! Serves a seeded Taichung dataset so the full pipeline can run without a
//! live city feed. Snapshots are rebuilt on every query with a fresh
//! `updated_at` — nothing is cached, matching the live gateway contract.

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use cityguide_core::{GatewayError, StationGateway, StationRecord, StationStatus};

/// Mock gateway over a fixed station list.
pub struct MockStationGateway {
    stations: Vec<StationSeed>,
}

/// Static seed data for one station; timestamps are stamped at query time.
#[derive(Clone)]
struct StationSeed {
    id: u32,
    name: &'static str,
    address: &'static str,
    latitude: f64,
    longitude: f64,
    available_bikes: u32,
    available_spaces: u32,
    total_spaces: u32,
}

impl Default for MockStationGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStationGateway {
    /// Create a gateway over the built-in Taichung dataset.
    pub fn new() -> Self {
        Self {
            stations: seed_data(),
        }
    }

    /// Query stations within `radius_m` meters of a point, nearest first,
    /// with `distance_m` populated on each record.
    pub async fn query_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_m: f64,
    ) -> Result<Vec<StationRecord>, GatewayError> {
        debug!(latitude, longitude, radius_m, "Querying nearby stations");

        let mut records: Vec<StationRecord> = self
            .stations
            .iter()
            .filter_map(|seed| {
                let distance = haversine_m(latitude, longitude, seed.latitude, seed.longitude);
                (distance <= radius_m).then(|| {
                    let mut record = seed.to_record();
                    record.distance_m = Some(distance);
                    record
                })
            })
            .collect();

        records.sort_by(|a, b| {
            a.distance_m
                .partial_cmp(&b.distance_m)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(records)
    }
}

#[async_trait]
impl StationGateway for MockStationGateway {
    async fn query_stations(
        &self,
        key: Option<&str>,
        limit: usize,
    ) -> Result<Vec<StationRecord>, GatewayError> {
        debug!(key = key.unwrap_or("<all>"), limit, "Querying stations");

        let records = self
            .stations
            .iter()
            .filter(|seed| match key {
                Some(key) => seed.name.contains(key),
                None => true,
            })
            .take(limit)
            .map(StationSeed::to_record)
            .collect();

        Ok(records)
    }
}

impl StationSeed {
    fn to_record(&self) -> StationRecord {
        StationRecord {
            id: self.id,
            name: self.name.into(),
            address: self.address.into(),
            latitude: self.latitude,
            longitude: self.longitude,
            available_bikes: self.available_bikes,
            available_spaces: self.available_spaces,
            total_spaces: self.total_spaces,
            status: StationStatus::Active,
            updated_at: Utc::now(),
            distance_m: None,
        }
    }
}

/// Great-circle distance between two WGS84 points, in meters.
fn haversine_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const EARTH_RADIUS_M: f64 = 6_371_000.0;

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

fn seed_data() -> Vec<StationSeed> {
    vec![
        StationSeed {
            id: 1,
            name: "台中火車站",
            address: "台中市中區建國路172號",
            latitude: 24.137,
            longitude: 120.685,
            available_bikes: 15,
            available_spaces: 25,
            total_spaces: 40,
        },
        StationSeed {
            id: 2,
            name: "逢甲大學",
            address: "台中市西屯區文華路100號",
            latitude: 24.179,
            longitude: 120.648,
            available_bikes: 8,
            available_spaces: 12,
            total_spaces: 20,
        },
        StationSeed {
            id: 3,
            name: "一中商圈",
            address: "台中市北區一中街",
            latitude: 24.148,
            longitude: 120.685,
            available_bikes: 20,
            available_spaces: 10,
            total_spaces: 30,
        },
        StationSeed {
            id: 4,
            name: "國家歌劇院",
            address: "台中市西屯區惠來路二段101號",
            latitude: 24.162,
            longitude: 120.640,
            available_bikes: 5,
            available_spaces: 15,
            total_spaces: 20,
        },
        StationSeed {
            id: 5,
            name: "科博館",
            address: "台中市北區館前路1號",
            latitude: 24.157,
            longitude: 120.666,
            available_bikes: 12,
            available_spaces: 8,
            total_spaces: 20,
        },
    ]
}
