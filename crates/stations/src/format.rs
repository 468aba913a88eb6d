//! Human-readable rendering of station records.
//!
//! The output is embedded verbatim in the payload's retrieved-data section,
//! so the format is stable: a count line, then one numbered block per
//! station. An empty slice renders the fixed "no results" string.

use cityguide_core::{StationRecord, StationStatus};

/// The fixed string returned for an empty record list.
pub const NO_RESULTS: &str = "目前沒有找到相關的 YouBike 站點資料。";

/// Render a numbered, human-readable block for a list of stations.
pub fn format_stations(stations: &[StationRecord]) -> String {
    if stations.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut out = format!("找到 {} 個 YouBike 站點：\n\n", stations.len());

    for (index, station) in stations.iter().enumerate() {
        out.push_str(&format!("**{}. {}**\n", index + 1, station.name));
        out.push_str(&format!("   📍 地址：{}\n", station.address));
        out.push_str(&format!("   🚲 可借：{} 輛\n", station.available_bikes));
        out.push_str(&format!("   🅿️ 可還：{} 位\n", station.available_spaces));
        out.push_str(&format!(
            "   ℹ️ 狀態：{}\n",
            match station.status {
                StationStatus::Active => "營運中",
                StationStatus::Inactive => "暫停服務",
            }
        ));

        if let Some(distance) = station.distance_m {
            out.push_str(&format!("   📏 距離：{}m\n", distance.round() as i64));
        }

        out.push('\n');
    }

    out
}
