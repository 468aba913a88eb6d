//! The lexicon — externally supplied term lists driving the heuristics.
//!
//! Three independent datasets:
//!
//! - `scope_terms`: allow-list for the scope filter. A message is in scope
//!   iff it contains any of these as a substring.
//! - `trigger_terms`: terms that mark a message as needing live bike-share
//!   data.
//! - `station_names`: known station names in priority order; the key
//!   extractor returns the first one present in the message.
//! - `station_markers`: marker tokens ("站", "點") used by the fallback
//!   pattern that captures an unknown station name.
//!
//! The defaults cover Taichung; any of the lists can be replaced wholesale
//! through the config file.

use serde::{Deserialize, Serialize};

/// Term lists for the scope filter and augmentation detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Scope allow-list: place names and domain keywords.
    #[serde(default = "default_scope_terms")]
    pub scope_terms: Vec<String>,

    /// Terms that trigger a live station-data lookup.
    #[serde(default = "default_trigger_terms")]
    pub trigger_terms: Vec<String>,

    /// Known station names, highest priority first.
    #[serde(default = "default_station_names")]
    pub station_names: Vec<String>,

    /// Marker tokens that follow a station name in free text.
    #[serde(default = "default_station_markers")]
    pub station_markers: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            scope_terms: default_scope_terms(),
            trigger_terms: default_trigger_terms(),
            station_names: default_station_names(),
            station_markers: default_station_markers(),
        }
    }
}

fn to_strings(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|s| s.to_string()).collect()
}

fn default_scope_terms() -> Vec<String> {
    to_strings(&[
        // City names
        "台中",
        "臺中",
        "taichung",
        // Landmarks and districts
        "逢甲",
        "一中",
        "高美濕地",
        "審計新村",
        "彩虹眷村",
        "歌劇院",
        "科博館",
        "美術館",
        "國美館",
        "宮原眼科",
        "草悟道",
        "東海大學",
        "大甲",
        "梧棲",
        "火車站",
        // Tourism domain keywords
        "旅遊",
        "景點",
        "美食",
        "夜市",
        "小吃",
        "住宿",
        "飯店",
        "交通",
        "公車",
        "捷運",
        "天氣",
        // Bike-share terms stay in scope so augmented queries pass the filter
        "ubike",
        "youbike",
        "自行車",
        "腳踏車",
        "單車",
    ])
}

fn default_trigger_terms() -> Vec<String> {
    to_strings(&[
        "ubike",
        "youbike",
        "u-bike",
        "you-bike",
        "自行車",
        "腳踏車",
        "單車",
        "借車",
        "還車",
        "站點",
        "停靠站",
    ])
}

fn default_station_names() -> Vec<String> {
    to_strings(&[
        "火車站",
        "台中火車站",
        "台中車站",
        "逢甲",
        "逢甲大學",
        "一中",
        "一中街",
        "一中商圈",
        "歌劇院",
        "國家歌劇院",
        "科博館",
        "自然科學博物館",
        "美術館",
        "國美館",
        "高美濕地",
        "審計新村",
        "彩虹眷村",
    ])
}

fn default_station_markers() -> Vec<String> {
    to_strings(&["站", "點"])
}
