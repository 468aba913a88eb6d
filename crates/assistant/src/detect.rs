//! Augmentation detector — does a message need live station data, and for
//! which station?
//!
//! Both checks are pure and synchronous. Trigger matching tests the
//! original casing as well as the lowercased text, so CJK terms (where
//! case-folding is a no-op) and mixed-case English terms both work.
//!
//! Key extraction is a best-effort heuristic, not an entity extractor:
//! first the known station names in lexicon priority order, then a pattern
//! that captures 2–8 non-punctuation characters immediately before a
//! station marker token ("站"/"點"). A miss degrades to "query all", which
//! is safe.

use cityguide_config::Lexicon;
use regex::Regex;

/// Detects the need for station-data augmentation and extracts the lookup
/// key from free text.
pub struct AugmentationDetector {
    triggers: Vec<String>,
    station_names: Vec<String>,
    marker_pattern: Regex,
}

impl AugmentationDetector {
    /// Build from the lexicon's trigger terms, station names, and marker
    /// tokens.
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        let markers: String = lexicon
            .station_markers
            .iter()
            .map(|m| regex::escape(m))
            .collect();

        // Marker list is never empty in practice; an empty class would be
        // invalid, so fall back to a never-matching pattern.
        let marker_pattern = if markers.is_empty() {
            Regex::new(r"[^\s\S]").expect("fallback pattern is valid")
        } else {
            Regex::new(&format!(r"([^\s，。！？]{{2,8}})[{markers}]"))
                .expect("marker pattern is valid")
        };

        Self {
            triggers: lexicon.trigger_terms.clone(),
            station_names: lexicon.station_names.clone(),
            marker_pattern,
        }
    }

    /// True iff the message contains any configured trigger term.
    pub fn needs_augmentation(&self, message: &str) -> bool {
        let lower = message.to_lowercase();
        self.triggers
            .iter()
            .any(|term| message.contains(term.as_str()) || lower.contains(term.as_str()))
    }

    /// The first known station name present in the message, in lexicon
    /// priority order; otherwise the marker-pattern capture; otherwise
    /// `None`.
    pub fn extract_key(&self, message: &str) -> Option<String> {
        for name in &self.station_names {
            if message.contains(name.as_str()) {
                return Some(name.clone());
            }
        }

        self.marker_pattern
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> AugmentationDetector {
        AugmentationDetector::from_lexicon(&Lexicon::default())
    }

    #[test]
    fn trigger_term_detected() {
        assert!(detector().needs_augmentation("哪裡可以借腳踏車？"));
        assert!(detector().needs_augmentation("最近的 YouBike 站在哪？"));
    }

    #[test]
    fn trigger_matching_is_case_insensitive() {
        assert!(detector().needs_augmentation("Where is the nearest UBIKE?"));
    }

    #[test]
    fn no_trigger_no_augmentation() {
        assert!(!detector().needs_augmentation("台中有什麼好吃的？"));
    }

    #[test]
    fn known_name_wins_in_priority_order() {
        // Both 逢甲 and 科博館 appear; 逢甲 comes first in the lexicon.
        let key = detector().extract_key("從逢甲到科博館騎 YouBike 要多久？");
        assert_eq!(key.as_deref(), Some("逢甲"));
    }

    #[test]
    fn marker_fallback_captures_unknown_station() {
        let key = detector().extract_key("請問市政府站還有車嗎？");
        assert_eq!(key.as_deref(), Some("請問市政府"));
    }

    #[test]
    fn fallback_stops_at_punctuation() {
        let key = detector().extract_key("你好，市政府站有車嗎？");
        assert_eq!(key.as_deref(), Some("市政府"));
    }

    #[test]
    fn no_name_no_marker_returns_none() {
        assert!(detector().extract_key("哪裡可以借腳踏車？").is_none());
    }
}
