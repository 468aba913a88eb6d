//! Scope filter — is a message within the assistant's topic domain?
//!
//! Plain substring containment against the lexicon's allow-list, checked
//! against both the original text and its lowercased form so English terms
//! match regardless of casing while CJK terms match as written. Known
//! limitation, kept deliberately: substrings inside unrelated words will
//! over-trigger, and synonyms or misspellings will under-trigger.

use cityguide_config::Lexicon;

/// Decides whether a message is in the allowed topic domain.
///
/// Pure and synchronous; no side effects, no network access.
pub struct ScopeFilter {
    terms: Vec<String>,
}

impl ScopeFilter {
    /// Build from the lexicon's scope allow-list.
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        Self {
            terms: lexicon.scope_terms.clone(),
        }
    }

    /// True iff the message contains any allow-list term.
    pub fn is_in_scope(&self, message: &str) -> bool {
        let lower = message.to_lowercase();
        self.terms
            .iter()
            .any(|term| message.contains(term.as_str()) || lower.contains(term.as_str()))
    }
}
