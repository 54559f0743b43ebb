//! Owner resolution
//!
//! The owner of a task is the lower-cased first word of its text.
//! Upstream extraction phrases tasks person-first ("Maria will ..."),
//! which is the only reason this proxy works; pronoun-led or passive
//! sentences resolve to words like "we" or "the".

use actionflow_core::OwnerToken;

/// Resolve the owner token of a task's text
#[inline]
#[must_use]
pub fn resolve_owner(text: &str) -> OwnerToken {
    OwnerToken::from_text(text)
}

/// True when `owner` occurs anywhere in `lower` (already lower-cased)
///
/// An empty owner never matches.
#[inline]
#[must_use]
pub fn mentions_owner(lower: &str, owner: &OwnerToken) -> bool {
    !owner.is_empty() && lower.contains(owner.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_first_word() {
        assert_eq!(resolve_owner("Raj will update the frontend").as_str(), "raj");
    }

    #[test]
    fn pronoun_led_text_resolves_to_pronoun() {
        assert_eq!(resolve_owner("We should fix the build").as_str(), "we");
    }

    #[test]
    fn mention_is_substring() {
        let owner = resolve_owner("Raj will fix it");
        assert!(mentions_owner("sara will review after raj finishes", &owner));
        assert!(mentions_owner("the rajah arrives", &owner));
        assert!(!mentions_owner("sara will review", &owner));
    }

    #[test]
    fn empty_owner_never_matches() {
        assert!(!mentions_owner("anything", &resolve_owner("")));
    }
}
