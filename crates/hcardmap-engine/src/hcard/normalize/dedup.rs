//! Candidate deduplication.

use crate::hcard::core::{CandidateSet, NormalizedCard};

/// ## Summary
/// Drops cards structurally equal to an earlier one, keeping first-seen
/// order.
///
/// Equality is byte equality of the canonical JSON form. Candidate lists are
/// short, so the quadratic scan is fine.
#[must_use]
pub fn dedup(cards: impl IntoIterator<Item = NormalizedCard>) -> CandidateSet {
    let mut seen: Vec<String> = Vec::new();
    let mut unique = Vec::new();

    for card in cards {
        let canonical = card.canonical();
        if seen.contains(&canonical) {
            tracing::trace!(card = %canonical, "Dropping duplicate candidate");
            continue;
        }
        seen.push(canonical);
        unique.push(card);
    }

    CandidateSet::from_unique(unique)
}
