//! Candidate cards awaiting a selection by the caller.

use super::card::NormalizedCard;
use crate::error::{EngineError, EngineResult};

/// Distinct candidate cards in first-seen order.
///
/// Built by [`dedup`](crate::hcard::normalize::dedup), so no two elements
/// are structurally equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    cards: Vec<NormalizedCard>,
}

impl CandidateSet {
    pub(crate) fn from_unique(cards: Vec<NormalizedCard>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NormalizedCard> {
        self.cards.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&NormalizedCard> {
        self.cards.get(index)
    }

    /// Display labels, index-aligned with the candidates.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.cards.iter().map(NormalizedCard::label).collect()
    }

    /// ## Summary
    /// Returns the candidate the caller picked.
    ///
    /// ## Errors
    /// Returns `InvalidSelection` if `index` is out of range.
    pub fn choose(&self, index: usize) -> EngineResult<&NormalizedCard> {
        self.cards.get(index).ok_or(EngineError::InvalidSelection {
            index,
            available: self.cards.len(),
        })
    }
}

impl IntoIterator for CandidateSet {
    type Item = NormalizedCard;
    type IntoIter = std::vec::IntoIter<NormalizedCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
