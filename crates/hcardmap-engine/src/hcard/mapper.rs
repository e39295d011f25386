//! Two-phase mapping driver.

use serde_json::Value;

use super::core::{CandidateSet, MappingSpec, NormalizedCard};
use super::map::{MappingReport, Sink, apply_mapping};
use super::normalize::{Envelope, infer_name, unwrap};
use crate::error::{EngineError, EngineResult};

/// Result of the first phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Proposal {
    /// Exactly one card; ready to be mapped.
    Ready(NormalizedCard),
    /// Several distinct cards; the caller picks one and calls
    /// [`HcardMapper::resume`].
    Choose(CandidateSet),
}

/// Result of a full run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Mapped(MappingReport),
    SelectionRequired(CandidateSet),
}

/// Maps parser responses onto a sink with a fixed mapping.
#[derive(Debug, Clone)]
pub struct HcardMapper {
    mapping: MappingSpec,
}

impl HcardMapper {
    #[must_use]
    pub const fn new(mapping: MappingSpec) -> Self {
        Self { mapping }
    }

    #[must_use]
    pub const fn mapping(&self) -> &MappingSpec {
        &self.mapping
    }

    /// ## Summary
    /// Normalizes a parser response.
    ///
    /// ## Errors
    /// `NotFound` if the response holds no card, `MalformedRecord` if it
    /// cannot be flattened. Malformed records are logged with the response.
    pub fn propose(&self, response: &Value) -> EngineResult<Proposal> {
        match unwrap(response) {
            Ok(Envelope::Single(card)) => Ok(Proposal::Ready(card)),
            Ok(Envelope::Multiple(candidates)) => {
                tracing::debug!(
                    candidates = candidates.len(),
                    "Several hCards found, selection required"
                );
                Ok(Proposal::Choose(candidates))
            }
            Err(err) => {
                if let EngineError::MalformedRecord { property, reason } = &err {
                    tracing::warn!(%property, %reason, card = %response, "Error during hCard mapping");
                }
                Err(err)
            }
        }
    }

    /// ## Summary
    /// Parses `body` as JSON and normalizes it.
    ///
    /// ## Errors
    /// `JsonError` if `body` is not JSON, otherwise as [`Self::propose`].
    pub fn propose_str(&self, body: &str) -> EngineResult<Proposal> {
        let response: Value = serde_json::from_str(body)?;
        self.propose(&response)
    }

    /// Infers the implied name, then writes the card to `sink`.
    pub fn map_card<S: Sink + ?Sized>(&self, mut card: NormalizedCard, sink: &mut S) -> MappingReport {
        infer_name(&mut card);
        apply_mapping(&card, &self.mapping, sink)
    }

    /// ## Summary
    /// Maps the candidate the caller picked.
    ///
    /// ## Errors
    /// Returns `InvalidSelection` if `index` is out of range; nothing is
    /// written then.
    pub fn resume<S: Sink + ?Sized>(
        &self,
        candidates: &CandidateSet,
        index: usize,
        sink: &mut S,
    ) -> EngineResult<MappingReport> {
        let card = candidates.choose(index)?.clone();
        Ok(self.map_card(card, sink))
    }

    /// ## Summary
    /// Normalizes `response` and maps it when it holds exactly one card.
    ///
    /// ## Errors
    /// As [`Self::propose`].
    pub fn run<S: Sink + ?Sized>(&self, response: &Value, sink: &mut S) -> EngineResult<RunOutcome> {
        Ok(match self.propose(response)? {
            Proposal::Ready(card) => RunOutcome::Mapped(self.map_card(card, sink)),
            Proposal::Choose(candidates) => RunOutcome::SelectionRequired(candidates),
        })
    }
}
