//! `hCard` normalization and mapping.
//!
//! ## Pipeline
//! A parser response is unwrapped from its envelope, flattened into a
//! [`NormalizedCard`] and deduplicated. A single card gets its implied name
//! and is written to a [`Sink`] through a [`MappingSpec`]. Several distinct
//! cards are handed back as a [`CandidateSet`] so the caller can pick one.

pub mod core;
pub mod map;
pub mod mapper;
pub mod normalize;
pub mod select;

pub use self::core::{CandidateSet, CardValue, MappingEntry, MappingSpec, NormalizedCard, RawRecord};
pub use map::{FormSink, MappedField, MappingReport, Sink, apply_mapping};
pub use mapper::{HcardMapper, Proposal, RunOutcome};
pub use select::{compact_card, select_representative};

#[cfg(test)]
mod tests;
