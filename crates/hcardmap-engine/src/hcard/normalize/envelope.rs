//! Response envelope unwrapping.
//!
//! Some parsers wrap their result in a single member: Optimus answers with
//! `{"hcard": ...}` and `ufXtract` with `{"vcard": [...]}`. Everything else
//! answers with a card object or a list of cards.

use serde_json::Value;

use super::dedup::dedup;
use super::flatten::flatten;
use crate::error::{EngineError, EngineResult};
use crate::hcard::core::{CandidateSet, NormalizedCard, RawRecord};

/// Wrapper member used by the Optimus parser.
pub const OPTIMUS_ENVELOPE: &str = "hcard";
/// Wrapper member used by the `ufXtract` parser.
pub const UFXTRACT_ENVELOPE: &str = "vcard";

/// An unwrapped parser response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    Single(NormalizedCard),
    /// More than one distinct card; the caller has to pick one.
    Multiple(CandidateSet),
}

/// Replaces the response with the content of its envelope members, in the
/// order Optimus then `ufXtract`. A `null` envelope member is ignored.
#[must_use]
pub fn strip_envelope(response: &Value) -> &Value {
    [OPTIMUS_ENVELOPE, UFXTRACT_ENVELOPE]
        .into_iter()
        .fold(response, |current, key| match current.get(key) {
            Some(inner) if !inner.is_null() => inner,
            _ => current,
        })
}

/// The raw candidate cards of a response, envelopes stripped and nulls
/// skipped. Nothing is flattened.
#[must_use]
pub fn candidates(response: &Value) -> Vec<&Value> {
    match strip_envelope(response) {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().filter(|item| !item.is_null()).collect(),
        other => vec![other],
    }
}

/// ## Summary
/// Strips envelopes and flattens the response into one card or a set of
/// distinct candidates.
///
/// ## Errors
/// Returns `NotFound` when the response holds no card and `MalformedRecord`
/// when it, or one of its list elements, is not an object.
pub fn unwrap(response: &Value) -> EngineResult<Envelope> {
    match strip_envelope(response) {
        Value::Null => Err(EngineError::NotFound),
        Value::Array(items) => unwrap_list(items),
        object @ Value::Object(_) => Ok(Envelope::Single(flatten(&RawRecord::from(object))?)),
        scalar => Err(EngineError::malformed(
            "(response)",
            format!("expected a card or a list of cards, found {scalar}"),
        )),
    }
}

fn unwrap_list(items: &[Value]) -> EngineResult<Envelope> {
    let mut cards = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::Null => {}
            Value::Object(_) => cards.push(flatten(&RawRecord::from(item))?),
            other => {
                return Err(EngineError::malformed(
                    format!("candidate[{index}]"),
                    format!("expected a card, found {other}"),
                ));
            }
        }
    }

    let set = dedup(cards);
    if set.len() > 1 {
        tracing::debug!(candidates = set.len(), "Response holds several distinct cards");
        return Ok(Envelope::Multiple(set));
    }
    set.into_iter()
        .next()
        .map(Envelope::Single)
        .ok_or(EngineError::NotFound)
}
