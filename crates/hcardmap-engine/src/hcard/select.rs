//! Representative-card selection for callers that cannot ask a user.

use serde_json::Value;

/// Properties reduced to their first element by [`compact_card`].
const SINGLE_VALUED: [&str; 2] = ["url", "email"];

const UID_PROPERTY: &str = "uid";

/// ## Summary
/// Picks the card that best represents the page at `lookup`.
///
/// A lone candidate is returned as is. Among several, the first whose `uid`
/// or any top-level string value equals `lookup` wins, falling back to the
/// first candidate. `None` only for an empty slice.
#[must_use]
pub fn select_representative<'a>(candidates: &[&'a Value], lookup: &str) -> Option<&'a Value> {
    if let [only] = candidates {
        return Some(*only);
    }

    candidates
        .iter()
        .copied()
        .find(|card| refers_to(card, lookup))
        .or_else(|| candidates.first().copied())
}

fn refers_to(card: &Value, lookup: &str) -> bool {
    let Value::Object(members) = card else {
        return false;
    };
    if members.get(UID_PROPERTY).and_then(Value::as_str) == Some(lookup) {
        return true;
    }
    members.values().any(|value| match value {
        Value::String(text) => text == lookup,
        Value::Array(items) => items.iter().any(|item| item.as_str() == Some(lookup)),
        _ => false,
    })
}

/// Copy of `card` with list-valued `url` and `email` reduced to their first
/// element. An empty list becomes `null`.
#[must_use]
pub fn compact_card(card: &Value) -> Value {
    let mut compact = card.clone();
    if let Value::Object(members) = &mut compact {
        for property in SINGLE_VALUED {
            if let Some(value @ Value::Array(_)) = members.get_mut(property) {
                let first = value
                    .as_array()
                    .and_then(|items| items.first())
                    .cloned()
                    .unwrap_or(Value::Null);
                *value = first;
            }
        }
    }
    compact
}
