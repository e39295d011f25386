//! The normalized card produced by flattening.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::mapping::normalize_key;

/// Formatted (full) name.
pub const FN_PROPERTY: &str = "fn";
/// Structured name.
pub const N_PROPERTY: &str = "n";
/// Organization.
pub const ORG_PROPERTY: &str = "org";
/// Given name inside `n`.
pub const GIVEN_NAME_PROPERTY: &str = "given_name";
/// Family name inside `n`.
pub const FAMILY_NAME_PROPERTY: &str = "family_name";
/// Organization name inside an `org` object.
pub const ORGANIZATION_NAME_PROPERTY: &str = "organization_name";

/// Label used for a candidate that carries no usable name.
pub const MISSING_FN_LABEL: &str = "The hCard is invalid (missing FN property)";

/// A value of a normalized card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardValue {
    Text(String),
    Nested(NormalizedCard),
}

/// A card whose leaves are all plain, unescaped strings.
///
/// Property order follows the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedCard {
    properties: Vec<(String, CardValue)>,
}

/// A text leaf reached while walking a card depth-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leaf<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl NormalizedCard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardValue> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Returns the property when it is a text leaf.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            CardValue::Text(text) => Some(text),
            CardValue::Nested(_) => None,
        }
    }

    /// Like [`Self::text`], but `name` is compared against normalized
    /// property names, so `given_name` finds `Given-Name`.
    #[must_use]
    pub fn text_by_key(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .filter(|(key, _)| normalize_key(key) == name)
            .find_map(|(_, value)| match value {
                CardValue::Text(text) => Some(text.as_str()),
                CardValue::Nested(_) => None,
            })
    }

    /// Returns the property when it is a nested card.
    #[must_use]
    pub fn nested(&self, name: &str) -> Option<&Self> {
        match self.get(name)? {
            CardValue::Nested(card) => Some(card),
            CardValue::Text(_) => None,
        }
    }

    /// Sets a property. An existing property keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: CardValue) {
        let name = name.into();
        if let Some(slot) = self.properties.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
        } else {
            self.properties.push((name, value));
        }
    }

    /// Inserts every property of `other`, overwriting same-named ones.
    pub fn merge(&mut self, other: Self) {
        for (name, value) in other.properties {
            self.insert(name, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CardValue)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// All text leaves, depth-first in property order.
    #[must_use]
    pub fn leaves(&self) -> Vec<Leaf<'_>> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<Leaf<'a>>) {
        for (name, value) in &self.properties {
            match value {
                CardValue::Text(text) => leaves.push(Leaf {
                    name: name.as_str(),
                    value: text.as_str(),
                }),
                CardValue::Nested(card) => card.collect_leaves(leaves),
            }
        }
    }

    /// JSON form of the card, preserving property order.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .properties
            .iter()
            .map(|(name, value)| {
                let value = match value {
                    CardValue::Text(text) => Value::String(text.clone()),
                    CardValue::Nested(card) => card.to_json(),
                };
                (name.clone(), value)
            })
            .collect();
        Value::Object(map)
    }

    /// Canonical serialization; equal strings mean structurally equal cards.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.to_json().to_string()
    }

    /// A short human-readable description, used to tell candidates apart.
    #[must_use]
    pub fn label(&self) -> String {
        let full_name = self.text(FN_PROPERTY);
        let org = self.text(ORG_PROPERTY);

        match (full_name, org) {
            (Some(full_name), Some(org)) if full_name != org => format!("{full_name} ({org})"),
            (Some(full_name), _) => full_name.to_owned(),
            (None, org) => {
                let name = self.nested(N_PROPERTY);
                let family = name.and_then(|n| n.text_by_key(FAMILY_NAME_PROPERTY));
                let given = name.and_then(|n| n.text_by_key(GIVEN_NAME_PROPERTY));
                match (family, given, org) {
                    (Some(family), Some(given), Some(org)) => {
                        format!("{family}, {given} ({org})")
                    }
                    (Some(family), Some(given), None) => format!("{family}, {given}"),
                    _ => MISSING_FN_LABEL.to_owned(),
                }
            }
        }
    }
}

impl FromIterator<(String, CardValue)> for NormalizedCard {
    fn from_iter<I: IntoIterator<Item = (String, CardValue)>>(iter: I) -> Self {
        let mut card = Self::new();
        for (name, value) in iter {
            card.insert(name, value);
        }
        card
    }
}

impl Serialize for NormalizedCard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
