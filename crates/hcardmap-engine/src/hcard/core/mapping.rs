//! Caller-declared mapping from card properties to sink destinations.

use serde::de::{Deserialize, Deserializer, Error as _};
use serde_json::Value;

use hcardmap_core::error::CoreError;

use crate::error::EngineResult;

/// A mapping entry: either a destination key or a group of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingEntry {
    Destination(String),
    /// Variants that target one destination, e.g. `{tel, work, cell}`.
    Group(MappingSpec),
}

/// Ordered property → destination mapping.
///
/// Keys are matched case-insensitively and `-` is equivalent to `_`, so
/// `street-address` in a card matches a `street_address` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingSpec {
    entries: Vec<(String, MappingEntry)>,
}

/// Normalizes a property or mapping key for comparison.
#[must_use]
pub fn normalize_key(name: &str) -> String {
    name.to_lowercase().replace('-', "_")
}

impl MappingSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `property` to `destination`.
    #[must_use]
    pub fn field(mut self, property: impl Into<String>, destination: impl Into<String>) -> Self {
        self.entries
            .push((property.into(), MappingEntry::Destination(destination.into())));
        self
    }

    /// Adds a group of entries under `name`.
    #[must_use]
    pub fn group(mut self, name: impl Into<String>, group: Self) -> Self {
        self.entries.push((name.into(), MappingEntry::Group(group)));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &MappingEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Every destination, depth-first in declaration order.
    #[must_use]
    pub fn destinations(&self) -> Vec<&str> {
        let mut destinations = Vec::new();
        for (_, entry) in &self.entries {
            match entry {
                MappingEntry::Destination(destination) => destinations.push(destination.as_str()),
                MappingEntry::Group(group) => destinations.extend(group.destinations()),
            }
        }
        destinations
    }

    /// ## Summary
    /// Builds a mapping from a JSON object whose values are destination
    /// strings or nested objects.
    ///
    /// ## Errors
    /// Returns an error if the value is not an object or an entry is neither
    /// a string nor an object.
    pub fn from_json(value: &Value) -> EngineResult<Self> {
        let Value::Object(map) = value else {
            return Err(
                CoreError::InvalidInput(format!("mapping must be an object, found {value}")).into(),
            );
        };

        let mut spec = Self::new();
        for (key, entry) in map {
            let entry = match entry {
                Value::String(destination) => MappingEntry::Destination(destination.clone()),
                Value::Object(_) => MappingEntry::Group(Self::from_json(entry)?),
                other => {
                    return Err(CoreError::InvalidInput(format!(
                        "mapping entry '{key}' must be a destination or a group, found {other}"
                    ))
                    .into());
                }
            };
            spec.entries.push((key.clone(), entry));
        }
        Ok(spec)
    }
}

impl<'de> Deserialize<'de> for MappingSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(D::Error::custom)
    }
}
