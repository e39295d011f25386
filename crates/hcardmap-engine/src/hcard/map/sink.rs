//! Destinations that mapped values are written to.

use std::collections::BTreeMap;

/// A key-addressable set of destinations, e.g. the fields of a form.
///
/// Writing to a key the sink does not contain is a no-op.
pub trait Sink {
    fn contains(&self, key: &str) -> bool;

    fn write(&mut self, key: &str, value: &str);
}

/// An in-memory form with a fixed set of declared fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSink {
    fields: BTreeMap<String, String>,
}

impl FormSink {
    /// Declares `fields`, all initially empty.
    #[must_use]
    pub fn with_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|field| (field.into(), String::new()))
                .collect(),
        }
    }

    /// Current value of a declared field; `None` if the field is undeclared.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        self.fields.values_mut().for_each(String::clear);
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl Sink for FormSink {
    fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Some(field) = self.fields.get_mut(key) {
            value.clone_into(field);
        }
    }
}
