//! Type/value flattening.
//!
//! Collapses the parser-specific shapes of a [`RawRecord`] into a
//! [`NormalizedCard`] whose leaves are unescaped strings:
//!
//! - lists keep their first element only;
//! - `{type, value}` becomes `{<type>: value}`, zipping list types with list
//!   values;
//! - `{href, value}` becomes `{<property>: value}`;
//! - members next to either pair are flattened beside the collapsed value;
//! - an open-struct `table` is collapsed like a type/value pair and merged
//!   next to the other members of the property holding it.

use super::unescape::unescape_html;
use crate::error::{EngineError, EngineResult};
use crate::hcard::core::{CardValue, NormalizedCard, OpenStructTable, RawRecord};

/// Property name used in diagnostics for the card root.
const ROOT: &str = "(card)";

/// ## Summary
/// Flattens one raw card.
///
/// ## Errors
/// Returns `MalformedRecord` if the root is not an object or a nested
/// type/value pair cannot be collapsed. No partial card is returned.
pub fn flatten(record: &RawRecord) -> EngineResult<NormalizedCard> {
    match record {
        RawRecord::Object(members) => flatten_members(members),
        RawRecord::OpenStruct { table, members } => {
            let mut card = flatten_members(members)?;
            merge_open_struct(&mut card, ROOT, table, None)?;
            Ok(card)
        }
        RawRecord::TypeValue {
            kind,
            value,
            members,
        } => {
            let mut card = collapse_type_value(ROOT, kind, value)?;
            flatten_members_into(&mut card, members)?;
            Ok(card)
        }
        other => Err(EngineError::malformed(
            ROOT,
            format!("expected an object, found {}", other.shape()),
        )),
    }
}

fn flatten_members(members: &[(String, RawRecord)]) -> EngineResult<NormalizedCard> {
    let mut card = NormalizedCard::new();
    flatten_members_into(&mut card, members)?;
    Ok(card)
}

/// Flattens `record` and stores it under `name`. `name` doubles as the
/// implied type for href/value pairs and untyped tables below it.
fn flatten_into(card: &mut NormalizedCard, name: &str, record: &RawRecord) -> EngineResult<()> {
    match record {
        RawRecord::Null => {}
        RawRecord::Scalar(text) => card.insert(name, CardValue::Text(unescape_html(text))),
        RawRecord::List(items) => {
            if let Some(first) = items.first() {
                flatten_into(card, name, first)?;
            }
        }
        RawRecord::TypeValue {
            kind,
            value,
            members,
        } => {
            let mut bag = collapse_type_value(name, kind, value)?;
            flatten_members_into(&mut bag, members)?;
            card.insert(name, CardValue::Nested(bag));
        }
        RawRecord::HrefValue { value, members, .. } => {
            let mut bag = NormalizedCard::new();
            flatten_into(&mut bag, name, value)?;
            flatten_members_into(&mut bag, members)?;
            card.insert(name, CardValue::Nested(bag));
        }
        RawRecord::OpenStruct { table, members } => {
            let mut nested = flatten_members(members)?;
            merge_open_struct(&mut nested, name, table, Some(name))?;
            card.insert(name, CardValue::Nested(nested));
        }
        RawRecord::Object(members) => {
            card.insert(name, CardValue::Nested(flatten_members(members)?));
        }
    }
    Ok(())
}

fn flatten_members_into(
    card: &mut NormalizedCard,
    members: &[(String, RawRecord)],
) -> EngineResult<()> {
    for (name, record) in members {
        flatten_into(card, name, record)?;
    }
    Ok(())
}

fn collapse_type_value(
    property: &str,
    kind: &RawRecord,
    value: &RawRecord,
) -> EngineResult<NormalizedCard> {
    let mut bag = NormalizedCard::new();
    match kind {
        RawRecord::Scalar(label) => flatten_into(&mut bag, label, value)?,
        RawRecord::List(labels) => {
            let RawRecord::List(values) = value else {
                return Err(EngineError::malformed(
                    property,
                    format!("list of types paired with a {}", value.shape()),
                ));
            };
            if labels.len() != values.len() {
                return Err(EngineError::malformed(
                    property,
                    format!("{} types for {} values", labels.len(), values.len()),
                ));
            }
            for (label, value) in labels.iter().zip(values) {
                let RawRecord::Scalar(label) = label else {
                    return Err(EngineError::malformed(
                        property,
                        format!("type must be a string, found {}", label.shape()),
                    ));
                };
                flatten_into(&mut bag, label, value)?;
            }
        }
        other => {
            return Err(EngineError::malformed(
                property,
                format!("type must be a string or a list, found {}", other.shape()),
            ));
        }
    }
    Ok(bag)
}

fn merge_open_struct(
    card: &mut NormalizedCard,
    property: &str,
    table: &OpenStructTable,
    implied_type: Option<&str>,
) -> EngineResult<()> {
    match (&table.kind, &table.value, implied_type) {
        (Some(kind), Some(value), _) => {
            let bag = collapse_type_value(property, kind, value)?;
            card.merge(bag);
        }
        (None, Some(value), Some(implied_type)) => flatten_into(card, implied_type, value)?,
        _ => {
            tracing::trace!(property, "open-struct table without usable values");
        }
    }
    Ok(())
}
