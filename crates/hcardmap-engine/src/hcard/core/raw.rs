//! Raw parser output, classified by shape.
//!
//! Upstream parsers encode the same `hCard` data in several ways. Each JSON
//! node is classified once into one of the shapes below so the flattener can
//! dispatch on them exhaustively.

use serde_json::{Map, Value};

/// Member carrying the type label of a `{type, value}` pair.
pub const TYPE_KEY: &str = "type";
/// Member carrying the payload of a `{type, value}` or `{href, value}` pair.
pub const VALUE_KEY: &str = "value";
/// Member carrying the link of a `{href, value}` pair.
pub const HREF_KEY: &str = "href";
/// Member holding an open-struct table.
pub const TABLE_KEY: &str = "table";

/// A node of a parser's JSON output.
#[derive(Debug, Clone, PartialEq)]
pub enum RawRecord {
    Null,
    /// Strings; numbers and booleans keep their JSON text.
    Scalar(String),
    List(Vec<RawRecord>),
    /// `{type, value}`. A list `kind` pairs positionally with a list `value`.
    /// `members` holds the other members of the object.
    TypeValue {
        kind: Box<RawRecord>,
        value: Box<RawRecord>,
        members: Vec<(String, RawRecord)>,
    },
    /// `{href, value}` without a type label, next to the other members.
    HrefValue {
        href: String,
        value: Box<RawRecord>,
        members: Vec<(String, RawRecord)>,
    },
    /// An object with a `table` member next to its other members.
    OpenStruct {
        table: OpenStructTable,
        members: Vec<(String, RawRecord)>,
    },
    Object(Vec<(String, RawRecord)>),
}

/// The parallel `type`/`value` members of an open-struct table.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenStructTable {
    pub kind: Option<Box<RawRecord>>,
    pub value: Option<Box<RawRecord>>,
}

impl RawRecord {
    /// Short name of the shape, for diagnostics.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Scalar(_) => "scalar",
            Self::List(_) => "list",
            Self::TypeValue { .. } => "type/value pair",
            Self::HrefValue { .. } => "href/value pair",
            Self::OpenStruct { .. } => "open-struct",
            Self::Object(_) => "object",
        }
    }

    fn classify(map: &Map<String, Value>) -> Self {
        let kind = map.get(TYPE_KEY).filter(|v| is_present(v));
        let value = map.get(VALUE_KEY).filter(|v| is_present(v));

        if let (Some(kind), Some(value)) = (kind, value) {
            return Self::TypeValue {
                kind: Box::new(Self::from(kind)),
                value: Box::new(Self::from(value)),
                members: members_except(map, &[TYPE_KEY, VALUE_KEY]),
            };
        }

        if let (Some(href), Some(value)) = (map.get(HREF_KEY).filter(|v| is_present(v)), value) {
            return Self::HrefValue {
                href: scalar_text(href),
                value: Box::new(Self::from(value)),
                members: members_except(map, &[HREF_KEY, VALUE_KEY]),
            };
        }

        if let Some(Value::Object(table)) = map.get(TABLE_KEY) {
            let field = |key: &str| {
                table
                    .get(key)
                    .filter(|v| is_present(v))
                    .map(|v| Box::new(Self::from(v)))
            };
            return Self::OpenStruct {
                table: OpenStructTable {
                    kind: field(TYPE_KEY),
                    value: field(VALUE_KEY),
                },
                members: members_except(map, &[TABLE_KEY]),
            };
        }

        Self::Object(
            map.iter()
                .map(|(key, v)| (key.clone(), Self::from(v)))
                .collect(),
        )
    }
}

impl From<&Value> for RawRecord {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Scalar(b.to_string()),
            Value::Number(n) => Self::Scalar(n.to_string()),
            Value::String(s) => Self::Scalar(s.clone()),
            Value::Array(items) => Self::List(items.iter().map(Self::from).collect()),
            Value::Object(map) => Self::classify(map),
        }
    }
}

/// Parsers leave optional members as `null`, `""` or `false` instead of
/// omitting them; none of those count as present.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > f64::EPSILON),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Classified members of `map`, skipping the `consumed` keys.
fn members_except(map: &Map<String, Value>, consumed: &[&str]) -> Vec<(String, RawRecord)> {
    map.iter()
        .filter(|(key, _)| !consumed.contains(&key.as_str()))
        .map(|(key, v)| (key.clone(), RawRecord::from(v)))
        .collect()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
