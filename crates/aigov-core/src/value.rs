//! # Intake Field Values
//!
//! Defines [`FieldValue`], the closed sum type over every shape a
//! compliance-form field can take, and [`IntakeFields`], the mapping of
//! field keys to values that a user edits field-by-field in the intake
//! wizard.
//!
//! ## Design Decision
//!
//! Each value is a closed sum over {null, boolean, number, string,
//! sequence, map}, so completeness checks pattern-match exhaustively
//! instead of relying on runtime truthiness. "Absent" is not a variant: a key that
//! was never written and a key explicitly set to null are
//! indistinguishable by design, and both are handled at the map lookup.
//!
//! On the wire these are plain JSON values (`serde(untagged)`), so the
//! intake payload `{"system_name": "Foo", "deployed": false}` needs no
//! envelope or tagging.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single compliance-form field value.
///
/// Covers every JSON shape the intake wizard can produce. The
/// completeness predicate [`FieldValue::is_empty`] is the only piece of
/// interpretation applied to these values; everything else is carried
/// through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Explicit null — treated identically to an absent key.
    Null,
    /// Boolean flag. `false` is a real answer, not an empty one.
    Bool(bool),
    /// Numeric value. `0` is a real answer, not an empty one.
    Number(serde_json::Number),
    /// Free-text value. Whitespace-only text counts as empty.
    Text(String),
    /// Multi-select / repeated values. An empty list counts as empty.
    List(Vec<FieldValue>),
    /// Nested object (e.g., a structured address block). Any map,
    /// including `{}`, counts as filled in.
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Whether this value counts as "not filled in" for readiness purposes.
    ///
    /// Empty: null, strings that trim to nothing, zero-length lists.
    /// Everything else — including `false`, `0`, and `{}` — is a real
    /// answer.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Bool(_) | Self::Number(_) | Self::Map(_) => false,
        }
    }

    /// Short lowercase name of the value's shape, for log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

/// The live field state of one compliance record.
///
/// Owned and mutated by the surrounding editing layer (API handlers, CLI
/// file loading); the readiness evaluator only ever reads it. Keys are
/// kept in a `BTreeMap` so serialized records are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntakeFields(BTreeMap<String, FieldValue>);

impl IntakeFields {
    /// Create an empty field map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a field value by key.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Set a field value, returning the previous value if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove a field, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.0.remove(key)
    }

    /// Merge another field map into this one. Later values win.
    pub fn merge(&mut self, other: IntakeFields) {
        self.0.extend(other.0);
    }

    /// Number of fields that have been written (including explicit nulls).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field has been written yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }
}

impl From<BTreeMap<String, FieldValue>> for IntakeFields {
    fn from(map: BTreeMap<String, FieldValue>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, FieldValue)> for IntakeFields {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
