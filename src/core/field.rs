//! Field values read out of serialized resources
//!
//! Unique and natural-identifier checks compare fields by their JSON
//! representation so the same code works for every resource type.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A scalar field value extracted from a resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// Nested objects and arrays, compared structurally
    Composite(Value),
    Null,
}

impl FieldValue {
    /// Convert a JSON value into a field value
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Boolean(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => n
                    .as_f64()
                    .map(FieldValue::Float)
                    .unwrap_or_else(|| FieldValue::Composite(value.clone())),
            },
            Value::String(s) => FieldValue::String(s.clone()),
            other => FieldValue::Composite(other.clone()),
        }
    }

    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Text form used as a key by storage backends
    pub fn to_key(&self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            FieldValue::String(s) => Some(s.clone()),
            FieldValue::Integer(i) => Some(i.to_string()),
            FieldValue::Float(f) => Some(f.to_string()),
            FieldValue::Boolean(b) => Some(b.to_string()),
            FieldValue::Composite(v) => Some(v.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_key() {
            Some(key) => write!(f, "{}", key),
            None => write!(f, "null"),
        }
    }
}

/// Read a top-level field from a serialized resource
///
/// Missing fields read as [`FieldValue::Null`].
pub fn field_of(object: &Value, field: &str) -> FieldValue {
    object
        .get(field)
        .map(FieldValue::from_json)
        .unwrap_or(FieldValue::Null)
}

/// Read several fields at once, keeping the requested order
pub fn fields_of(object: &Value, fields: &[&'static str]) -> Vec<(&'static str, FieldValue)> {
    fields.iter().map(|f| (*f, field_of(object, f))).collect()
}
