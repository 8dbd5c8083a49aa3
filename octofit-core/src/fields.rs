//! Field Values
//!
//! The API is loose about types: ids may be numbers or strings, counts may arrive
//! as strings, and optional fields come back missing, `null` or `""`. Display
//! projections read every field as a [`FieldValue`] and apply their own defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Any JSON scalar, with a catch-all for nested values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

impl FieldValue {
    /// Blank strings, zero, `false` and `null` count as absent
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            FieldValue::Integer(n) => *n != 0,
            FieldValue::Float(n) => *n != 0.0 && !n.is_nan(),
            FieldValue::Text(s) => !s.trim().is_empty(),
            FieldValue::Other(v) => !v.is_null(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Float(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Other(v) => write!(f, "{}", v),
        }
    }
}

/// The field if it is present
pub fn present(field: &Option<FieldValue>) -> Option<&FieldValue> {
    field.as_ref().filter(|v| v.is_present())
}

/// First present field of an alternation, in order
pub fn first_present<'a>(
    fields: impl IntoIterator<Item = &'a Option<FieldValue>>,
) -> Option<&'a FieldValue> {
    fields.into_iter().find_map(present)
}

/// Display text of a field, or `default` when absent
pub fn text_or(field: &Option<FieldValue>, default: &str) -> String {
    present(field)
        .map(ToString::to_string)
        .unwrap_or_else(|| default.to_string())
}
