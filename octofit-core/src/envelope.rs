//! Response Envelope Normalization
//!
//! Collection endpoints answer either with a bare JSON array or with a paginated
//! envelope exposing the items under `results`. Both collapse to a plain list
//! here so no view has to care which one it got.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Paginated envelope, as emitted by page-number pagination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: usize,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Single page holding every item
    pub fn single(results: Vec<T>) -> Self {
        Self {
            count: results.len(),
            next: None,
            previous: None,
            results,
        }
    }
}

/// Observed shape of a collection response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyShape {
    /// Bare JSON array
    Array,
    /// Object exposing a `results` array
    Envelope,
    /// Anything else; normalizes to an empty list
    Other,
}

/// Classify a body without consuming it
pub fn classify(body: &Value) -> BodyShape {
    match body {
        Value::Array(_) => BodyShape::Array,
        Value::Object(map) if matches!(map.get("results"), Some(Value::Array(_))) => {
            BodyShape::Envelope
        }
        _ => BodyShape::Other,
    }
}

/// Normalize a response body into its list of items.
///
/// Uses `results` when present, otherwise the body itself. Anything that is not
/// an array at that point becomes an empty list; this never fails.
pub fn to_list(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
