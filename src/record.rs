use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One item in a dataset: a mapping of named fields. The engine is
/// schema-agnostic apart from the `id` field used for item lookup.
pub type Record = Map<String, Value>;

/// Record identifiers are integers or strings, matching a record's `id`
/// field by type and value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Str(String),
}

impl RecordId {
    /// True when `value` is the JSON representation of this id.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Int(id), Value::Number(n)) => n.as_i64() == Some(*id),
            (Self::Str(id), Value::String(s)) => id == s,
            _ => false,
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::Str(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self::Str(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Str(id) => write!(f, "{id}"),
        }
    }
}
