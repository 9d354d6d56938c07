//! Value kinds and default stringification.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The kind of a JSON value, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    List,
    Map,
}

impl ValueKind {
    /// The kind of `value`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::List,
            Value::Object(_) => Self::Map,
        }
    }

    /// Returns `true` for lists and maps.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::List | Self::Map)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::List => "list",
            Self::Map => "map",
        };
        f.write_str(name)
    }
}

/// Default textual form of a value.
///
/// Strings render as their raw text, composites as compact JSON, and the
/// remaining scalars as their JSON literal.
///
/// ```
/// use assay_types::stringify;
/// use serde_json::json;
///
/// assert_eq!(stringify(&json!("a")), "a");
/// assert_eq!(stringify(&json!({"b": "b"})), r#"{"b":"b"}"#);
/// assert_eq!(stringify(&json!(null)), "null");
/// ```
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
