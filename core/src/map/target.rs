use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Right-hand side of an import map entry.
///
/// In a declaration any non-string JSON value is read as [`MappingTarget::Blocked`];
/// serialization writes blocked entries back as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Option<String>")]
pub enum MappingTarget {
    /// A URL, or a specifier passed through as-is.
    Address(String),
    /// Deliberately unresolvable.
    Blocked,
}

impl MappingTarget {
    pub fn address(&self) -> Option<&str> {
        match self {
            MappingTarget::Address(address) => Some(address),
            MappingTarget::Blocked => None,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, MappingTarget::Blocked)
    }
}

impl From<Value> for MappingTarget {
    fn from(value: Value) -> Self {
        match value {
            Value::String(address) => MappingTarget::Address(address),
            _ => MappingTarget::Blocked,
        }
    }
}

impl From<&str> for MappingTarget {
    fn from(address: &str) -> Self {
        MappingTarget::Address(address.to_string())
    }
}

impl From<MappingTarget> for Option<String> {
    fn from(target: MappingTarget) -> Self {
        match target {
            MappingTarget::Address(address) => Some(address),
            MappingTarget::Blocked => None,
        }
    }
}

impl fmt::Display for MappingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingTarget::Address(address) => f.write_str(address),
            MappingTarget::Blocked => f.write_str("null"),
        }
    }
}
