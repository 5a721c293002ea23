// ─────────────────────────────────────────────────────────────────────
// Calco — Host Values and Call Outcomes
// ─────────────────────────────────────────────────────────────────────

use std::fmt;

use serde::{Deserialize, Serialize};

/// An argument as the hosting process hands it to the dispatcher,
/// before coercion to a native double.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    Float(f64),
    Int(i64),
    Bool(bool),
    Str(String),
    /// Anything else; carries the host-side type name for error reporting.
    Unsupported(String),
}

impl HostValue {
    /// Host-side type name, used in `NonNumeric` errors.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::Bool(_) => "bool",
            Self::Str(_) => "str",
            Self::Unsupported(name) => name,
        }
    }
}

impl From<f64> for HostValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for HostValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for HostValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for HostValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

/// Result of a successful call: a number (NaN and ±Infinity included)
/// or the answer of a classification predicate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CallOutcome {
    Number(f64),
    Flag(bool),
}

impl CallOutcome {
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Self::Number(v) => Some(v),
            Self::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match *self {
            Self::Flag(b) => Some(b),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for CallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}
