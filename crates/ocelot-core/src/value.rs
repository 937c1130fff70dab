//! Dynamically-typed runtime values.

use std::fmt;

/// A runtime value.
///
/// Both execution backends speak this type: the tree-walking evaluator
/// returns it directly and the VM stores it in stack slots, so results
/// from the two are directly comparable.
///
/// The `Display` impl renders the canonical textual form (`1`, `a`,
/// `true`, `null`). String concatenation and textual equality are both
/// defined over that rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// String value (owned).
    Str(String),
    /// Boolean value.
    Bool(bool),
    /// The null value.
    Null,
}

impl Value {
    /// A human-readable name for this value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::Null => "null",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
        }
    }
}
