//! The semantic type set of the expression layer.

use std::fmt;

/// The static type an expression is resolved to produce.
///
/// The set is closed: Ocelot's expression layer knows 64-bit integers,
/// text, booleans, and the type of the bare `null` literal. Backends
/// branch on the resolved type to pick a value's physical representation
/// before anything runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Signed 64-bit integer.
    Int,
    /// Text.
    Str,
    /// Boolean.
    Bool,
    /// The type of `null`.
    Null,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Type::Int => "int",
            Type::Str => "string",
            Type::Bool => "bool",
            Type::Null => "null",
        })
    }
}
