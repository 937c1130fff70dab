//! Static type resolution.
//!
//! Resolution is a pure function of the tree shape: no symbol information
//! is consulted, nothing is cached, and repeated calls on an unmodified
//! tree always agree. The evaluator and the bytecode compiler both branch
//! on the resolved type, so this is the single source of truth for which
//! physical representation an expression produces.

use ocelot_ast::{AdditiveExpr, Expr, LiteralKind};
use ocelot_core::Type;

/// Resolve the static result type of an expression.
pub fn resolved_type(expr: &Expr<'_>) -> Type {
    match expr {
        Expr::Literal(lit) => match lit.kind {
            LiteralKind::Int(_) => Type::Int,
            LiteralKind::Str(_) => Type::Str,
            LiteralKind::Bool(_) => Type::Bool,
            LiteralKind::Null => Type::Null,
        },
        Expr::Additive(add) => additive_type(add),
        Expr::Equality(_) => Type::Bool,
    }
}

/// Resolve the result type of an additive node from its operands.
///
/// The node is string concatenation if either operand resolves `Str` or
/// `Null` (a null operand always concatenates as text), and integer
/// arithmetic otherwise.
pub fn additive_type(add: &AdditiveExpr<'_>) -> Type {
    if forces_text(resolved_type(add.left)) || forces_text(resolved_type(add.right)) {
        Type::Str
    } else {
        Type::Int
    }
}

fn forces_text(ty: Type) -> bool {
    matches!(ty, Type::Str | Type::Null)
}
