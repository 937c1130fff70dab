//! Source-to-source emission.
//!
//! The target language's operators already carry these dynamic semantics
//! (`+` coerces to concatenation when either side is a string), so
//! transpilation is purely syntactic: left operand, the operator token's
//! literal lexeme, right operand, in traversal order. No parentheses or
//! spacing are added, and no type-directed branching happens here.

use ocelot_ast::{Expr, LiteralKind};

/// Append the textual form of `expr` to `out`.
pub fn transpile(expr: &Expr<'_>, out: &mut String) {
    match expr {
        Expr::Literal(lit) => transpile_literal(&lit.kind, out),
        Expr::Additive(add) => {
            transpile(add.left, out);
            out.push_str(add.operator.lexeme);
            transpile(add.right, out);
        }
        Expr::Equality(eq) => {
            transpile(eq.left, out);
            out.push_str(eq.operator.lexeme);
            transpile(eq.right, out);
        }
    }
}

fn transpile_literal(kind: &LiteralKind<'_>, out: &mut String) {
    match kind {
        LiteralKind::Int(v) => out.push_str(&v.to_string()),
        LiteralKind::Str(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        LiteralKind::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        LiteralKind::Null => out.push_str("null"),
    }
}
