//! Tree-walking evaluation.
//!
//! Evaluation recurses over operand subtrees, producing dynamically-typed
//! [`Value`]s, and applies each operation's runtime semantics at the
//! representation its statically resolved type promised. A value that
//! contradicts that promise is a fatal [`RuntimeError`] for the whole
//! run; nothing here recovers from it.

use ocelot_ast::{AdditiveExpr, EqualityExpr, Expr, LiteralKind};
use ocelot_core::{RuntimeError, Type, Value};

use crate::type_resolver::additive_type;

/// Maximum expression nesting depth the evaluator will walk.
///
/// Nesting depth is the only resource this core can exhaust; the guard
/// turns a stack overflow into a reportable fault well before the native
/// stack is at risk.
pub const MAX_EVAL_DEPTH: usize = 256;

/// Runtime state threaded through recursive evaluation.
///
/// Statement-level drivers own whatever bindings live here; the
/// expression layer never inspects the context beyond its depth guard
/// and passes it unchanged to operand evaluations. Every evaluation
/// takes a context, including paths that have no use for one.
#[derive(Debug, Default)]
pub struct EvalContext {
    depth: usize,
}

impl EvalContext {
    /// Create a fresh context.
    pub fn new() -> Self {
        Self::default()
    }

    fn enter(&mut self) -> Result<(), RuntimeError> {
        if self.depth == MAX_EVAL_DEPTH {
            return Err(RuntimeError::TooDeep {
                limit: MAX_EVAL_DEPTH,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn exit(&mut self) {
        self.depth -= 1;
    }
}

/// Evaluate an expression to a runtime value.
pub fn evaluate(expr: &Expr<'_>, ctx: &mut EvalContext) -> Result<Value, RuntimeError> {
    ctx.enter()?;
    let result = match expr {
        Expr::Literal(lit) => Ok(literal_value(&lit.kind)),
        Expr::Additive(add) => eval_additive(add, ctx),
        Expr::Equality(eq) => eval_equality(eq, ctx),
    };
    ctx.exit();
    result
}

fn literal_value(kind: &LiteralKind<'_>) -> Value {
    match kind {
        LiteralKind::Int(v) => Value::Int(*v),
        LiteralKind::Str(s) => Value::Str((*s).to_string()),
        LiteralKind::Bool(b) => Value::Bool(*b),
        LiteralKind::Null => Value::Null,
    }
}

fn eval_additive(add: &AdditiveExpr<'_>, ctx: &mut EvalContext) -> Result<Value, RuntimeError> {
    if additive_type(add) == Type::Int {
        let lhs = as_int(evaluate(add.left, ctx)?)?;
        let rhs = as_int(evaluate(add.right, ctx)?)?;
        let result = if add.is_add() {
            lhs.wrapping_add(rhs)
        } else {
            lhs.wrapping_sub(rhs)
        };
        Ok(Value::Int(result))
    } else {
        let lhs = evaluate(add.left, ctx)?;
        let rhs = evaluate(add.right, ctx)?;
        Ok(Value::Str(format!("{lhs}{rhs}")))
    }
}

fn eval_equality(eq: &EqualityExpr<'_>, ctx: &mut EvalContext) -> Result<Value, RuntimeError> {
    let lhs = evaluate(eq.left, ctx)?;
    let rhs = evaluate(eq.right, ctx)?;
    let equal = lhs.to_string() == rhs.to_string();
    Ok(Value::Bool(if eq.is_equal() { equal } else { !equal }))
}

fn as_int(value: Value) -> Result<i64, RuntimeError> {
    match value {
        Value::Int(v) => Ok(v),
        other => Err(RuntimeError::Representation {
            expected: "int",
            found: other.type_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;
    use ocelot_ast::{LiteralExpr, Token, TokenKind};
    use ocelot_core::Span;

    fn lit<'a>(arena: &'a Bump, kind: LiteralKind<'a>) -> &'a Expr<'a> {
        arena.alloc(Expr::Literal(LiteralExpr {
            kind,
            span: Span::point(1, 1),
        }))
    }

    fn additive<'a>(
        arena: &'a Bump,
        kind: TokenKind,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    ) -> &'a Expr<'a> {
        let op = Token::new(kind, kind.lexeme(), Span::point(1, 1));
        AdditiveExpr::alloc(arena, op, left, right)
    }

    fn equality<'a>(
        arena: &'a Bump,
        kind: TokenKind,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    ) -> &'a Expr<'a> {
        let op = Token::new(kind, kind.lexeme(), Span::point(1, 1));
        EqualityExpr::alloc(arena, op, left, right)
    }

    fn eval(expr: &Expr<'_>) -> Result<Value, RuntimeError> {
        evaluate(expr, &mut EvalContext::new())
    }

    #[test]
    fn int_addition_and_subtraction() {
        let arena = Bump::new();
        let one = lit(&arena, LiteralKind::Int(1));
        let two = lit(&arena, LiteralKind::Int(2));

        let sum = additive(&arena, TokenKind::Plus, one, two);
        assert_eq!(eval(sum), Ok(Value::Int(3)));

        let diff = additive(&arena, TokenKind::Minus, one, two);
        assert_eq!(eval(diff), Ok(Value::Int(-1)));
    }

    #[test]
    fn string_operand_concatenates_left_then_right() {
        let arena = Bump::new();
        let a = lit(&arena, LiteralKind::Str("a"));
        let one = lit(&arena, LiteralKind::Int(1));

        let left_str = additive(&arena, TokenKind::Plus, a, one);
        assert_eq!(eval(left_str), Ok(Value::Str("a1".to_string())));

        let right_str = additive(&arena, TokenKind::Plus, one, a);
        assert_eq!(eval(right_str), Ok(Value::Str("1a".to_string())));
    }

    #[test]
    fn null_operand_concatenates_as_text() {
        let arena = Bump::new();
        let one = lit(&arena, LiteralKind::Int(1));
        let null = lit(&arena, LiteralKind::Null);

        let expr = additive(&arena, TokenKind::Plus, one, null);
        assert_eq!(eval(expr), Ok(Value::Str("1null".to_string())));

        let both_null = additive(&arena, TokenKind::Plus, null, null);
        assert_eq!(eval(both_null), Ok(Value::Str("nullnull".to_string())));
    }

    #[test]
    fn bool_operand_concatenates_as_text() {
        let arena = Bump::new();
        let a = lit(&arena, LiteralKind::Str("a"));
        let yes = lit(&arena, LiteralKind::Bool(true));

        let expr = additive(&arena, TokenKind::Plus, a, yes);
        assert_eq!(eval(expr), Ok(Value::Str("atrue".to_string())));
    }

    #[test]
    fn equality_compares_textual_forms() {
        let arena = Bump::new();
        let one = lit(&arena, LiteralKind::Int(1));
        let one_text = lit(&arena, LiteralKind::Str("1"));
        let a = lit(&arena, LiteralKind::Str("a"));

        let same = equality(&arena, TokenKind::EqualEqual, one, one);
        assert_eq!(eval(same), Ok(Value::Bool(true)));

        let cross = equality(&arena, TokenKind::EqualEqual, one, one_text);
        assert_eq!(eval(cross), Ok(Value::Bool(true)));

        let differ = equality(&arena, TokenKind::EqualEqual, a, one);
        assert_eq!(eval(differ), Ok(Value::Bool(false)));
    }

    #[test]
    fn not_equal_is_the_exact_negation() {
        let arena = Bump::new();
        let one = lit(&arena, LiteralKind::Int(1));
        let a = lit(&arena, LiteralKind::Str("a"));

        let same = equality(&arena, TokenKind::BangEqual, one, one);
        assert_eq!(eval(same), Ok(Value::Bool(false)));

        let differ = equality(&arena, TokenKind::BangEqual, a, one);
        assert_eq!(eval(differ), Ok(Value::Bool(true)));
    }

    #[test]
    fn nested_int_subtree_evaluates_numerically_before_concatenation() {
        let arena = Bump::new();
        let inner = additive(
            &arena,
            TokenKind::Plus,
            lit(&arena, LiteralKind::Int(1)),
            lit(&arena, LiteralKind::Int(2)),
        );
        let outer = additive(&arena, TokenKind::Plus, inner, lit(&arena, LiteralKind::Str("x")));
        assert_eq!(eval(outer), Ok(Value::Str("3x".to_string())));
    }

    #[test]
    fn malformed_int_tree_faults_on_representation() {
        let arena = Bump::new();
        // Resolved type is Int but the right operand produces a bool;
        // validation would have flagged this tree.
        let expr = additive(
            &arena,
            TokenKind::Plus,
            lit(&arena, LiteralKind::Int(1)),
            lit(&arena, LiteralKind::Bool(true)),
        );
        assert_eq!(
            eval(expr),
            Err(RuntimeError::Representation {
                expected: "int",
                found: "bool",
            })
        );
    }

    #[test]
    fn pathological_nesting_faults_instead_of_overflowing() {
        let arena = Bump::new();
        let mut expr = lit(&arena, LiteralKind::Int(0));
        for _ in 0..MAX_EVAL_DEPTH {
            let op = Token::new(TokenKind::Plus, "+", Span::point(1, 1));
            expr = AdditiveExpr::alloc(&arena, op, expr, lit(&arena, LiteralKind::Int(1)));
        }
        assert_eq!(
            eval(expr),
            Err(RuntimeError::TooDeep {
                limit: MAX_EVAL_DEPTH,
            })
        );
    }

    #[test]
    fn wrapping_addition_matches_two_complement() {
        let arena = Bump::new();
        let max = lit(&arena, LiteralKind::Int(i64::MAX));
        let one = lit(&arena, LiteralKind::Int(1));
        let expr = additive(&arena, TokenKind::Plus, max, one);
        assert_eq!(eval(expr), Ok(Value::Int(i64::MIN)));
    }
}
