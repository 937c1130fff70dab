//! Expression AST nodes.
//!
//! The node set is closed: every backend matches exhaustively over
//! [`Expr`], so adding a node kind forces every backend to say what it
//! does with it. Operand links are arena references owned by exactly one
//! parent (no sharing, no cycles), and each node records the source span
//! it covers at construction time; diagnostics anchor to those spans.

use bumpalo::Bump;
use ocelot_core::Span;

use crate::token::{Token, TokenKind};

/// An expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    /// Literal leaf value.
    Literal(LiteralExpr<'ast>),
    /// Additive operation (`+`, `-`).
    Additive(&'ast AdditiveExpr<'ast>),
    /// Equality comparison (`==`, `!=`).
    Equality(&'ast EqualityExpr<'ast>),
}

impl<'ast> Expr<'ast> {
    /// Get the span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Self::Literal(e) => e.span,
            Self::Additive(e) => e.span,
            Self::Equality(e) => e.span,
        }
    }
}

/// A literal value leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralExpr<'ast> {
    /// The literal kind.
    pub kind: LiteralKind<'ast>,
    /// Source location.
    pub span: Span,
}

/// The kind of literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralKind<'ast> {
    /// Integer literal.
    Int(i64),
    /// String literal (arena-allocated contents, without quotes).
    Str(&'ast str),
    /// Boolean literal.
    Bool(bool),
    /// The `null` literal.
    Null,
}

/// An additive operation: integer arithmetic, or string concatenation
/// when either operand is textual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdditiveExpr<'ast> {
    /// The `+` or `-` token.
    pub operator: Token<'ast>,
    /// Left operand.
    pub left: &'ast Expr<'ast>,
    /// Right operand.
    pub right: &'ast Expr<'ast>,
    /// Source location, covering both operands.
    pub span: Span,
}

impl<'ast> AdditiveExpr<'ast> {
    /// Allocate an additive node in `arena`.
    ///
    /// The node's span is derived from its operands once, here; it never
    /// changes afterwards.
    pub fn alloc(
        arena: &'ast Bump,
        operator: Token<'ast>,
        left: &'ast Expr<'ast>,
        right: &'ast Expr<'ast>,
    ) -> &'ast Expr<'ast> {
        let span = left.span().merge(right.span());
        arena.alloc(Expr::Additive(arena.alloc(AdditiveExpr {
            operator,
            left,
            right,
            span,
        })))
    }

    /// Whether this node is `+` rather than `-`.
    pub fn is_add(&self) -> bool {
        self.operator.kind == TokenKind::Plus
    }
}

/// An equality comparison.
///
/// Equality in Ocelot is textual: operands of any two types may be
/// compared, and the comparison is over their canonical textual forms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualityExpr<'ast> {
    /// The `==` or `!=` token.
    pub operator: Token<'ast>,
    /// Left operand.
    pub left: &'ast Expr<'ast>,
    /// Right operand.
    pub right: &'ast Expr<'ast>,
    /// Source location, covering both operands.
    pub span: Span,
}

impl<'ast> EqualityExpr<'ast> {
    /// Allocate an equality node in `arena`.
    pub fn alloc(
        arena: &'ast Bump,
        operator: Token<'ast>,
        left: &'ast Expr<'ast>,
        right: &'ast Expr<'ast>,
    ) -> &'ast Expr<'ast> {
        let span = left.span().merge(right.span());
        arena.alloc(Expr::Equality(arena.alloc(EqualityExpr {
            operator,
            left,
            right,
            span,
        })))
    }

    /// Whether this node is `==` rather than `!=`.
    pub fn is_equal(&self) -> bool {
        self.operator.kind == TokenKind::EqualEqual
    }
}
