//! Binary operator compilation.
//!
//! Additive nodes compile to integer arithmetic or string joining
//! depending on their statically resolved type; equality compiles to the
//! textual comparison instruction, negated for `!=`.

use ocelot_ast::{AdditiveExpr, EqualityExpr, Expr};
use ocelot_core::Type;

use super::ExprCompiler;
use crate::bytecode::OpCode;
use crate::type_resolver::{additive_type, resolved_type};

/// Compile an additive expression.
pub(super) fn compile_additive(compiler: &mut ExprCompiler<'_, '_>, add: &AdditiveExpr<'_>) {
    if additive_type(add) == Type::Int {
        compiler.compile(add.left);
        compiler.compile(add.right);
        compiler.emitter().emit(if add.is_add() {
            OpCode::AddI64
        } else {
            OpCode::SubI64
        });
    } else {
        // The join instruction takes its receiver (the left half of the
        // result) from the top of the stack, so the right operand is
        // compiled and converted first, leaving the left string on top.
        compile_text_operand(compiler, add.right);
        compile_text_operand(compiler, add.left);
        compiler.emitter().emit(OpCode::Concat);
    }
}

/// Compile one operand of a string concatenation, converting its result
/// to text unless its static type already is.
fn compile_text_operand(compiler: &mut ExprCompiler<'_, '_>, operand: &Expr<'_>) {
    compiler.compile(operand);
    if resolved_type(operand) != Type::Str {
        compiler.emitter().emit(OpCode::ToText);
    }
}

/// Compile an equality expression.
pub(super) fn compile_equality(compiler: &mut ExprCompiler<'_, '_>, eq: &EqualityExpr<'_>) {
    compiler.compile(eq.left);
    compiler.compile(eq.right);
    compiler.emitter().emit(OpCode::EqText);
    if !eq.is_equal() {
        compiler.emitter().emit(OpCode::Not);
    }
}
