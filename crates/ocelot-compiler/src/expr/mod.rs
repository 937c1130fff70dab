//! Expression-to-bytecode compilation.
//!
//! Operands always compile before their operator's own instructions.
//! The compiler trusts static type resolution and assumes validation has
//! already run: a tree whose operands contradict their resolved types
//! compiles without complaint to a chunk that faults when executed.

mod binary;
mod literals;

use ocelot_ast::Expr;

use crate::bytecode::{BytecodeChunk, ConstantPool, OpCode};
use crate::emit::BytecodeEmitter;

/// Compiles expressions to stack-machine bytecode.
pub struct ExprCompiler<'a, 'pool> {
    /// Bytecode emitter for output.
    emitter: &'a mut BytecodeEmitter<'pool>,
}

impl<'a, 'pool> ExprCompiler<'a, 'pool> {
    /// Create a new expression compiler.
    pub fn new(emitter: &'a mut BytecodeEmitter<'pool>) -> Self {
        Self { emitter }
    }

    /// Compile an expression, leaving its value on the operand stack.
    pub fn compile(&mut self, expr: &Expr<'_>) {
        self.emitter.set_line(expr.span().line);
        match expr {
            Expr::Literal(lit) => literals::compile_literal(self, &lit.kind),
            Expr::Additive(add) => binary::compile_additive(self, add),
            Expr::Equality(eq) => binary::compile_equality(self, eq),
        }
    }

    /// Get the bytecode emitter.
    pub(crate) fn emitter(&mut self) -> &mut BytecodeEmitter<'pool> {
        self.emitter
    }
}

/// Compile a whole expression tree into a finished chunk.
///
/// Convenience entry point: compiles the tree against `constants` and
/// terminates the chunk with `Return` so the VM yields the result.
pub fn compile(expr: &Expr<'_>, constants: &mut ConstantPool) -> BytecodeChunk {
    let mut emitter = BytecodeEmitter::new(constants);
    ExprCompiler::new(&mut emitter).compile(expr);
    emitter.emit(OpCode::Return);
    emitter.finish()
}
