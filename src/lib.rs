//! Ocelot expression engine: one syntax tree, three backends.
//!
//! The same immutable expression tree can be validated, evaluated by the
//! tree-walking interpreter, transpiled back to source text, or compiled
//! to stack-machine bytecode and executed on the [`vm::Vm`]. A static
//! type-resolution pass decides, ahead of execution, which physical
//! representation every expression produces, and the two execution
//! backends are required to agree on every result.

pub mod vm;

pub use ocelot_ast as ast;
pub use ocelot_compiler as compiler;

pub mod prelude {
    //! The common imports for building, checking, and running expressions.

    pub use ocelot_ast::{
        AdditiveExpr, EqualityExpr, Expr, LiteralExpr, LiteralKind, Token, TokenKind,
    };
    pub use ocelot_compiler::bytecode::{BytecodeChunk, Constant, ConstantPool, OpCode};
    pub use ocelot_compiler::emit::BytecodeEmitter;
    pub use ocelot_compiler::{
        EvalContext, ExprCompiler, Scope, compile, evaluate, resolved_type, transpile, validate,
    };
    pub use ocelot_core::{CompilationError, RuntimeError, Span, Type, Value};

    pub use crate::vm::Vm;
}
