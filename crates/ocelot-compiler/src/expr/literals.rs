//! Literal compilation: constant loads with specialized push opcodes.

use ocelot_ast::LiteralKind;

use super::ExprCompiler;

/// Compile a literal expression.
pub(super) fn compile_literal(compiler: &mut ExprCompiler<'_, '_>, kind: &LiteralKind<'_>) {
    match kind {
        LiteralKind::Int(value) => compiler.emitter().emit_int(*value),
        LiteralKind::Str(value) => compiler.emitter().emit_str(value),
        LiteralKind::Bool(value) => compiler.emitter().emit_bool(*value),
        LiteralKind::Null => compiler.emitter().emit_null(),
    }
}

#[cfg(test)]
mod tests {
    use crate::bytecode::{Constant, ConstantPool, OpCode};
    use crate::emit::BytecodeEmitter;
    use crate::expr::ExprCompiler;
    use bumpalo::Bump;
    use ocelot_ast::{Expr, LiteralExpr, LiteralKind};
    use ocelot_core::Span;

    fn lit<'a>(arena: &'a Bump, kind: LiteralKind<'a>) -> &'a Expr<'a> {
        arena.alloc(Expr::Literal(LiteralExpr {
            kind,
            span: Span::point(1, 1),
        }))
    }

    #[test]
    fn int_literal_loads_from_the_pool() {
        let arena = Bump::new();
        let mut constants = ConstantPool::new();
        let mut emitter = BytecodeEmitter::new(&mut constants);
        ExprCompiler::new(&mut emitter).compile(lit(&arena, LiteralKind::Int(42)));

        let chunk = emitter.finish();
        chunk.assert_opcodes(&[OpCode::Constant]);
        assert_eq!(constants.get(0), Some(&Constant::Int(42)));
    }

    #[test]
    fn zero_and_one_use_push_opcodes() {
        let arena = Bump::new();
        let mut constants = ConstantPool::new();
        let mut emitter = BytecodeEmitter::new(&mut constants);
        let mut compiler = ExprCompiler::new(&mut emitter);
        compiler.compile(lit(&arena, LiteralKind::Int(0)));
        compiler.compile(lit(&arena, LiteralKind::Int(1)));

        let chunk = emitter.finish();
        chunk.assert_opcodes(&[OpCode::PushZero, OpCode::PushOne]);
        assert!(constants.is_empty());
    }

    #[test]
    fn string_bool_and_null_literals() {
        let arena = Bump::new();
        let mut constants = ConstantPool::new();
        let mut emitter = BytecodeEmitter::new(&mut constants);
        let mut compiler = ExprCompiler::new(&mut emitter);
        compiler.compile(lit(&arena, LiteralKind::Str("a")));
        compiler.compile(lit(&arena, LiteralKind::Bool(false)));
        compiler.compile(lit(&arena, LiteralKind::Null));

        let chunk = emitter.finish();
        chunk.assert_opcodes(&[OpCode::Constant, OpCode::PushFalse, OpCode::PushNull]);
        assert_eq!(constants.get(0), Some(&Constant::Str("a".to_string())));
    }
}
