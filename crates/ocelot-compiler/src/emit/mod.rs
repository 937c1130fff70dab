//! High-level bytecode emission.
//!
//! [`BytecodeEmitter`] builds the chunk for one expression tree against a
//! compilation-wide constant pool, choosing narrow or wide constant loads
//! and specialized push opcodes where they apply. Instructions append in
//! program order; forward jumps are the only thing patched after the
//! fact.

use crate::bytecode::{BytecodeChunk, Constant, ConstantPool, OpCode};

/// Emits bytecode instructions for a single expression tree.
pub struct BytecodeEmitter<'pool> {
    /// The chunk being built.
    chunk: BytecodeChunk,
    /// Shared constant pool (deduplicated across chunks).
    constants: &'pool mut ConstantPool,
    /// Current source line for the chunk's line table.
    current_line: u32,
}

impl<'pool> BytecodeEmitter<'pool> {
    /// Create a new emitter over a shared constant pool.
    pub fn new(constants: &'pool mut ConstantPool) -> Self {
        Self {
            chunk: BytecodeChunk::new(),
            constants,
            current_line: 1,
        }
    }

    /// Set the source line attributed to subsequent instructions.
    pub fn set_line(&mut self, line: u32) {
        self.current_line = line;
    }

    /// Emit a single opcode with no operands.
    pub fn emit(&mut self, op: OpCode) {
        self.chunk.write_op(op, self.current_line);
    }

    /// Emit an opcode with an 8-bit operand.
    pub fn emit_byte(&mut self, op: OpCode, byte: u8) {
        self.chunk.write_op(op, self.current_line);
        self.chunk.write_byte(byte, self.current_line);
    }

    /// Emit an opcode with a 16-bit operand.
    pub fn emit_u16(&mut self, op: OpCode, value: u16) {
        self.chunk.write_op(op, self.current_line);
        self.chunk.write_u16(value, self.current_line);
    }

    /// Emit a constant load, using the narrow form while the pool allows.
    pub fn emit_constant(&mut self, constant: Constant) {
        let index = self.constants.add(constant);
        if index < 256 {
            self.emit_byte(OpCode::Constant, index as u8);
        } else {
            self.emit_u16(OpCode::ConstantWide, index as u16);
        }
    }

    /// Emit an integer load. 0 and 1 use dedicated push opcodes.
    pub fn emit_int(&mut self, value: i64) {
        match value {
            0 => self.emit(OpCode::PushZero),
            1 => self.emit(OpCode::PushOne),
            _ => self.emit_constant(Constant::Int(value)),
        }
    }

    /// Emit a string load.
    pub fn emit_str(&mut self, value: &str) {
        self.emit_constant(Constant::Str(value.to_string()));
    }

    /// Emit a boolean load.
    pub fn emit_bool(&mut self, value: bool) {
        self.emit(if value {
            OpCode::PushTrue
        } else {
            OpCode::PushFalse
        });
    }

    /// Emit a null load.
    pub fn emit_null(&mut self) {
        self.emit(OpCode::PushNull);
    }

    /// Emit a jump with a placeholder distance; patch it later with
    /// [`patch_jump`](Self::patch_jump).
    pub fn emit_jump(&mut self, op: OpCode) -> usize {
        self.chunk.emit_jump(op, self.current_line)
    }

    /// Patch a previously emitted jump to land here.
    pub fn patch_jump(&mut self, offset: usize) {
        self.chunk.patch_jump(offset);
    }

    /// Finish emission, yielding the chunk.
    pub fn finish(self) -> BytecodeChunk {
        self.chunk
    }
}
