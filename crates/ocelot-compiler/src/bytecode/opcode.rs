//! Bytecode operation codes.
//!
//! The VM is a stack machine: operations pop their operands from the
//! stack and push their result back. Each opcode is a single byte, with
//! inline operands following it.

/// Bytecode operation codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    /// Push constant from pool (8-bit index).
    /// Operand: u8 constant index
    Constant = 0,
    /// Push constant from pool (16-bit index).
    /// Operand: u16 constant index (big-endian)
    ConstantWide,
    /// Push null.
    PushNull,
    /// Push boolean true.
    PushTrue,
    /// Push boolean false.
    PushFalse,
    /// Push integer 0.
    PushZero,
    /// Push integer 1.
    PushOne,
    /// Pop top of stack.
    Pop,
    /// Add two integers.
    AddI64,
    /// Subtract two integers.
    SubI64,
    /// Pop a value and push its textual form.
    ToText,
    /// Pop two strings and push the joined string. The receiver (the
    /// left half of the result) is on top of the stack, its argument
    /// (the right half) below it.
    Concat,
    /// Pop two values and push whether their textual forms are equal.
    EqText,
    /// Negate the boolean on top of the stack.
    Not,
    /// Unconditional forward jump.
    /// Operand: u16 distance (big-endian)
    Jump,
    /// Jump forward if the boolean on top of the stack is false. The
    /// value stays on the stack.
    /// Operand: u16 distance (big-endian)
    JumpIfFalse,
    /// Finish the chunk, yielding the value on top of the stack.
    Return,
}

impl OpCode {
    /// Convert from u8, returning None for invalid values.
    pub fn from_u8(value: u8) -> Option<Self> {
        if value <= OpCode::Return as u8 {
            // SAFETY: OpCode is repr(u8) and the value is in range
            Some(unsafe { std::mem::transmute::<u8, OpCode>(value) })
        } else {
            None
        }
    }

    /// The size of this opcode's inline operands in bytes, not counting
    /// the opcode byte itself.
    pub fn operand_size(&self) -> usize {
        match self {
            OpCode::Constant => 1,
            OpCode::ConstantWide | OpCode::Jump | OpCode::JumpIfFalse => 2,
            OpCode::PushNull
            | OpCode::PushTrue
            | OpCode::PushFalse
            | OpCode::PushZero
            | OpCode::PushOne
            | OpCode::Pop
            | OpCode::AddI64
            | OpCode::SubI64
            | OpCode::ToText
            | OpCode::Concat
            | OpCode::EqText
            | OpCode::Not
            | OpCode::Return => 0,
        }
    }

    /// A stable human-readable name for disassembly and test output.
    pub fn name(&self) -> &'static str {
        match self {
            OpCode::Constant => "CONSTANT",
            OpCode::ConstantWide => "CONSTANT_WIDE",
            OpCode::PushNull => "PUSH_NULL",
            OpCode::PushTrue => "PUSH_TRUE",
            OpCode::PushFalse => "PUSH_FALSE",
            OpCode::PushZero => "PUSH_ZERO",
            OpCode::PushOne => "PUSH_ONE",
            OpCode::Pop => "POP",
            OpCode::AddI64 => "ADD_I64",
            OpCode::SubI64 => "SUB_I64",
            OpCode::ToText => "TO_TEXT",
            OpCode::Concat => "CONCAT",
            OpCode::EqText => "EQ_TEXT",
            OpCode::Not => "NOT",
            OpCode::Jump => "JUMP",
            OpCode::JumpIfFalse => "JUMP_IF_FALSE",
            OpCode::Return => "RETURN",
        }
    }
}
