//! Stack-machine execution of compiled chunks.
//!
//! The VM decodes one instruction at a time, popping operands and
//! pushing results on a [`Value`] stack. Faults (a representation that
//! contradicts what an instruction needs, a bad constant index, an
//! exhausted stack) abort the run with a [`RuntimeError`]; there is no
//! recovery inside a chunk.

use ocelot_compiler::bytecode::{BytecodeChunk, Constant, ConstantPool, OpCode};
use ocelot_core::{RuntimeError, Value};

/// Executes a bytecode chunk against its constant pool.
pub struct Vm<'a> {
    chunk: &'a BytecodeChunk,
    constants: &'a ConstantPool,
    stack: Vec<Value>,
}

impl<'a> Vm<'a> {
    /// Create a VM over a chunk and the pool it was compiled against.
    pub fn new(chunk: &'a BytecodeChunk, constants: &'a ConstantPool) -> Self {
        Self {
            chunk,
            constants,
            stack: Vec::new(),
        }
    }

    /// Run the chunk to its `Return`, yielding the returned value.
    pub fn run(mut self) -> Result<Value, RuntimeError> {
        let mut offset = 0;
        while offset < self.chunk.len() {
            let at = offset;
            let byte = self
                .chunk
                .read_byte(offset)
                .ok_or(RuntimeError::Truncated { offset: at })?;
            let op =
                OpCode::from_u8(byte).ok_or(RuntimeError::InvalidOpcode { byte, offset: at })?;
            offset += 1;

            match op {
                OpCode::Constant => {
                    let index = self
                        .chunk
                        .read_byte(offset)
                        .ok_or(RuntimeError::Truncated { offset: at })?;
                    offset += 1;
                    self.push_constant(u32::from(index), at)?;
                }
                OpCode::ConstantWide => {
                    let index = self
                        .chunk
                        .read_u16(offset)
                        .ok_or(RuntimeError::Truncated { offset: at })?;
                    offset += 2;
                    self.push_constant(u32::from(index), at)?;
                }
                OpCode::PushNull => self.stack.push(Value::Null),
                OpCode::PushTrue => self.stack.push(Value::Bool(true)),
                OpCode::PushFalse => self.stack.push(Value::Bool(false)),
                OpCode::PushZero => self.stack.push(Value::Int(0)),
                OpCode::PushOne => self.stack.push(Value::Int(1)),
                OpCode::Pop => {
                    self.pop(at)?;
                }
                OpCode::AddI64 => {
                    let rhs = self.pop_int(at)?;
                    let lhs = self.pop_int(at)?;
                    self.stack.push(Value::Int(lhs.wrapping_add(rhs)));
                }
                OpCode::SubI64 => {
                    let rhs = self.pop_int(at)?;
                    let lhs = self.pop_int(at)?;
                    self.stack.push(Value::Int(lhs.wrapping_sub(rhs)));
                }
                OpCode::ToText => {
                    let value = self.pop(at)?;
                    self.stack.push(Value::Str(value.to_string()));
                }
                OpCode::Concat => {
                    // Receiver (left half) on top, argument (right half) below
                    let mut receiver = self.pop_str(at)?;
                    let argument = self.pop_str(at)?;
                    receiver.push_str(&argument);
                    self.stack.push(Value::Str(receiver));
                }
                OpCode::EqText => {
                    let rhs = self.pop(at)?;
                    let lhs = self.pop(at)?;
                    self.stack
                        .push(Value::Bool(lhs.to_string() == rhs.to_string()));
                }
                OpCode::Not => {
                    let value = self.pop_bool(at)?;
                    self.stack.push(Value::Bool(!value));
                }
                OpCode::Jump => {
                    let distance = self
                        .chunk
                        .read_u16(offset)
                        .ok_or(RuntimeError::Truncated { offset: at })?;
                    offset += 2 + usize::from(distance);
                }
                OpCode::JumpIfFalse => {
                    let distance = self
                        .chunk
                        .read_u16(offset)
                        .ok_or(RuntimeError::Truncated { offset: at })?;
                    offset += 2;
                    if !self.peek_bool(at)? {
                        offset += usize::from(distance);
                    }
                }
                OpCode::Return => return self.pop(at),
            }
        }
        Err(RuntimeError::MissingReturn)
    }

    fn push_constant(&mut self, index: u32, at: usize) -> Result<(), RuntimeError> {
        let value = match self.constants.get(index) {
            Some(Constant::Int(v)) => Value::Int(*v),
            Some(Constant::Str(s)) => Value::Str(s.clone()),
            None => return Err(RuntimeError::BadConstant { index, offset: at }),
        };
        self.stack.push(value);
        Ok(())
    }

    fn pop(&mut self, at: usize) -> Result<Value, RuntimeError> {
        self.stack
            .pop()
            .ok_or(RuntimeError::StackUnderflow { offset: at })
    }

    fn pop_int(&mut self, at: usize) -> Result<i64, RuntimeError> {
        match self.pop(at)? {
            Value::Int(v) => Ok(v),
            other => Err(RuntimeError::Representation {
                expected: "int",
                found: other.type_name(),
            }),
        }
    }

    fn pop_str(&mut self, at: usize) -> Result<String, RuntimeError> {
        match self.pop(at)? {
            Value::Str(s) => Ok(s),
            other => Err(RuntimeError::Representation {
                expected: "string",
                found: other.type_name(),
            }),
        }
    }

    fn pop_bool(&mut self, at: usize) -> Result<bool, RuntimeError> {
        match self.pop(at)? {
            Value::Bool(b) => Ok(b),
            other => Err(RuntimeError::Representation {
                expected: "bool",
                found: other.type_name(),
            }),
        }
    }

    fn peek_bool(&self, at: usize) -> Result<bool, RuntimeError> {
        match self.stack.last() {
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(RuntimeError::Representation {
                expected: "bool",
                found: other.type_name(),
            }),
            None => Err(RuntimeError::StackUnderflow { offset: at }),
        }
    }
}
