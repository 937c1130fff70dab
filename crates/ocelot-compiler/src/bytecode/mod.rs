//! Stack-machine bytecode: opcodes, chunks, and the constant pool.

mod chunk;
mod constant;
mod opcode;

pub use chunk::BytecodeChunk;
pub use constant::{Constant, ConstantPool};
pub use opcode::OpCode;
