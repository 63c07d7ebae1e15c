//! OpCode module for the Neo Virtual Machine.
//!
//! Values match the NEO 2 VM opcode table bit-for-bit.

#[allow(clippy::module_inception)]
mod op_code;
mod operand_size;

pub use op_code::OpCode;
pub use operand_size::OperandSize;
