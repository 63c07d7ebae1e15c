//! # Neo Virtual Machine script emission
//!
//! Byte-level construction of scripts for the NEO 2 stack machine.
//!
//! The crate holds two things:
//!
//! - **OpCode**: the opcode table, with values matching the published VM
//! - **ScriptBuilder**: an append-only byte accumulator with the primitive
//!   emitters every higher-level builder is written in terms of
//!
//! ## Example
//!
//! ```rust
//! use neo_vm::{OpCode, ScriptBuilder};
//!
//! # fn example() -> neo_vm::VmResult<()> {
//! let mut builder = ScriptBuilder::new();
//! builder.emit_push_int(2)?;
//! builder.emit_push_hex("0102")?;
//! builder.emit_opcode(OpCode::PACK);
//!
//! assert_eq!(builder.to_hex_string(), "52020102c1");
//! # Ok(())
//! # }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

/// VM error types and result handling
pub mod error;
/// VM opcode definitions and utilities
pub mod op_code;
/// Utility for constructing VM bytecode
pub mod script_builder;

pub use error::{VmError, VmResult};
pub use op_code::{OpCode, OperandSize};
pub use script_builder::ScriptBuilder;
