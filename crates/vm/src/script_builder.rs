//! Script builder module for the Neo Virtual Machine.
//!
//! Every emitter appends a self-describing unit (an opcode, or a length
//! prefix followed by its payload), so a finished script can be replayed
//! without any external length table.

use crate::error::{VmError, VmResult};
use crate::op_code::OpCode;

/// Helps construct VM scripts programmatically.
///
/// The buffer is append-only until [`ScriptBuilder::clear`] is called or a
/// [`ScriptBuilder::try_emit`] step fails. One builder serves one build at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptBuilder {
    /// The script being built
    script: Vec<u8>,
}

impl ScriptBuilder {
    /// Creates a new script builder.
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    /// Emits a single byte to the script.
    pub fn emit(&mut self, op: u8) -> &mut Self {
        self.script.push(op);
        self
    }

    /// Emits an opcode to the script.
    pub fn emit_opcode(&mut self, op: OpCode) -> &mut Self {
        self.script.push(op as u8);
        self
    }

    /// Emits raw bytes to the script, without a length prefix.
    pub fn emit_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.script.extend_from_slice(bytes);
        self
    }

    /// Emits a push operation for an integer.
    ///
    /// -1, 0 and 1..=15 use their single-byte opcodes. Values of 16 and above
    /// are written as little-endian bytes with trailing zero bytes trimmed.
    ///
    /// # Errors
    ///
    /// Returns `VmError::UnsupportedInteger` for values below -1.
    pub fn emit_push_int(&mut self, value: i64) -> VmResult<&mut Self> {
        match value {
            -1 => Ok(self.emit_opcode(OpCode::PUSHM1)),
            0 => Ok(self.emit_opcode(OpCode::PUSH0)),
            1..=15 => Ok(self.emit(OpCode::PUSH1 as u8 + (value as u8 - 1))),
            16.. => Ok(self.emit_bytes(&trimmed_le(value as u64))),
            _ => Err(VmError::UnsupportedInteger(value)),
        }
    }

    /// Emits a raw count prefix (array, attribute or input counts).
    ///
    /// Same little-endian trimmed encoding as [`ScriptBuilder::emit_push_int`]
    /// but never an opcode shortcut. Zero is written as a single `0x00`.
    pub fn emit_length(&mut self, count: usize) -> &mut Self {
        self.emit_bytes(&trimmed_le(count as u64))
    }

    /// Emits a length-prefixed data blob, choosing the size tier by length.
    ///
    /// | length | encoding |
    /// |---|---|
    /// | `< 75` | one length byte, then the data |
    /// | `< 0x100` | `PUSHDATA1`, 1-byte length, data |
    /// | `< 0x10000` | `PUSHDATA2`, 2-byte length, data |
    /// | otherwise | `PUSHDATA4`, 4-byte length, data |
    pub fn emit_push(&mut self, data: &[u8]) -> VmResult<&mut Self> {
        let len = data.len();

        if len < OpCode::PUSHBYTES75 as usize {
            self.emit(len as u8);
            self.script.extend_from_slice(data);
            return Ok(self);
        }

        let op = if len < 0x100 {
            OpCode::PUSHDATA1
        } else if len < 0x10000 {
            OpCode::PUSHDATA2
        } else {
            OpCode::PUSHDATA4
        };
        let prefix = op
            .operand_size()
            .encode_prefix(len)
            .ok_or(VmError::DataTooLarge(len))?;

        log::trace!("pushing {} bytes with {}", len, op);
        self.emit_opcode(op);
        self.script.extend_from_slice(&prefix);
        self.script.extend_from_slice(data);
        Ok(self)
    }

    /// Decodes a hex string and emits it as a length-prefixed data blob.
    ///
    /// # Errors
    ///
    /// Returns `VmError::InvalidHex` if the input is not valid hex; nothing is
    /// emitted in that case.
    pub fn emit_push_hex(&mut self, hex_string: &str) -> VmResult<&mut Self> {
        let data = hex::decode(hex_string)?;
        self.emit_push(&data)
    }

    /// Emits a push operation for a boolean.
    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        if value {
            self.emit_opcode(OpCode::PUSH1)
        } else {
            self.emit_opcode(OpCode::PUSH0)
        }
    }

    /// Emits a pack operation.
    pub fn emit_pack(&mut self) -> &mut Self {
        self.emit_opcode(OpCode::PACK)
    }

    /// Runs `f` against this builder, restoring the buffer if it fails.
    ///
    /// Multi-step emitters use this so a failed build never leaves a
    /// partially written unit behind.
    pub fn try_emit<T, E>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, E>) -> Result<T, E> {
        let mark = self.script.len();
        let result = f(self);
        if result.is_err() {
            self.script.truncate(mark);
        }
        result
    }

    /// Inserts a single byte in front of everything emitted so far.
    pub fn prepend(&mut self, byte: u8) -> &mut Self {
        self.script.insert(0, byte);
        self
    }

    /// Number of bytes emitted so far.
    pub fn len(&self) -> usize {
        self.script.len()
    }

    /// Returns true if nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Resets the builder to an empty script.
    pub fn clear(&mut self) {
        self.script.clear();
    }

    /// Borrows the script bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.script
    }

    /// Converts the builder to a byte array.
    pub fn to_array(&self) -> Vec<u8> {
        self.script.clone()
    }

    /// Hex encoding of the whole script.
    pub fn to_hex_string(&self) -> String {
        hex::encode(&self.script)
    }

    /// Consumes the builder, returning the script bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.script
    }
}

/// Little-endian bytes of `value` with trailing zero bytes removed, at least one byte.
fn trimmed_le(value: u64) -> Vec<u8> {
    let bytes = value.to_le_bytes();
    let width = bytes.iter().rposition(|&b| b != 0).map_or(1, |i| i + 1);
    bytes[..width].to_vec()
}
