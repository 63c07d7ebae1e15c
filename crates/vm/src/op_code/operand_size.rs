//! Operand size information for Neo VM opcodes.

/// The operand that follows an opcode: either a fixed number of bytes, or a
/// little-endian length prefix of `size_prefix` bytes followed by that many bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandSize {
    size: usize,
    size_prefix: usize,
}

impl OperandSize {
    /// An operand of exactly `size` bytes.
    pub const fn fixed(size: usize) -> Self {
        Self {
            size,
            size_prefix: 0,
        }
    }

    /// An operand preceded by a `size_prefix`-byte length.
    pub const fn prefix(size_prefix: usize) -> Self {
        Self {
            size: 0,
            size_prefix,
        }
    }

    /// Gets the fixed size of the operand.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the width of the length prefix.
    pub fn size_prefix(&self) -> usize {
        self.size_prefix
    }

    /// Checks if the operand has a fixed size.
    pub fn has_fixed_size(&self) -> bool {
        self.size > 0
    }

    /// Checks if the operand has a size prefix.
    pub fn has_size_prefix(&self) -> bool {
        self.size_prefix > 0
    }

    /// Encodes `len` as this operand's length prefix, little-endian at full prefix width.
    ///
    /// Returns `None` if the operand has no prefix or `len` does not fit in it.
    pub fn encode_prefix(&self, len: usize) -> Option<Vec<u8>> {
        if !self.has_size_prefix() || self.size_prefix > 8 {
            return None;
        }
        let len = len as u64;
        if self.size_prefix < 8 && len >> (self.size_prefix * 8) != 0 {
            return None;
        }
        Some(len.to_le_bytes()[..self.size_prefix].to_vec())
    }
}
