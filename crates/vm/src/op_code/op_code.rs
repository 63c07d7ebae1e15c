//! The NEO 2 opcode table.

use super::OperandSize;
use std::fmt;

/// A single-byte instruction of the NEO 2 virtual machine.
///
/// Only the opcodes the script builders emit or inspect are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
pub enum OpCode {
    /// Pushes an empty byte array (the integer 0).
    PUSH0 = 0x00,
    /// Pushes the next byte.
    PUSHBYTES1 = 0x01,
    /// Pushes the next 75 bytes. Values 0x02..=0x4A push 2..=74 bytes.
    PUSHBYTES75 = 0x4B,
    /// Next byte holds the number of bytes to push.
    PUSHDATA1 = 0x4C,
    /// Next two bytes hold the number of bytes to push.
    PUSHDATA2 = 0x4D,
    /// Next four bytes hold the number of bytes to push.
    PUSHDATA4 = 0x4E,
    /// Pushes the number -1.
    PUSHM1 = 0x4F,
    /// Pushes the number 1.
    PUSH1 = 0x51,
    PUSH2 = 0x52,
    PUSH3 = 0x53,
    PUSH4 = 0x54,
    PUSH5 = 0x55,
    PUSH6 = 0x56,
    PUSH7 = 0x57,
    PUSH8 = 0x58,
    PUSH9 = 0x59,
    PUSH10 = 0x5A,
    PUSH11 = 0x5B,
    PUSH12 = 0x5C,
    PUSH13 = 0x5D,
    PUSH14 = 0x5E,
    PUSH15 = 0x5F,
    PUSH16 = 0x60,

    NOP = 0x61,
    /// Calls the contract whose 20-byte script hash follows.
    APPCALL = 0x67,

    /// Verifies M signatures against N public keys.
    CHECKMULTISIG = 0xAE,

    /// Packs the top n items into an array.
    PACK = 0xC1,
}

impl OpCode {
    /// Returns the opcode as a byte.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Parses a byte into an opcode.
    ///
    /// Direct pushes between PUSHBYTES1 and PUSHBYTES75 other than the two
    /// named ends are not listed and return `None`.
    pub fn from_u8(value: u8) -> Option<Self> {
        let op = match value {
            0x00 => Self::PUSH0,
            0x01 => Self::PUSHBYTES1,
            0x4B => Self::PUSHBYTES75,
            0x4C => Self::PUSHDATA1,
            0x4D => Self::PUSHDATA2,
            0x4E => Self::PUSHDATA4,
            0x4F => Self::PUSHM1,
            0x51 => Self::PUSH1,
            0x52 => Self::PUSH2,
            0x53 => Self::PUSH3,
            0x54 => Self::PUSH4,
            0x55 => Self::PUSH5,
            0x56 => Self::PUSH6,
            0x57 => Self::PUSH7,
            0x58 => Self::PUSH8,
            0x59 => Self::PUSH9,
            0x5A => Self::PUSH10,
            0x5B => Self::PUSH11,
            0x5C => Self::PUSH12,
            0x5D => Self::PUSH13,
            0x5E => Self::PUSH14,
            0x5F => Self::PUSH15,
            0x60 => Self::PUSH16,
            0x61 => Self::NOP,
            0x67 => Self::APPCALL,
            0xAE => Self::CHECKMULTISIG,
            0xC1 => Self::PACK,
            _ => return None,
        };
        Some(op)
    }

    /// Returns the operand layout that follows this opcode in a script.
    pub fn operand_size(self) -> OperandSize {
        match self {
            Self::PUSHBYTES1 => OperandSize::fixed(1),
            Self::PUSHBYTES75 => OperandSize::fixed(75),
            Self::PUSHDATA1 => OperandSize::prefix(1),
            Self::PUSHDATA2 => OperandSize::prefix(2),
            Self::PUSHDATA4 => OperandSize::prefix(4),
            Self::APPCALL => OperandSize::fixed(20),
            _ => OperandSize::fixed(0),
        }
    }

    /// Returns true for the single-byte constant pushes PUSHM1, PUSH0 and PUSH1..PUSH16.
    pub fn is_push_constant(self) -> bool {
        matches!(self as u8, 0x00 | 0x4F | 0x51..=0x60)
    }
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> Self {
        op as u8
    }
}

impl TryFrom<u8> for OpCode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(value)
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_values() {
        assert_eq!(OpCode::PUSH0 as u8, 0x00);
        assert_eq!(OpCode::PUSHBYTES75 as u8, 75);
        assert_eq!(OpCode::PUSHDATA1 as u8, 0x4C);
        assert_eq!(OpCode::PUSHDATA2 as u8, 0x4D);
        assert_eq!(OpCode::PUSHDATA4 as u8, 0x4E);
        assert_eq!(OpCode::PUSHM1 as u8, 0x4F);
        assert_eq!(OpCode::PUSH1 as u8, 0x51);
        assert_eq!(OpCode::PUSH16 as u8, 0x60);
        assert_eq!(OpCode::APPCALL as u8, 0x67);
        assert_eq!(OpCode::CHECKMULTISIG as u8, 0xAE);
        assert_eq!(OpCode::PACK as u8, 0xC1);
    }

    #[test]
    fn test_from_u8_roundtrip() {
        for byte in 0..=u8::MAX {
            if let Some(op) = OpCode::from_u8(byte) {
                assert_eq!(op.as_u8(), byte);
                assert_eq!(OpCode::try_from(byte), Ok(op));
            } else {
                assert_eq!(OpCode::try_from(byte), Err(byte));
            }
        }
        assert_eq!(OpCode::from_u8(0x50), None);
    }

    #[test]
    fn test_operand_sizes() {
        assert_eq!(OpCode::PUSHDATA1.operand_size().size_prefix(), 1);
        assert_eq!(OpCode::PUSHDATA2.operand_size().size_prefix(), 2);
        assert_eq!(OpCode::PUSHDATA4.operand_size().size_prefix(), 4);
        assert_eq!(OpCode::APPCALL.operand_size().size(), 20);
        assert!(!OpCode::PACK.operand_size().has_fixed_size());
        assert!(!OpCode::PACK.operand_size().has_size_prefix());
    }

    #[test]
    fn test_push_constants() {
        assert!(OpCode::PUSHM1.is_push_constant());
        assert!(OpCode::PUSH0.is_push_constant());
        assert!(OpCode::PUSH15.is_push_constant());
        assert!(!OpCode::PUSHDATA1.is_push_constant());
        assert!(!OpCode::PACK.is_push_constant());
    }
}
