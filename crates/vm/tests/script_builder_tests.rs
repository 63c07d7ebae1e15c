//! ScriptBuilder encoding properties.
//!
//! Integer pushes, count prefixes and data tiers must be byte-exact against
//! the NEO 2 VM, so these tests pin the exact emitted bytes.

use neo_vm::{OpCode, ScriptBuilder, VmError};
use proptest::prelude::*;

fn le_decode(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

#[test]
fn test_small_integer_opcode_mapping() {
    let expected = [
        (-1, OpCode::PUSHM1),
        (0, OpCode::PUSH0),
        (1, OpCode::PUSH1),
        (2, OpCode::PUSH2),
        (5, OpCode::PUSH5),
        (10, OpCode::PUSH10),
        (15, OpCode::PUSH15),
    ];

    for (value, op) in expected {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_int(value).unwrap();
        assert_eq!(builder.to_array(), vec![op as u8], "value {value}");
    }
}

#[test]
fn test_every_small_integer_is_one_byte() {
    for value in -1..=15 {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_int(value).unwrap();
        assert_eq!(builder.len(), 1);
        let op = OpCode::from_u8(builder.as_bytes()[0]).unwrap();
        assert!(op.is_push_constant());
    }
}

#[test]
fn test_negative_integers_fail_without_emitting() {
    let mut builder = ScriptBuilder::new();
    builder.emit_opcode(OpCode::NOP);
    for value in [-2, -100, i64::MIN] {
        assert_eq!(
            builder.emit_push_int(value).unwrap_err(),
            VmError::UnsupportedInteger(value)
        );
    }
    assert_eq!(builder.to_array(), vec![OpCode::NOP as u8]);
}

#[test]
fn test_null_and_empty() {
    let mut script = ScriptBuilder::new();
    script.emit_push(&[]).unwrap();
    script.emit_push(&[]).unwrap();
    assert_eq!(script.to_array(), vec![0, 0]);
}

#[test]
fn test_push_string_bytes() {
    let mut script = ScriptBuilder::new();
    script.emit_push(b"transfer").unwrap();
    assert_eq!(script.to_hex_string(), "087472616e73666572");
}

proptest! {
    #[test]
    fn test_wide_integers_are_minimal_little_endian(value in 16i64..=i64::MAX) {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_int(value).unwrap();
        let bytes = builder.to_array();

        prop_assert!(!bytes.is_empty() && bytes.len() <= 8);
        prop_assert_ne!(*bytes.last().unwrap(), 0);
        prop_assert_eq!(le_decode(&bytes), value as u64);
    }

    #[test]
    fn test_length_prefix_matches_integer_encoding(count in 16usize..1_000_000) {
        let mut by_length = ScriptBuilder::new();
        by_length.emit_length(count);
        let mut by_int = ScriptBuilder::new();
        by_int.emit_push_int(count as i64).unwrap();
        prop_assert_eq!(by_length.to_array(), by_int.to_array());
    }

    #[test]
    fn test_tier_selection(len in 0usize..70_000) {
        let data = vec![0x5Au8; len];
        let mut builder = ScriptBuilder::new();
        builder.emit_push(&data).unwrap();
        let script = builder.as_bytes();

        let header = if len < 75 {
            prop_assert_eq!(script[0] as usize, len);
            1
        } else if len < 0x100 {
            prop_assert_eq!(script[0], OpCode::PUSHDATA1 as u8);
            prop_assert_eq!(script[1] as usize, len);
            2
        } else if len < 0x10000 {
            prop_assert_eq!(script[0], OpCode::PUSHDATA2 as u8);
            prop_assert_eq!(le_decode(&script[1..3]) as usize, len);
            3
        } else {
            prop_assert_eq!(script[0], OpCode::PUSHDATA4 as u8);
            prop_assert_eq!(le_decode(&script[1..5]) as usize, len);
            5
        };
        prop_assert_eq!(script.len(), header + len);
        prop_assert_eq!(&script[header..], &data[..]);
    }

    #[test]
    fn test_hex_push_matches_byte_push(data in proptest::collection::vec(any::<u8>(), 0..300)) {
        let mut from_hex = ScriptBuilder::new();
        from_hex.emit_push_hex(&hex::encode(&data)).unwrap();
        let mut from_bytes = ScriptBuilder::new();
        from_bytes.emit_push(&data).unwrap();
        prop_assert_eq!(from_hex, from_bytes);
    }
}
