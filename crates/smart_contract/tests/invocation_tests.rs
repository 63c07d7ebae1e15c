// Copyright (C) 2015-2025 The Neo Project.
//
// invocation_tests.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Integration tests for invocation scripts and transaction assembly.

use neo_core::{
    Address, NativeAsset, ScriptHash, TradingVersion, TransactionAttribute,
    TransactionAttributeUsage, UInt256, Unspent, Utxo,
};
use neo_smart_contract::{
    generate_contract_invocation_script, ContractParameter, Error, InvocationScriptBuilder,
    TransactionAssembler,
};
use neo_vm::ScriptBuilder;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

fn contract() -> ScriptHash {
    ScriptHash::parse("0xb7c1f850a025e34455e7e98c588c784385077fb1").unwrap()
}

#[test]
fn test_deposit_invocation() {
    init_tracing();

    let depositor = Address::parse("AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y").unwrap();
    let args = vec![
        ContractParameter::Address(depositor),
        ContractParameter::ScriptHash(ScriptHash::from([0x33; 20])),
        ContractParameter::Integer(100_000_000),
    ];
    let script =
        generate_contract_invocation_script(&contract(), "deposit", Some(args.as_slice())).unwrap();

    let body = &script[1..];
    assert_eq!(script[0] as usize, body.len());
    // 100_000_000 = 0x05f5e100, trimmed little-endian
    assert_eq!(&body[..4], &[0x00, 0xe1, 0xf5, 0x05]);
    assert_eq!(body[body.len() - 21], 0x67);
    assert_eq!(&body[body.len() - 20..], contract().as_bytes());
}

#[test]
fn test_typed_tags_inside_arguments() {
    let args = vec![
        ContractParameter::from(TradingVersion::V1),
        ContractParameter::from(TransactionAttributeUsage::Remark),
        ContractParameter::from(false),
    ];
    let script =
        generate_contract_invocation_script(&contract(), "tag", Some(args.as_slice())).unwrap();
    assert_eq!(&script[1..6], &[0x00, 0xf0, 0x01, 0x53, 0xc1]);
}

#[test]
fn test_builder_is_reusable_after_failure() {
    let mut builder = ScriptBuilder::new();
    let bad = vec![ContractParameter::Integer(i64::MIN)];
    assert!(matches!(
        builder.emit_contract_invocation(&contract(), "op", Some(bad.as_slice())),
        Err(Error::Vm(_))
    ));
    assert!(builder.is_empty());

    let script = builder.emit_contract_invocation(&contract(), "op", None).unwrap();
    assert_eq!(script.len(), 1 + 3 + 1 + 20);
}

#[test]
fn test_assemble_invocation_transaction() {
    init_tracing();

    let mut unspent = Unspent::new();
    for (i, value) in [5i64, 1, 2].into_iter().enumerate() {
        unspent.add_utxo(
            NativeAsset::Gas,
            Utxo::new(UInt256::from([i as u8 + 1; 32]), i as u16, Decimal::new(value, 0)),
        );
    }

    let tx = TransactionAssembler::new()
        .attributes(&[TransactionAttribute::script(&contract())])
        .unwrap()
        .inputs(&mut unspent, NativeAsset::Gas, Decimal::new(3, 0))
        .unwrap()
        .invoke(&contract(), "name", None)
        .unwrap()
        .build();

    assert_eq!(tx.attributes[..3], [0x01, 0x20, 0x14]);
    // two inputs: value 1 (index 1) then value 2 (index 2)
    assert_eq!(tx.inputs[0], 0x02);
    assert_eq!(&tx.inputs[1..33], &[0x02; 32]);
    assert_eq!(tx.inputs[33], 0x51);
    assert_eq!(&tx.inputs[34..66], &[0x03; 32]);
    assert_eq!(tx.inputs[66], 0x52);

    let hex = tx.to_hex_string();
    assert!(hex.starts_with("d101"));
    assert_eq!(hex.len(), tx.size() * 2);
}

#[test]
fn test_assembler_propagates_selection_errors() {
    let mut unspent = Unspent::new();
    let err = TransactionAssembler::new()
        .inputs(&mut unspent, NativeAsset::Neo, Decimal::ONE)
        .unwrap_err();
    assert_eq!(err.to_string(), "Core error: Asset NEO not found in UTXO");
}

proptest! {
    #[test]
    fn test_prefix_matches_body(
        op in "[a-z]{1,32}",
        ints in prop::collection::vec(-1i64..100_000, 0..8),
    ) {
        let args: Vec<ContractParameter> = ints.into_iter().map(ContractParameter::from).collect();
        let script =
            generate_contract_invocation_script(&contract(), &op, Some(args.as_slice())).unwrap();
        prop_assert_eq!(script[0] as usize, script.len() - 1);
        let expected = contract();
        prop_assert_eq!(&script[script.len() - 20..], expected.as_bytes());
    }
}
