// Copyright (C) 2015-2025 The Neo Project.
//
// core.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The transaction shell.

use super::types::{TradingVersion, TransactionType};
use serde::{Deserialize, Serialize};

/// A transaction assembled field by field.
///
/// Each byte field is produced independently by its own builder and the
/// shell only concatenates them. No cross-field consistency is checked here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The transaction type tag
    pub transaction_type: TransactionType,
    /// The version tag
    pub version: TradingVersion,
    /// Serialized attributes, count-prefixed
    pub attributes: Vec<u8>,
    /// Serialized inputs, count-prefixed
    pub inputs: Vec<u8>,
    /// Serialized outputs
    pub outputs: Vec<u8>,
    /// Self-length-prefixed invocation script
    pub script: Vec<u8>,
}

impl Transaction {
    /// Creates an empty transaction of the given type and version.
    pub fn new(transaction_type: TransactionType, version: TradingVersion) -> Self {
        Self {
            transaction_type,
            version,
            attributes: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            script: Vec::new(),
        }
    }

    /// Creates an empty invocation transaction (type `0xd1`, version `0x01`).
    pub fn new_invocation_transaction() -> Self {
        Self::new(TransactionType::Invocation, TradingVersion::V1)
    }

    /// Total serialized size in bytes.
    pub fn size(&self) -> usize {
        2 + self.script.len() + self.attributes.len() + self.inputs.len() + self.outputs.len()
    }

    /// Concatenates type, version, script, attributes, inputs and outputs.
    ///
    /// Version-specific fields are not written. A version 1 invocation
    /// transaction on chain carries a Fixed8 gas amount after the script;
    /// callers targeting a node must append it to `script` themselves.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size());
        bytes.push(self.transaction_type.as_u8());
        bytes.push(self.version.as_u8());
        bytes.extend_from_slice(&self.script);
        bytes.extend_from_slice(&self.attributes);
        bytes.extend_from_slice(&self.inputs);
        bytes.extend_from_slice(&self.outputs);
        bytes
    }

    /// Hex form of [`Transaction::to_bytes`].
    pub fn to_hex_string(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new_invocation_transaction()
    }
}
