// Copyright (C) 2015-2025 The Neo Project.
//
// contract_parameter.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Typed values that can be pushed onto the VM stack.

use crate::error::Result;
use neo_core::{
    Address, ScriptHash, TradingVersion, TransactionAttributeUsage, TransactionType, Utxo,
};
use neo_vm::ScriptBuilder;

/// A value pushed as part of a contract invocation.
///
/// Each variant has exactly one encoding; see [`ContractParameter::emit`].
#[derive(Clone, Debug, PartialEq)]
pub enum ContractParameter {
    /// Little-endian transaction id followed by the pushed output index.
    Utxo(Utxo),
    /// Single raw tag byte.
    TradingVersion(TradingVersion),
    /// Single raw tag byte.
    AttributeUsage(TransactionAttributeUsage),
    /// Single raw tag byte.
    TransactionType(TransactionType),
    /// The 20 script hash bytes, length-prefixed.
    Address(Address),
    /// The 20 script hash bytes, without a length prefix.
    ScriptHash(ScriptHash),
    /// UTF-8 bytes, length-prefixed.
    String(String),
    /// Raw bytes, length-prefixed.
    ByteArray(Vec<u8>),
    /// `PUSH1` or `PUSH0`.
    Boolean(bool),
    /// Elements in reverse order, the element count, then `PACK`.
    Array(Vec<ContractParameter>),
    /// Small-integer opcode or trimmed little-endian bytes.
    Integer(i64),
}

impl ContractParameter {
    /// Appends this value to `builder`.
    ///
    /// On failure the builder is restored to its length before the call.
    pub fn emit(&self, builder: &mut ScriptBuilder) -> Result<()> {
        builder.try_emit(|builder| self.emit_unchecked(builder))
    }

    fn emit_unchecked(&self, builder: &mut ScriptBuilder) -> Result<()> {
        match self {
            ContractParameter::Utxo(utxo) => utxo.emit(builder)?,
            ContractParameter::TradingVersion(version) => {
                builder.emit(version.as_u8());
            }
            ContractParameter::AttributeUsage(usage) => {
                builder.emit(usage.as_u8());
            }
            ContractParameter::TransactionType(tx_type) => {
                builder.emit(tx_type.as_u8());
            }
            ContractParameter::Address(address) => {
                builder.emit_push(address.as_bytes())?;
            }
            ContractParameter::ScriptHash(script_hash) => {
                builder.emit_bytes(script_hash.as_ref());
            }
            ContractParameter::String(value) => {
                builder.emit_push(value.as_bytes())?;
            }
            ContractParameter::ByteArray(bytes) => {
                builder.emit_push(bytes)?;
            }
            ContractParameter::Boolean(value) => {
                builder.emit_push_bool(*value);
            }
            ContractParameter::Array(items) => {
                for item in items.iter().rev() {
                    item.emit_unchecked(builder)?;
                }
                builder.emit_push_int(items.len() as i64)?;
                builder.emit_pack();
            }
            ContractParameter::Integer(value) => {
                builder.emit_push_int(*value)?;
            }
        }
        Ok(())
    }
}

impl From<Utxo> for ContractParameter {
    fn from(value: Utxo) -> Self {
        ContractParameter::Utxo(value)
    }
}

impl From<TradingVersion> for ContractParameter {
    fn from(value: TradingVersion) -> Self {
        ContractParameter::TradingVersion(value)
    }
}

impl From<TransactionAttributeUsage> for ContractParameter {
    fn from(value: TransactionAttributeUsage) -> Self {
        ContractParameter::AttributeUsage(value)
    }
}

impl From<TransactionType> for ContractParameter {
    fn from(value: TransactionType) -> Self {
        ContractParameter::TransactionType(value)
    }
}

impl From<Address> for ContractParameter {
    fn from(value: Address) -> Self {
        ContractParameter::Address(value)
    }
}

impl From<ScriptHash> for ContractParameter {
    fn from(value: ScriptHash) -> Self {
        ContractParameter::ScriptHash(value)
    }
}

impl From<String> for ContractParameter {
    fn from(value: String) -> Self {
        ContractParameter::String(value)
    }
}

impl From<&str> for ContractParameter {
    fn from(value: &str) -> Self {
        ContractParameter::String(value.to_string())
    }
}

impl From<Vec<u8>> for ContractParameter {
    fn from(value: Vec<u8>) -> Self {
        ContractParameter::ByteArray(value)
    }
}

impl From<bool> for ContractParameter {
    fn from(value: bool) -> Self {
        ContractParameter::Boolean(value)
    }
}

impl From<i64> for ContractParameter {
    fn from(value: i64) -> Self {
        ContractParameter::Integer(value)
    }
}

impl From<Vec<ContractParameter>> for ContractParameter {
    fn from(value: Vec<ContractParameter>) -> Self {
        ContractParameter::Array(value)
    }
}
