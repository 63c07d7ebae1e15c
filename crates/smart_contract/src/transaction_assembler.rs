// Copyright (C) 2015-2025 The Neo Project.
//
// transaction_assembler.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction assembler for composing unsigned transactions.

use crate::contract_parameter::ContractParameter;
use crate::error::Result;
use crate::invocation::InvocationScriptBuilder;
use neo_config::ProtocolSettings;
use neo_core::builders::TransactionScriptBuilder;
use neo_core::{
    NativeAsset, ScriptHash, TradingVersion, Transaction, TransactionAttribute, TransactionType,
    Unspent,
};
use neo_vm::ScriptBuilder;
use rust_decimal::Decimal;
use tracing::debug;

/// Composes a [`Transaction`] field by field.
///
/// Each field is serialized on its own builder; a failing step leaves the
/// assembler unchanged.
#[derive(Debug, Clone)]
pub struct TransactionAssembler {
    settings: ProtocolSettings,
    transaction: Transaction,
}

impl TransactionAssembler {
    /// Starts an invocation transaction with default protocol settings.
    pub fn new() -> Self {
        Self::with_settings(ProtocolSettings::default())
    }

    /// Starts an invocation transaction with the given settings.
    pub fn with_settings(settings: ProtocolSettings) -> Self {
        Self {
            settings,
            transaction: Transaction::new_invocation_transaction(),
        }
    }

    /// Sets the transaction type
    pub fn transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction.transaction_type = transaction_type;
        self
    }

    /// Sets the version tag
    pub fn version(mut self, version: TradingVersion) -> Self {
        self.transaction.version = version;
        self
    }

    /// Serializes `attributes` in the given order.
    pub fn attributes(mut self, attributes: &[TransactionAttribute]) -> Result<Self> {
        let mut builder = ScriptBuilder::new();
        builder.emit_transaction_attributes_with_settings(attributes, &self.settings)?;
        self.transaction.attributes = builder.into_bytes();
        Ok(self)
    }

    /// Selects and serializes inputs of `asset` covering `amount`.
    ///
    /// `unspent` is left with the asset's outputs sorted ascending by value.
    pub fn inputs(
        mut self,
        unspent: &mut Unspent,
        asset: NativeAsset,
        amount: Decimal,
    ) -> Result<Self> {
        let mut builder = ScriptBuilder::new();
        builder.emit_transaction_inputs(unspent, asset, amount)?;
        self.transaction.inputs = builder.into_bytes();
        Ok(self)
    }

    /// Serializes an output. Always fails until the output layout is settled.
    pub fn outputs(mut self, asset: NativeAsset, amount: Decimal) -> Result<Self> {
        let mut builder = ScriptBuilder::new();
        builder.emit_transaction_outputs(asset, amount)?;
        self.transaction.outputs = builder.into_bytes();
        Ok(self)
    }

    /// Attaches an invocation script for `operation` on `script_hash`.
    pub fn invoke(
        mut self,
        script_hash: &ScriptHash,
        operation: &str,
        args: Option<&[ContractParameter]>,
    ) -> Result<Self> {
        let mut builder = ScriptBuilder::new();
        self.transaction.script = builder.emit_contract_invocation(script_hash, operation, args)?;
        Ok(self)
    }

    /// Attaches an already built invocation script.
    pub fn script(mut self, script: Vec<u8>) -> Self {
        self.transaction.script = script;
        self
    }

    /// The settings in use.
    pub fn settings(&self) -> &ProtocolSettings {
        &self.settings
    }

    /// Finishes the transaction.
    pub fn build(self) -> Transaction {
        debug!(
            transaction_type = %self.transaction.transaction_type,
            size = self.transaction.size(),
            "assembled transaction"
        );
        self.transaction
    }
}

impl Default for TransactionAssembler {
    fn default() -> Self {
        Self::new()
    }
}
