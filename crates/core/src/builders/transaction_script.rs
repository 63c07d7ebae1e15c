// Copyright (C) 2015-2025 The Neo Project.
//
// transaction_script.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Serialization of transaction attributes and inputs on a [`ScriptBuilder`].

use crate::error::{CoreError, CoreResult};
use crate::transaction::{NativeAsset, TransactionAttribute, Unspent};
use neo_config::ProtocolSettings;
use neo_vm::ScriptBuilder;
use rust_decimal::Decimal;
use tracing::{debug, trace};

/// Transaction field serialization.
///
/// Every method either appends one complete, count-prefixed field or leaves
/// the builder untouched and returns the error.
pub trait TransactionScriptBuilder {
    /// Writes the attribute count, then each usage byte and its pushed data.
    ///
    /// Attribute order is preserved.
    fn emit_transaction_attributes(
        &mut self,
        attributes: &[TransactionAttribute],
    ) -> CoreResult<&mut Self> {
        self.emit_transaction_attributes_with_settings(attributes, &ProtocolSettings::default())
    }

    /// Like [`TransactionScriptBuilder::emit_transaction_attributes`] with an
    /// explicit attribute limit.
    fn emit_transaction_attributes_with_settings(
        &mut self,
        attributes: &[TransactionAttribute],
        settings: &ProtocolSettings,
    ) -> CoreResult<&mut Self>;

    /// Selects outputs of `asset` covering `amount` and writes the input count
    /// followed by each selected output.
    fn emit_transaction_inputs(
        &mut self,
        unspent: &mut Unspent,
        asset: NativeAsset,
        amount: Decimal,
    ) -> CoreResult<&mut Self>;

    /// Output serialization. The binary layout is not settled, so this always fails.
    fn emit_transaction_outputs(
        &mut self,
        asset: NativeAsset,
        amount: Decimal,
    ) -> CoreResult<&mut Self>;
}

impl TransactionScriptBuilder for ScriptBuilder {
    fn emit_transaction_attributes_with_settings(
        &mut self,
        attributes: &[TransactionAttribute],
        settings: &ProtocolSettings,
    ) -> CoreResult<&mut Self> {
        if attributes.len() > settings.max_transaction_attributes {
            return Err(CoreError::TooManyAttributes {
                count: attributes.len(),
                max: settings.max_transaction_attributes,
            });
        }

        self.try_emit(|builder| -> CoreResult<()> {
            builder.emit_length(attributes.len());
            for attribute in attributes {
                trace!(usage = %attribute.usage, len = attribute.data.len(), "attribute");
                builder.emit(attribute.usage.as_u8());
                builder.emit_push(&attribute.data)?;
            }
            Ok(())
        })?;
        Ok(self)
    }

    fn emit_transaction_inputs(
        &mut self,
        unspent: &mut Unspent,
        asset: NativeAsset,
        amount: Decimal,
    ) -> CoreResult<&mut Self> {
        let selected = unspent.select_inputs(asset, amount)?;
        debug!(%asset, inputs = selected.len(), "writing transaction inputs");

        self.try_emit(|builder| -> CoreResult<()> {
            builder.emit_length(selected.len());
            for utxo in &selected {
                utxo.emit(builder)?;
            }
            Ok(())
        })?;
        Ok(self)
    }

    fn emit_transaction_outputs(
        &mut self,
        asset: NativeAsset,
        amount: Decimal,
    ) -> CoreResult<&mut Self> {
        debug!(%asset, %amount, "output serialization requested");
        Err(CoreError::NotImplemented("transaction output serialization"))
    }
}
