// Copyright (C) 2015-2025 The Neo Project.
//
// invocation.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Contract invocation scripts.

use crate::contract_parameter::ContractParameter;
use crate::error::{Error, Result};
use neo_config::MAX_INVOCATION_SCRIPT_SIZE;
use neo_core::ScriptHash;
use neo_vm::{OpCode, ScriptBuilder};
use tracing::debug;

/// Invocation script emission on a [`ScriptBuilder`].
pub trait InvocationScriptBuilder {
    /// Emits a call of `operation` on the contract at `script_hash`.
    ///
    /// Layout: the arguments as one packed array (omitted when `args` is
    /// `None`), the operation name, `APPCALL`, the raw script hash. The
    /// buffer is then prefixed with a single byte holding its length and
    /// returned.
    ///
    /// # Errors
    ///
    /// Any failing push aborts the build, as does a body longer than 255
    /// bytes. The builder is left as it was before the call in both cases.
    fn emit_contract_invocation(
        &mut self,
        script_hash: &ScriptHash,
        operation: &str,
        args: Option<&[ContractParameter]>,
    ) -> Result<Vec<u8>>;
}

impl InvocationScriptBuilder for ScriptBuilder {
    fn emit_contract_invocation(
        &mut self,
        script_hash: &ScriptHash,
        operation: &str,
        args: Option<&[ContractParameter]>,
    ) -> Result<Vec<u8>> {
        self.try_emit(|builder| -> Result<()> {
            if let Some(args) = args {
                ContractParameter::Array(args.to_vec()).emit(builder)?;
            }
            ContractParameter::from(operation).emit(builder)?;
            builder.emit_opcode(OpCode::APPCALL);
            ContractParameter::ScriptHash(*script_hash).emit(builder)?;

            if builder.len() > MAX_INVOCATION_SCRIPT_SIZE {
                return Err(Error::ScriptTooLong {
                    length: builder.len(),
                    max: MAX_INVOCATION_SCRIPT_SIZE,
                });
            }
            Ok(())
        })?;

        let length = self.len() as u8;
        self.prepend(length);
        debug!(
            contract = %script_hash,
            operation,
            length,
            "built invocation script"
        );
        Ok(self.to_array())
    }
}

/// Builds a self-length-prefixed invocation script on a fresh builder.
///
/// # Errors
///
/// See [`InvocationScriptBuilder::emit_contract_invocation`].
pub fn generate_contract_invocation_script(
    script_hash: &ScriptHash,
    operation: &str,
    args: Option<&[ContractParameter]>,
) -> Result<Vec<u8>> {
    ScriptBuilder::new().emit_contract_invocation(script_hash, operation, args)
}
