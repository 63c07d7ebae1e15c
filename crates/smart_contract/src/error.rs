// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Error types for contract script construction.

use neo_core::CoreError;
use neo_vm::VmError;
use thiserror::Error;

/// Result type for smart contract operations
pub type Result<T> = std::result::Result<T, Error>;

/// Smart contract errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The invocation body does not fit its single-byte length prefix.
    #[error("Invocation script too long: {length} bytes (max {max})")]
    ScriptTooLong {
        /// Body length in bytes
        length: usize,
        /// Largest representable body
        max: usize,
    },

    /// Script emission failed.
    #[error("VM error: {0}")]
    Vm(#[from] VmError),

    /// Core type or transaction field failure.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}
