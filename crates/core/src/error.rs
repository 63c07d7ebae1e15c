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

//! Error types for the core crate.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Core errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Malformed hex, wrong length or otherwise undecodable input.
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// What was wrong with the input
        message: String,
    },

    /// An address carried a version byte other than the configured one.
    #[error("Invalid address version: expected {expected:#04x}, got {actual:#04x}")]
    InvalidAddressVersion {
        /// Configured version byte
        expected: u8,
        /// Version byte found in the address
        actual: u8,
    },

    /// The unspent set holds no outputs for the requested asset.
    #[error("Asset {asset} not found in UTXO")]
    AssetNotFound {
        /// Asset that was requested
        asset: String,
    },

    /// The asset's outputs do not cover the requested amount.
    #[error("Insufficient balance: sending {requested} but only have {available}")]
    InsufficientBalance {
        /// Amount requested
        requested: Decimal,
        /// Total of the asset's unspent outputs
        available: Decimal,
    },

    /// An unspent output carried a negative value.
    #[error("Negative output value {value} at index {index}")]
    NegativeValue {
        /// Output index of the offending output
        index: u16,
        /// The value found
        value: Decimal,
    },

    /// Summing output values exceeded the decimal range.
    #[error("Amount overflow: output values exceed the decimal range")]
    AmountOverflow,

    /// More attributes than a transaction may carry.
    #[error("Too many transaction attributes: {count} (max {max})")]
    TooManyAttributes {
        /// Number of attributes supplied
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// A serialization the protocol layout for which is not settled.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    /// Script emission failed.
    #[error("VM error: {0}")]
    Vm(#[from] neo_vm::VmError),

    /// Key or encoding failure from the cryptography crate.
    #[error("Cryptography error: {0}")]
    Cryptography(#[from] neo_cryptography::Error),
}

impl From<hex::FromHexError> for CoreError {
    fn from(err: hex::FromHexError) -> Self {
        CoreError::InvalidFormat {
            message: format!("Hex decode error: {err}"),
        }
    }
}
