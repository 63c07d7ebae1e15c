// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! # Neo Core
//!
//! Core types and transaction plumbing for building NEO 2 transactions.
//!
//! ## Features
//!
//! - **Type System**: `UInt160` script hashes, `UInt256` transaction ids, `Address`
//! - **Unspent Outputs**: `Utxo`, per-asset `Balance` and the wallet-wide `Unspent` map
//! - **Coin Selection**: greedy smallest-first accumulation against a target amount
//! - **Transaction System**: attribute usages, transaction types and the transaction shell
//! - **Builders**: attribute and input serialization on top of `neo_vm::ScriptBuilder`
//!
//! ## Example
//!
//! ```rust
//! use neo_core::{NativeAsset, Unspent, Utxo, UInt256};
//! use neo_core::builders::TransactionScriptBuilder;
//! use neo_vm::ScriptBuilder;
//! use rust_decimal::Decimal;
//!
//! # fn example() -> neo_core::CoreResult<()> {
//! let txid =
//!     UInt256::parse("0x2d1a5a6a7b8ad0e2bbfd44dc2fbb1b4bd1dbd7b91fd5e0b1b6e2c3a1b1c1d1e1")?;
//! let mut unspent = Unspent::new();
//! unspent.add_utxo(NativeAsset::Gas, Utxo::new(txid, 0, Decimal::new(5, 0)));
//!
//! let mut builder = ScriptBuilder::new();
//! builder.emit_transaction_inputs(&mut unspent, NativeAsset::Gas, Decimal::new(2, 0))?;
//! assert_eq!(builder.len(), 1 + 32 + 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Neo address (version byte plus script hash)
pub mod address;
/// Builder extensions for transaction serialization
pub mod builders;
/// Core error types and error handling
pub mod error;
/// Transaction structures, unspent outputs and coin selection
pub mod transaction;
/// 160-bit unsigned integer implementation
pub mod uint160;
/// 256-bit unsigned integer implementation
pub mod uint256;

// Re-exports for convenient access
pub use address::Address;
pub use error::{CoreError, CoreResult};
pub use transaction::{
    Balance, CoinSelector, NativeAsset, TradingVersion, Transaction, TransactionAttribute,
    TransactionAttributeUsage, TransactionType, Unspent, Utxo,
};
pub use uint160::{ScriptHash, UInt160};
pub use uint256::UInt256;
