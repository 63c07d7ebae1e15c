// Copyright (C) 2015-2025 The Neo Project.
//
// mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction module for NEO 2 transactions.
//!
//! - `attributes` - attribute usage tags and tagged data
//! - `coin_selector` - greedy input selection
//! - `core` - the transaction shell
//! - `types` - transaction type and version tags
//! - `unspent` - outputs grouped per native asset

pub mod attributes;
pub mod coin_selector;
pub mod core;
pub mod types;
pub mod unspent;

pub use attributes::{TransactionAttribute, TransactionAttributeUsage};
pub use coin_selector::CoinSelector;
pub use self::core::Transaction;
pub use types::{TradingVersion, TransactionType};
pub use unspent::{Balance, NativeAsset, Unspent, Utxo, GAS_ASSET_ID, NEO_ASSET_ID};
