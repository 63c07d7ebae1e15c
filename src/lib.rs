//! # Neo-Utils: byte-exact NEO 2 script and transaction construction
//!
//! Builds the binary payloads wallets and signing tools hand to a NEO 2 node:
//! contract invocation scripts, multi-signature redeem scripts and
//! partially assembled transactions (attributes, inputs, script).
//!
//! ## Quick Start
//!
//! ```rust
//! use neo_utils::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let p1 =
//!     PublicKey::from_hex("02e77ff280db51ef3638009f11947c544ed094d4e5f2d96a9e654dc817bc3a8986")?;
//! let p2 =
//!     PublicKey::from_hex("024da93f9a66981e499b36ce763e57fd89a47a052e86d40b42f81708c40fe9eff0")?;
//!
//! let contract = Contract::create_multi_sig_contract(2, &[p1, p2])?;
//! assert_eq!(contract.address().to_string(), "AKo8k27H5nCG8MwSirmnraH6uUG6fQQVC2");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`neo_config`] - Protocol constants and settings
//! - [`neo_cryptography`] - Hashing, Base58Check and secp256r1 public keys
//! - [`neo_vm`] - Opcode table and the byte-level script builder
//! - [`neo_core`] - Script hashes, addresses, unspent outputs and transaction fields
//! - [`neo_smart_contract`] - Contract parameters, invocation scripts and transaction assembly
//! - [`neo_wallets`] - Multi-signature contracts

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Re-export all public APIs from core crates
pub use neo_config as config;
pub use neo_core as core;
pub use neo_cryptography as crypto;
pub use neo_smart_contract as smart_contract;
pub use neo_vm as vm;
pub use neo_wallets as wallets;

/// Common imports for building scripts and transactions
pub mod prelude {
    pub use crate::config::ProtocolSettings;
    pub use crate::core::builders::TransactionScriptBuilder;
    pub use crate::core::{
        Address, Balance, CoinSelector, NativeAsset, ScriptHash, TradingVersion, Transaction,
        TransactionAttribute, TransactionAttributeUsage, TransactionType, UInt160, UInt256,
        Unspent, Utxo,
    };
    pub use crate::crypto::PublicKey;
    pub use crate::smart_contract::{
        generate_contract_invocation_script, ContractParameter, InvocationScriptBuilder,
        TransactionAssembler,
    };
    pub use crate::vm::{OpCode, ScriptBuilder};
    pub use crate::wallets::Contract;
}
