//! Neo Wallets Library
//!
//! Contract-side wallet functionality for the Neo blockchain:
//! - M-of-N multi-signature redeem scripts with canonical key ordering
//! - Contract script hashes and their Base58Check addresses
//!
//! Key generation and signing are out of scope; public keys come in as
//! [`neo_cryptography::PublicKey`] values.

pub mod contract;

// Re-export main types
pub use contract::{sort_public_keys, Contract};

use thiserror::Error;

/// Result type for wallet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wallet-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid multi-sig parameters: required {required} of {keys} keys")]
    InvalidMultiSigParameters { required: usize, keys: usize },

    #[error("Cryptography error: {0}")]
    Cryptography(#[from] neo_cryptography::Error),

    #[error("Core error: {0}")]
    Core(#[from] neo_core::CoreError),

    #[error("VM error: {0}")]
    Vm(#[from] neo_vm::VmError),
}
