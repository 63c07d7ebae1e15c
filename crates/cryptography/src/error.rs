//! Error types for cryptographic operations.

use thiserror::Error;

/// Result type for cryptographic operations
pub type Result<T> = std::result::Result<T, Error>;

/// Cryptography-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Base58 decode error: {0}")]
    Base58(String),

    #[error("Invalid checksum")]
    InvalidChecksum,

    #[error("Invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}
