//! # Neo Cryptography
//!
//! Cryptographic primitives needed to build Neo scripts and addresses:
//!
//! - **Hashing**: SHA-256, RIPEMD-160 and their Neo combinations (`hash160`, `hash256`)
//! - **Base58Check**: version-prefixed address encoding with a double SHA-256 checksum
//! - **ECC**: secp256r1 public keys with exposed affine coordinates
//!
//! Signing and key generation live outside this crate.

pub mod base58;
pub mod ecc;
pub mod error;
pub mod hash;

pub use base58::{base58_check_decode, base58_check_encode};
pub use ecc::PublicKey;
pub use error::{Error, Result};
pub use hash::{hash160, hash256, ripemd160, sha256};
