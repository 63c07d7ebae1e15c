//! Neo Configuration Module
//!
//! Protocol constants and the settings that parameterize address encoding,
//! transaction attribute limits and multi-signature composition.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Address version byte prepended to a script hash before Base58Check encoding.
pub const ADDRESS_VERSION: u8 = 0x17;
/// Size of a hash (UInt256) in bytes
pub const HASH_SIZE: usize = 32;
/// Size of an address (UInt160) in bytes
pub const ADDRESS_SIZE: usize = 20;
/// Size of the Base58Check checksum in bytes
pub const CHECKSUM_SIZE: usize = 4;
/// Size of a compressed secp256r1 public key in bytes
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;
/// Maximum number of attributes a transaction may carry
pub const MAX_TRANSACTION_ATTRIBUTES: usize = 16;
/// Maximum number of public keys in a multi-signature redeem script
pub const MAX_MULTISIG_PUBLIC_KEYS: usize = 1024;
/// Largest invocation script body representable by its single-byte length prefix
pub const MAX_INVOCATION_SCRIPT_SIZE: usize = 0xFF;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid setting {name}: {message}")]
    InvalidSetting { name: &'static str, message: String },
}

/// Protocol settings used by the builders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolSettings {
    /// Version byte of Base58Check addresses
    pub address_version: u8,
    /// Upper bound on transaction attributes
    pub max_transaction_attributes: usize,
    /// Upper bound on public keys in a multi-signature contract
    pub max_multisig_public_keys: usize,
}

impl Default for ProtocolSettings {
    fn default() -> Self {
        Self {
            address_version: ADDRESS_VERSION,
            max_transaction_attributes: MAX_TRANSACTION_ATTRIBUTES,
            max_multisig_public_keys: MAX_MULTISIG_PUBLIC_KEYS,
        }
    }
}

impl ProtocolSettings {
    /// Parses settings from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Checks that the limits are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_multisig_public_keys == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "max_multisig_public_keys",
                message: "must be at least 1".to_string(),
            });
        }
        if self.max_transaction_attributes > u8::MAX as usize {
            return Err(ConfigError::InvalidSetting {
                name: "max_transaction_attributes",
                message: format!("{} exceeds {}", self.max_transaction_attributes, u8::MAX),
            });
        }
        Ok(())
    }
}

impl FromStr for ProtocolSettings {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml_str(s)
    }
}
