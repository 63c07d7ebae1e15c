// Copyright (C) 2015-2025 The Neo Project.
//
// address.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Base58Check addresses.
//!
//! An address is `base58(version || script_hash || checksum)`, where the
//! checksum is the first four bytes of the double SHA-256 of the first 21 bytes.

use crate::error::{CoreError, CoreResult};
use crate::uint160::{UInt160, UINT160_SIZE};
use neo_config::{ProtocolSettings, ADDRESS_VERSION};
use neo_cryptography::{base58_check_decode, base58_check_encode};
use std::fmt;
use std::str::FromStr;

/// A script hash paired with the version byte it is encoded under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    script_hash: UInt160,
    version: u8,
}

impl Address {
    /// Creates an address for `script_hash` under the default version byte `0x17`.
    #[must_use]
    pub fn new(script_hash: UInt160) -> Self {
        Self::with_version(script_hash, ADDRESS_VERSION)
    }

    /// Creates an address with an explicit version byte.
    #[must_use]
    pub fn with_version(script_hash: UInt160, version: u8) -> Self {
        Self {
            script_hash,
            version,
        }
    }

    /// Creates an address using the version byte from `settings`.
    #[must_use]
    pub fn from_settings(script_hash: UInt160, settings: &ProtocolSettings) -> Self {
        Self::with_version(script_hash, settings.address_version)
    }

    /// Parses an address encoded under the default version byte.
    ///
    /// # Errors
    ///
    /// See [`Address::parse_with_settings`].
    pub fn parse(address: &str) -> CoreResult<Self> {
        Self::parse_with_settings(address, &ProtocolSettings::default())
    }

    /// Parses an address, rejecting any version byte other than the configured one.
    ///
    /// # Errors
    ///
    /// Fails on invalid Base58, a bad checksum, a payload that is not 20 bytes or
    /// an unexpected version byte.
    pub fn parse_with_settings(address: &str, settings: &ProtocolSettings) -> CoreResult<Self> {
        let (version, payload) = base58_check_decode(address)?;

        if version != settings.address_version {
            return Err(CoreError::InvalidAddressVersion {
                expected: settings.address_version,
                actual: version,
            });
        }

        if payload.len() != UINT160_SIZE {
            return Err(CoreError::InvalidFormat {
                message: format!("Invalid address payload length: {}", payload.len()),
            });
        }

        Ok(Self::with_version(UInt160::from_bytes(&payload)?, version))
    }

    /// The script hash this address encodes.
    #[inline]
    #[must_use]
    pub fn script_hash(&self) -> UInt160 {
        self.script_hash
    }

    /// The version byte.
    #[inline]
    #[must_use]
    pub fn version(&self) -> u8 {
        self.version
    }

    /// The raw script hash bytes, as pushed into invocation scripts.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.script_hash.as_ref()
    }

    /// Encodes the address as Base58Check.
    #[must_use]
    pub fn to_base58(&self) -> String {
        base58_check_encode(self.version, self.script_hash.as_ref())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl FromStr for Address {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<UInt160> for Address {
    fn from(script_hash: UInt160) -> Self {
        Self::new(script_hash)
    }
}
