// Copyright (C) 2015-2025 The Neo Project.
//
// uint160.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of `UInt160`, a 160-bit unsigned integer.
//!
//! Script hashes are stored little-endian, reversed from the big-endian hex
//! they are conventionally displayed in.

use crate::address::Address;
use crate::error::{CoreError, CoreResult};
use neo_config::ADDRESS_SIZE;
use neo_cryptography::hash::hash160;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The length of `UInt160` values in bytes.
pub const UINT160_SIZE: usize = ADDRESS_SIZE;

/// Represents a 160-bit unsigned integer in little-endian byte order.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct UInt160 {
    data: [u8; UINT160_SIZE],
}

/// The script hash of a deployed contract or redeem script.
pub type ScriptHash = UInt160;

impl UInt160 {
    /// Alias matching `UInt160.Length`.
    pub const LENGTH: usize = UINT160_SIZE;

    /// Returns a zero `UInt160`.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Checks if this `UInt160` is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// Creates a new `UInt160` from little-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFormat` if the input length is not exactly 20 bytes.
    pub fn from_bytes(value: &[u8]) -> CoreResult<Self> {
        let data: [u8; UINT160_SIZE] =
            value.try_into().map_err(|_| CoreError::InvalidFormat {
                message: format!("Invalid UInt160 length: {}", value.len()),
            })?;
        Ok(Self { data })
    }

    /// Gets the little-endian byte array.
    #[inline]
    #[must_use]
    pub fn to_array(&self) -> [u8; UINT160_SIZE] {
        self.data
    }

    /// Borrows the little-endian bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; UINT160_SIZE] {
        &self.data
    }

    /// Parses a `UInt160` from big-endian display hex, with or without `0x`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFormat` if the input is not 40 hex characters.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if s.len() != UINT160_SIZE * 2 {
            return Err(CoreError::InvalidFormat {
                message: format!("Invalid UInt160 hex length: {}", s.len()),
            });
        }

        let mut bytes = hex::decode(s)?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    /// Converts the `UInt160` to big-endian display hex with a `0x` prefix.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.data;
        bytes.reverse();
        format!("0x{}", hex::encode(bytes))
    }

    /// Creates a `UInt160` from a script by computing its hash.
    #[must_use]
    pub fn from_script(script: &[u8]) -> Self {
        Self {
            data: hash160(script),
        }
    }

    /// Converts this `UInt160` to a Neo address string.
    #[must_use]
    pub fn to_address(&self) -> String {
        Address::new(*self).to_string()
    }

    /// Parses a Neo address string to a `UInt160`.
    ///
    /// # Errors
    ///
    /// Fails on invalid Base58, a bad checksum, a wrong length or a version byte
    /// other than `0x17`.
    pub fn from_address(address: &str) -> CoreResult<Self> {
        Ok(address.parse::<Address>()?.script_hash())
    }
}

impl FromStr for UInt160 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt160({})", self.to_hex_string())
    }
}

impl PartialOrd for UInt160 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UInt160 {
    fn cmp(&self, other: &Self) -> Ordering {
        // Most significant byte is stored last.
        self.data.iter().rev().cmp(other.data.iter().rev())
    }
}

impl From<[u8; UINT160_SIZE]> for UInt160 {
    fn from(data: [u8; UINT160_SIZE]) -> Self {
        Self { data }
    }
}

impl TryFrom<&[u8]> for UInt160 {
    type Error = CoreError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(data)
    }
}

impl AsRef<[u8]> for UInt160 {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
