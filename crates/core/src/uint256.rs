// Copyright (C) 2015-2025 The Neo Project.
//
// uint256.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of `UInt256`, a 256-bit unsigned integer.
//!
//! Used for transaction ids and asset ids. Like `UInt160` the bytes are kept
//! little-endian and displayed reversed.

use crate::error::{CoreError, CoreResult};
use neo_config::HASH_SIZE;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The length of `UInt256` values in bytes.
pub const UINT256_SIZE: usize = HASH_SIZE;

/// Represents a 256-bit unsigned integer in little-endian byte order.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct UInt256 {
    data: [u8; UINT256_SIZE],
}

impl UInt256 {
    /// Alias matching `UInt256.Length`.
    pub const LENGTH: usize = UINT256_SIZE;

    /// Returns a zero `UInt256`.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Checks if this `UInt256` is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// Creates a new `UInt256` from little-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFormat` if the input length is not exactly 32 bytes.
    pub fn from_bytes(value: &[u8]) -> CoreResult<Self> {
        let data: [u8; UINT256_SIZE] =
            value.try_into().map_err(|_| CoreError::InvalidFormat {
                message: format!("Invalid UInt256 length: {}", value.len()),
            })?;
        Ok(Self { data })
    }

    /// Gets the little-endian byte array.
    #[inline]
    #[must_use]
    pub fn to_array(&self) -> [u8; UINT256_SIZE] {
        self.data
    }

    /// Borrows the little-endian bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; UINT256_SIZE] {
        &self.data
    }

    /// Parses a `UInt256` from big-endian display hex, with or without `0x`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFormat` if the input is not 64 hex characters.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if s.len() != UINT256_SIZE * 2 {
            return Err(CoreError::InvalidFormat {
                message: format!("Invalid UInt256 hex length: {}", s.len()),
            });
        }

        let mut bytes = hex::decode(s)?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    /// Converts the `UInt256` to big-endian display hex with a `0x` prefix.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.data;
        bytes.reverse();
        format!("0x{}", hex::encode(bytes))
    }
}

impl FromStr for UInt256 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl fmt::Debug for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt256({})", self.to_hex_string())
    }
}

impl PartialOrd for UInt256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UInt256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.data.iter().rev().cmp(other.data.iter().rev())
    }
}

impl From<[u8; UINT256_SIZE]> for UInt256 {
    fn from(data: [u8; UINT256_SIZE]) -> Self {
        Self { data }
    }
}

impl TryFrom<&[u8]> for UInt256 {
    type Error = CoreError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(data)
    }
}

impl AsRef<[u8]> for UInt256 {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Serialize for UInt256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for UInt256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
