// Copyright (C) 2015-2025 The Neo Project.
//
// attributes.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction attributes of the NEO 2 protocol.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute usage tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum TransactionAttributeUsage {
    ContractHash = 0x00,
    ECDH02 = 0x02,
    ECDH03 = 0x03,
    Script = 0x20,
    Vote = 0x30,
    DescriptionUrl = 0x81,
    Description = 0x90,

    Hash1 = 0xa1,
    Hash2 = 0xa2,
    Hash3 = 0xa3,
    Hash4 = 0xa4,
    Hash5 = 0xa5,
    Hash6 = 0xa6,
    Hash7 = 0xa7,
    Hash8 = 0xa8,
    Hash9 = 0xa9,
    Hash10 = 0xaa,
    Hash11 = 0xab,
    Hash12 = 0xac,
    Hash13 = 0xad,
    Hash14 = 0xae,
    Hash15 = 0xaf,

    Remark = 0xf0,
    Remark1 = 0xf1,
    Remark2 = 0xf2,
    Remark3 = 0xf3,
    Remark4 = 0xf4,
    Remark5 = 0xf5,
    Remark6 = 0xf6,
    Remark7 = 0xf7,
    Remark8 = 0xf8,
    Remark9 = 0xf9,
    Remark10 = 0xfa,
    Remark11 = 0xfb,
    Remark12 = 0xfc,
    Remark13 = 0xfd,
    Remark14 = 0xfe,
    Remark15 = 0xff,
}

impl TransactionAttributeUsage {
    const ALL: [Self; 38] = [
        Self::ContractHash,
        Self::ECDH02,
        Self::ECDH03,
        Self::Script,
        Self::Vote,
        Self::DescriptionUrl,
        Self::Description,
        Self::Hash1,
        Self::Hash2,
        Self::Hash3,
        Self::Hash4,
        Self::Hash5,
        Self::Hash6,
        Self::Hash7,
        Self::Hash8,
        Self::Hash9,
        Self::Hash10,
        Self::Hash11,
        Self::Hash12,
        Self::Hash13,
        Self::Hash14,
        Self::Hash15,
        Self::Remark,
        Self::Remark1,
        Self::Remark2,
        Self::Remark3,
        Self::Remark4,
        Self::Remark5,
        Self::Remark6,
        Self::Remark7,
        Self::Remark8,
        Self::Remark9,
        Self::Remark10,
        Self::Remark11,
        Self::Remark12,
        Self::Remark13,
        Self::Remark14,
        Self::Remark15,
    ];

    /// The tag byte.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Looks up a usage by its tag byte.
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|usage| usage.as_u8() == value)
    }
}

impl TryFrom<u8> for TransactionAttributeUsage {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or_else(|| CoreError::InvalidFormat {
            message: format!("Unknown attribute usage: {value:#04x}"),
        })
    }
}

impl fmt::Display for TransactionAttributeUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A usage tag paired with opaque data.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionAttribute {
    /// The usage tag
    pub usage: TransactionAttributeUsage,
    /// Attribute payload
    pub data: Vec<u8>,
}

impl TransactionAttribute {
    /// Creates an attribute.
    pub fn new(usage: TransactionAttributeUsage, data: impl Into<Vec<u8>>) -> Self {
        Self {
            usage,
            data: data.into(),
        }
    }

    /// A `Remark` attribute carrying UTF-8 text.
    pub fn remark(text: &str) -> Self {
        Self::new(TransactionAttributeUsage::Remark, text.as_bytes())
    }

    /// A `Script` attribute naming an additional script hash to verify.
    pub fn script(script_hash: &crate::UInt160) -> Self {
        Self::new(TransactionAttributeUsage::Script, script_hash.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_bytes() {
        assert_eq!(TransactionAttributeUsage::ContractHash.as_u8(), 0x00);
        assert_eq!(TransactionAttributeUsage::Script.as_u8(), 0x20);
        assert_eq!(TransactionAttributeUsage::DescriptionUrl.as_u8(), 0x81);
        assert_eq!(TransactionAttributeUsage::Hash15.as_u8(), 0xaf);
        assert_eq!(TransactionAttributeUsage::Remark15.as_u8(), 0xff);
    }

    #[test]
    fn test_usage_lookup() {
        for byte in 0u8..=0xff {
            if let Some(usage) = TransactionAttributeUsage::from_u8(byte) {
                assert_eq!(usage.as_u8(), byte);
            }
        }
        assert_eq!(
            TransactionAttributeUsage::try_from(0xa5).unwrap(),
            TransactionAttributeUsage::Hash5
        );
        assert!(TransactionAttributeUsage::try_from(0x01).is_err());
        assert!(TransactionAttributeUsage::try_from(0xb0).is_err());
    }

    #[test]
    fn test_remark_attribute() {
        let attribute = TransactionAttribute::remark("hi");
        assert_eq!(attribute.usage, TransactionAttributeUsage::Remark);
        assert_eq!(attribute.data, b"hi".to_vec());
    }
}
