// Copyright (C) 2015-2025 The Neo Project.
//
// types.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Transaction type and version tags.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction types of the NEO 2 protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TransactionType {
    /// Block reward transaction.
    Miner = 0x00,
    /// Asset issuance.
    Issue = 0x01,
    /// GAS claim.
    Claim = 0x02,
    /// Validator enrollment.
    Enrollment = 0x20,
    /// Asset registration.
    Register = 0x40,
    /// Plain asset transfer.
    Contract = 0x80,
    /// Account or validator state change.
    State = 0x90,
    /// Contract publication.
    Publish = 0xd0,
    /// Contract invocation.
    Invocation = 0xd1,
}

impl TransactionType {
    /// The tag byte.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for TransactionType {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0x00 => Self::Miner,
            0x01 => Self::Issue,
            0x02 => Self::Claim,
            0x20 => Self::Enrollment,
            0x40 => Self::Register,
            0x80 => Self::Contract,
            0x90 => Self::State,
            0xd0 => Self::Publish,
            0xd1 => Self::Invocation,
            _ => {
                return Err(CoreError::InvalidFormat {
                    message: format!("Unknown transaction type: {value:#04x}"),
                })
            }
        })
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Version tag carried by a transaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TradingVersion {
    /// Version 0.
    #[default]
    V0 = 0x00,
    /// Version 1, used by invocation transactions that carry a GAS fee.
    V1 = 0x01,
}

impl TradingVersion {
    /// The tag byte.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for TradingVersion {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Self::V0),
            0x01 => Ok(Self::V1),
            _ => Err(CoreError::InvalidFormat {
                message: format!("Unknown trading version: {value:#04x}"),
            }),
        }
    }
}
