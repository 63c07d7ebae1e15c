// Copyright (C) 2015-2025 The Neo Project.
//
// unspent.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Unspent transaction outputs, grouped per native asset.

use crate::error::{CoreError, CoreResult};
use crate::transaction::coin_selector::CoinSelector;
use crate::UInt256;
use indexmap::IndexMap;
use neo_vm::{ScriptBuilder, VmResult};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Asset id of NEO, in display order.
pub const NEO_ASSET_ID: &str = "c56f33fc6ecfcd0c225c4ab356fee59390af8560be0e930faebe74a6daff7c9b";
/// Asset id of GAS, in display order.
pub const GAS_ASSET_ID: &str = "602c79718b16e442de58778e148d0b1084e3b2dffd5de6b7b16cee7969282de7";

/// The two native assets of the NEO 2 chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NativeAsset {
    /// The governing token.
    #[serde(rename = "NEO")]
    Neo,
    /// The utility token.
    #[serde(rename = "GAS")]
    Gas,
}

impl NativeAsset {
    /// Ticker symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            NativeAsset::Neo => "NEO",
            NativeAsset::Gas => "GAS",
        }
    }

    /// The well-known asset id.
    pub fn asset_id(self) -> UInt256 {
        let id = match self {
            NativeAsset::Neo => NEO_ASSET_ID,
            NativeAsset::Gas => GAS_ASSET_ID,
        };
        // Both constants are 64 hex characters.
        UInt256::parse(id).unwrap_or_default()
    }
}

impl fmt::Display for NativeAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for NativeAsset {
    type Err = CoreError;

    /// Accepts a ticker symbol (any case) or an asset id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NEO" => return Ok(NativeAsset::Neo),
            "GAS" => return Ok(NativeAsset::Gas),
            _ => {}
        }

        let id = UInt256::parse(s).map_err(|_| CoreError::AssetNotFound {
            asset: s.to_string(),
        })?;
        [NativeAsset::Neo, NativeAsset::Gas]
            .into_iter()
            .find(|asset| asset.asset_id() == id)
            .ok_or_else(|| CoreError::AssetNotFound {
                asset: s.to_string(),
            })
    }
}

/// A reference to one spendable output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utxo {
    /// Id of the transaction that created the output
    #[serde(rename = "txid")]
    pub transaction_id: UInt256,
    /// Output index inside that transaction
    pub index: u16,
    /// Amount held by the output
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub value: Decimal,
}

fn deserialize_non_negative<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = <Decimal as Deserialize>::deserialize(deserializer)?;
    if value < Decimal::ZERO {
        return Err(de::Error::custom(format!("negative output value {value}")));
    }
    Ok(value)
}

impl Utxo {
    /// Creates a new output reference.
    pub fn new(transaction_id: UInt256, index: u16, value: Decimal) -> Self {
        Self {
            transaction_id,
            index,
            value,
        }
    }

    /// Writes the little-endian transaction id followed by the pushed index.
    pub fn emit(&self, builder: &mut ScriptBuilder) -> VmResult<()> {
        builder.emit_bytes(self.transaction_id.as_bytes());
        builder.emit_push_int(i64::from(self.index))?;
        Ok(())
    }
}

/// The outputs held for one asset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Unspent outputs, in insertion order until sorted
    pub utxos: Vec<Utxo>,
}

impl Balance {
    /// Creates a balance from a list of outputs.
    pub fn new(utxos: Vec<Utxo>) -> Self {
        Self { utxos }
    }

    /// Sum of all output values.
    ///
    /// # Errors
    ///
    /// `NegativeValue` if an output holds a negative amount, `AmountOverflow`
    /// if the sum leaves the decimal range.
    pub fn total_amount(&self) -> CoreResult<Decimal> {
        self.utxos.iter().try_fold(Decimal::ZERO, |total, utxo| {
            if utxo.value < Decimal::ZERO {
                return Err(CoreError::NegativeValue {
                    index: utxo.index,
                    value: utxo.value,
                });
            }
            total
                .checked_add(utxo.value)
                .ok_or(CoreError::AmountOverflow)
        })
    }

    /// Sorts the outputs ascending by value. Equal values keep their order.
    pub fn sort_min_first(&mut self) {
        self.utxos.sort_by(|a, b| a.value.cmp(&b.value));
    }

    /// Number of outputs.
    pub fn len(&self) -> usize {
        self.utxos.len()
    }

    /// True if the balance holds no outputs.
    pub fn is_empty(&self) -> bool {
        self.utxos.is_empty()
    }
}

/// All unspent outputs of a wallet, keyed by asset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unspent {
    /// Per-asset balances
    pub assets: IndexMap<NativeAsset, Balance>,
}

impl Unspent {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an output under `asset`.
    pub fn add_utxo(&mut self, asset: NativeAsset, utxo: Utxo) -> &mut Self {
        self.assets.entry(asset).or_default().utxos.push(utxo);
        self
    }

    /// The balance for `asset`, if any outputs were recorded.
    pub fn balance(&self, asset: NativeAsset) -> Option<&Balance> {
        self.assets.get(&asset)
    }

    /// Mutable access to the balance for `asset`.
    pub fn balance_mut(&mut self, asset: NativeAsset) -> Option<&mut Balance> {
        self.assets.get_mut(&asset)
    }

    /// Picks outputs of `asset` covering `amount`.
    ///
    /// The asset's outputs are left sorted ascending by value.
    ///
    /// # Errors
    ///
    /// `AssetNotFound` if no outputs exist for the asset, `InsufficientBalance`
    /// if their total is below `amount`, and the errors of
    /// [`Balance::total_amount`].
    pub fn select_inputs(&mut self, asset: NativeAsset, amount: Decimal) -> CoreResult<Vec<Utxo>> {
        let balance = self
            .assets
            .get_mut(&asset)
            .ok_or_else(|| CoreError::AssetNotFound {
                asset: asset.to_string(),
            })?;
        CoinSelector::select(balance, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utxo(index: u16, value: i64) -> Utxo {
        Utxo::new(NativeAsset::Gas.asset_id(), index, Decimal::new(value, 0))
    }

    #[test]
    fn test_asset_ids() {
        assert_eq!(
            NativeAsset::Neo.asset_id().to_string(),
            format!("0x{NEO_ASSET_ID}")
        );
        assert_eq!(
            NativeAsset::Gas.asset_id().to_string(),
            format!("0x{GAS_ASSET_ID}")
        );
    }

    #[test]
    fn test_asset_from_str() {
        assert_eq!("neo".parse::<NativeAsset>().unwrap(), NativeAsset::Neo);
        assert_eq!("GAS".parse::<NativeAsset>().unwrap(), NativeAsset::Gas);
        assert_eq!(
            GAS_ASSET_ID.parse::<NativeAsset>().unwrap(),
            NativeAsset::Gas
        );
        assert!(matches!(
            "ONT".parse::<NativeAsset>(),
            Err(CoreError::AssetNotFound { .. })
        ));
    }

    #[test]
    fn test_utxo_emit() {
        let mut builder = ScriptBuilder::new();
        utxo(3, 1).emit(&mut builder).unwrap();

        let bytes = builder.to_array();
        assert_eq!(bytes.len(), 33);
        assert_eq!(&bytes[..32], NativeAsset::Gas.asset_id().as_bytes());
        assert_eq!(bytes[32], 0x53);
    }

    #[test]
    fn test_balance_total_and_sort() {
        let mut balance = Balance::new(vec![utxo(0, 5), utxo(1, 1), utxo(2, 2), utxo(3, 1)]);
        assert_eq!(balance.total_amount().unwrap(), Decimal::new(9, 0));

        balance.sort_min_first();
        let order: Vec<u16> = balance.utxos.iter().map(|u| u.index).collect();
        assert_eq!(order, vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_total_rejects_negative_and_overflow() {
        let negative = Balance::new(vec![utxo(0, 1), utxo(4, -2)]);
        assert_eq!(
            negative.total_amount(),
            Err(CoreError::NegativeValue {
                index: 4,
                value: Decimal::new(-2, 0),
            })
        );

        let huge = Balance::new(vec![
            Utxo::new(UInt256::zero(), 0, Decimal::MAX),
            utxo(1, 1),
        ]);
        assert_eq!(huge.total_amount(), Err(CoreError::AmountOverflow));
    }

    #[test]
    fn test_unspent_missing_asset() {
        let mut unspent = Unspent::new();
        unspent.add_utxo(NativeAsset::Gas, utxo(0, 1));

        assert_eq!(
            unspent.select_inputs(NativeAsset::Neo, Decimal::ONE),
            Err(CoreError::AssetNotFound {
                asset: "NEO".to_string()
            })
        );
        assert!(unspent.balance(NativeAsset::Neo).is_none());
        assert_eq!(unspent.balance(NativeAsset::Gas).map(Balance::len), Some(1));
    }
}
