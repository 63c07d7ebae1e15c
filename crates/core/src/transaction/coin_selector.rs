// Copyright (C) 2015-2025 The Neo Project.
//
// coin_selector.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Greedy smallest-first coin selection.

use crate::error::{CoreError, CoreResult};
use crate::transaction::unspent::{Balance, Utxo};
use rust_decimal::Decimal;
use tracing::debug;

/// Picks the outputs that fund a spend.
///
/// Outputs are sorted ascending by value and consumed in that order until the
/// running total reaches the target. Outputs are never split and no change is
/// computed.
pub struct CoinSelector;

impl CoinSelector {
    /// Selects outputs from `balance` covering `amount`.
    ///
    /// `balance` is left sorted ascending by value. A non-positive `amount`
    /// selects nothing.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InsufficientBalance` when the total is below `amount`,
    /// `NegativeValue` or `AmountOverflow` when the outputs cannot be summed.
    pub fn select(balance: &mut Balance, amount: Decimal) -> CoreResult<Vec<Utxo>> {
        let available = balance.total_amount()?;
        if amount > available {
            return Err(CoreError::InsufficientBalance {
                requested: amount,
                available,
            });
        }

        balance.sort_min_first();

        let mut running = Decimal::ZERO;
        let mut selected = Vec::new();
        for utxo in &balance.utxos {
            if running >= amount {
                break;
            }
            running = running
                .checked_add(utxo.value)
                .ok_or(CoreError::AmountOverflow)?;
            selected.push(utxo.clone());
        }

        debug!(
            selected = selected.len(),
            total = %running,
            requested = %amount,
            "selected inputs"
        );

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UInt256;

    fn balance(values: &[i64]) -> Balance {
        Balance::new(
            values
                .iter()
                .enumerate()
                .map(|(i, v)| Utxo::new(UInt256::zero(), i as u16, Decimal::new(*v, 0)))
                .collect(),
        )
    }

    fn values(utxos: &[Utxo]) -> Vec<Decimal> {
        utxos.iter().map(|u| u.value).collect()
    }

    #[test]
    fn test_smallest_first() {
        let mut b = balance(&[5, 1, 2]);
        let selected = CoinSelector::select(&mut b, Decimal::new(3, 0)).unwrap();
        assert_eq!(values(&selected), vec![Decimal::ONE, Decimal::TWO]);
    }

    #[test]
    fn test_overshoot_takes_next() {
        let mut b = balance(&[1, 2, 5]);
        let selected = CoinSelector::select(&mut b, Decimal::new(4, 0)).unwrap();
        assert_eq!(values(&selected), vec![Decimal::ONE, Decimal::TWO, Decimal::new(5, 0)]);
    }

    #[test]
    fn test_fractional_amount() {
        let mut b = Balance::new(vec![
            Utxo::new(UInt256::zero(), 0, Decimal::new(15, 1)),
            Utxo::new(UInt256::zero(), 1, Decimal::new(1, 1)),
        ]);
        let selected = CoinSelector::select(&mut b, Decimal::new(1, 1)).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].index, 1);
    }

    #[test]
    fn test_insufficient_balance() {
        let mut b = balance(&[1, 2]);
        assert_eq!(
            CoinSelector::select(&mut b, Decimal::new(4, 0)),
            Err(CoreError::InsufficientBalance {
                requested: Decimal::new(4, 0),
                available: Decimal::new(3, 0),
            })
        );
    }

    #[test]
    fn test_exact_total_uses_everything() {
        let mut b = balance(&[2, 1]);
        let selected = CoinSelector::select(&mut b, Decimal::new(3, 0)).unwrap();
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_overflowing_total_is_an_error() {
        let mut b = Balance::new(vec![
            Utxo::new(UInt256::zero(), 0, Decimal::MAX),
            Utxo::new(UInt256::zero(), 1, Decimal::ONE),
        ]);
        assert_eq!(
            CoinSelector::select(&mut b, Decimal::ONE),
            Err(CoreError::AmountOverflow)
        );
    }

    #[test]
    fn test_negative_output_is_an_error() {
        let mut b = balance(&[3, -1]);
        assert_eq!(
            CoinSelector::select(&mut b, Decimal::ONE),
            Err(CoreError::NegativeValue {
                index: 1,
                value: Decimal::NEGATIVE_ONE,
            })
        );
    }

    #[test]
    fn test_zero_amount_selects_nothing() {
        let mut b = balance(&[1]);
        assert!(CoinSelector::select(&mut b, Decimal::ZERO).unwrap().is_empty());
    }
}
