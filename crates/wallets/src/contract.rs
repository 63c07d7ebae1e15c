//! Contract implementation for multi-signature accounts.
//!
//! A redeem script is `PUSH(m)`, each compressed public key pushed in
//! ascending order of its X coordinate (then Y), `PUSH(n)`, `CHECKMULTISIG`.

use crate::{Error, Result};
use neo_config::ProtocolSettings;
use neo_core::{Address, UInt160};
use neo_cryptography::PublicKey;
use neo_vm::{OpCode, ScriptBuilder};
use tracing::debug;

/// Sorts keys ascending by X coordinate, breaking ties by Y.
pub fn sort_public_keys(public_keys: &mut [PublicKey]) {
    public_keys.sort_by(|a, b| a.x().cmp(b.x()).then_with(|| a.y().cmp(b.y())));
}

/// A verification script together with its script hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contract {
    script: Vec<u8>,
    script_hash: UInt160,
}

impl Contract {
    /// Wraps an existing verification script.
    pub fn create(script: Vec<u8>) -> Self {
        let script_hash = UInt160::from_script(&script);
        Self {
            script,
            script_hash,
        }
    }

    /// Creates an M-of-N multi-signature contract.
    pub fn create_multi_sig_contract(m: usize, public_keys: &[PublicKey]) -> Result<Self> {
        Self::create_multi_sig_contract_with_settings(m, public_keys, &ProtocolSettings::default())
    }

    /// Creates an M-of-N multi-signature contract under explicit limits.
    pub fn create_multi_sig_contract_with_settings(
        m: usize,
        public_keys: &[PublicKey],
        settings: &ProtocolSettings,
    ) -> Result<Self> {
        let script = Self::create_multi_sig_redeem_script_with_settings(m, public_keys, settings)?;
        Ok(Self::create(script))
    }

    /// Creates the redeem script of an M-of-N multi-signature contract.
    ///
    /// The output does not depend on the order of `public_keys`.
    ///
    /// # Errors
    ///
    /// `InvalidMultiSigParameters` unless `1 <= m <= n <= 1024`.
    pub fn create_multi_sig_redeem_script(m: usize, public_keys: &[PublicKey]) -> Result<Vec<u8>> {
        Self::create_multi_sig_redeem_script_with_settings(
            m,
            public_keys,
            &ProtocolSettings::default(),
        )
    }

    /// Like [`Contract::create_multi_sig_redeem_script`], with the key limit
    /// taken from `settings`.
    pub fn create_multi_sig_redeem_script_with_settings(
        m: usize,
        public_keys: &[PublicKey],
        settings: &ProtocolSettings,
    ) -> Result<Vec<u8>> {
        let n = public_keys.len();
        if !(1..=n).contains(&m) || n > settings.max_multisig_public_keys {
            return Err(Error::InvalidMultiSigParameters {
                required: m,
                keys: n,
            });
        }

        let mut sorted_keys = public_keys.to_vec();
        sort_public_keys(&mut sorted_keys);

        let mut builder = ScriptBuilder::new();
        builder.emit_push_int(m as i64)?;
        for key in &sorted_keys {
            builder.emit_push(&key.to_compressed())?;
        }
        builder.emit_push_int(n as i64)?;
        builder.emit_opcode(OpCode::CHECKMULTISIG);

        debug!(m, n, len = builder.len(), "created multi-sig redeem script");
        Ok(builder.into_bytes())
    }

    /// The verification script.
    pub fn script(&self) -> &[u8] {
        &self.script
    }

    /// RIPEMD160(SHA256(script)).
    pub fn script_hash(&self) -> UInt160 {
        self.script_hash
    }

    /// The address under the default version byte.
    pub fn address(&self) -> Address {
        Address::new(self.script_hash)
    }

    /// The address under the configured version byte.
    pub fn address_with_settings(&self, settings: &ProtocolSettings) -> Address {
        Address::from_settings(self.script_hash, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: &str = "02e77ff280db51ef3638009f11947c544ed094d4e5f2d96a9e654dc817bc3a8986";
    const P2: &str = "024da93f9a66981e499b36ce763e57fd89a47a052e86d40b42f81708c40fe9eff0";
    const P3: &str = "035ca1deea29ccb25a3a4d32701a0e735f76f3b44d233e23930cd74b68a63d10c3";

    fn key(hex: &str) -> PublicKey {
        PublicKey::from_hex(hex).unwrap()
    }

    #[test]
    fn test_sort_by_x() {
        let mut keys = vec![key(P3), key(P1), key(P2)];
        sort_public_keys(&mut keys);
        let order: Vec<PublicKey> = vec![key(P2), key(P3), key(P1)];
        assert_eq!(keys, order);
    }

    #[test]
    fn test_sort_breaks_x_ties_by_y() {
        let even = key(P1);
        let odd = key(&format!("03{}", &P1[2..]));
        assert_eq!(even.x(), odd.x());

        let mut a = vec![even.clone(), odd.clone()];
        let mut b = vec![odd, even];
        sort_public_keys(&mut a);
        sort_public_keys(&mut b);
        assert_eq!(a, b);
        assert!(a[0].y() < a[1].y());
    }

    #[test]
    fn test_two_of_two_script() {
        let script = Contract::create_multi_sig_redeem_script(2, &[key(P1), key(P2)]).unwrap();
        assert_eq!(script.len(), 1 + 2 * 34 + 1 + 1);
        assert_eq!(script[0], 0x52);
        assert_eq!(script[1], 0x21);
        assert_eq!(&script[2..35], key(P2).to_compressed().as_slice());
        assert_eq!(script[script.len() - 2], 0x52);
        assert_eq!(script[script.len() - 1], 0xae);
    }

    #[test]
    fn test_invalid_parameters() {
        let keys = [key(P1), key(P2)];
        for m in [0, 3] {
            assert_eq!(
                Contract::create_multi_sig_redeem_script(m, &keys),
                Err(Error::InvalidMultiSigParameters { required: m, keys: 2 })
            );
        }
        assert!(Contract::create_multi_sig_redeem_script(1, &[]).is_err());

        let settings = ProtocolSettings {
            max_multisig_public_keys: 1,
            ..ProtocolSettings::default()
        };
        assert_eq!(
            Contract::create_multi_sig_redeem_script_with_settings(1, &keys, &settings),
            Err(Error::InvalidMultiSigParameters { required: 1, keys: 2 })
        );
    }

    #[test]
    fn test_create_wraps_script() {
        let contract = Contract::create(vec![0x51]);
        assert_eq!(contract.script(), &[0x51]);
        assert_eq!(contract.script_hash(), UInt160::from_script(&[0x51]));
    }
}
