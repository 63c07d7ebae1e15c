//! Base58Check encoding with a leading version byte.
//!
//! Layout: `version || payload || checksum`, where the checksum is the first
//! four bytes of `hash256(version || payload)`.

use crate::hash::{address_checksum, verify_checksum};
use crate::{Error, Result};
use neo_config::CHECKSUM_SIZE;

/// Encodes `payload` with the given version byte and a trailing checksum.
pub fn base58_check_encode(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_SIZE);
    data.push(version);
    data.extend_from_slice(payload);

    let checksum = address_checksum(&data);
    data.extend_from_slice(&checksum);

    bs58::encode(data).into_string()
}

/// Decodes a Base58Check string into its version byte and payload.
///
/// # Errors
///
/// Fails if the input is not Base58, is too short to hold a version byte and
/// checksum, or the checksum does not match.
pub fn base58_check_decode(encoded: &str) -> Result<(u8, Vec<u8>)> {
    let decoded = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| Error::Base58(e.to_string()))?;

    if decoded.len() < 1 + CHECKSUM_SIZE {
        return Err(Error::InvalidLength {
            expected: 1 + CHECKSUM_SIZE,
            actual: decoded.len(),
        });
    }

    let (data, checksum) = decoded.split_at(decoded.len() - CHECKSUM_SIZE);
    if !verify_checksum(data, checksum) {
        return Err(Error::InvalidChecksum);
    }

    Ok((data[0], data[1..].to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_address() {
        let script_hash = hex::decode("23ba2703c53263e8d6e522dc32203339dcd8eee9").unwrap();
        let address = base58_check_encode(0x17, &script_hash);
        assert_eq!(address, "AK2nJJpJr6o664CWJKi1QRXjqeic2zRp8y");

        let (version, payload) = base58_check_decode(&address).unwrap();
        assert_eq!(version, 0x17);
        assert_eq!(payload, script_hash);
    }

    #[test]
    fn test_decode_rejects_bad_checksum() {
        let mut address = base58_check_encode(0x17, &[7u8; 20]).into_bytes();
        let last = address.len() - 1;
        address[last] = if address[last] == b'1' { b'2' } else { b'1' };
        let tampered = String::from_utf8(address).unwrap();

        assert_eq!(base58_check_decode(&tampered), Err(Error::InvalidChecksum));
    }

    #[test]
    fn test_decode_rejects_invalid_input() {
        assert!(matches!(base58_check_decode("0OIl"), Err(Error::Base58(_))));
        assert!(matches!(
            base58_check_decode("1"),
            Err(Error::InvalidLength { expected: 5, actual: 1 })
        ));
    }

    proptest! {
        #[test]
        fn test_check_encoding_roundtrip(version in any::<u8>(), payload in any::<[u8; 20]>()) {
            let encoded = base58_check_encode(version, &payload);
            let (decoded_version, decoded_payload) = base58_check_decode(&encoded).unwrap();
            prop_assert_eq!(decoded_version, version);
            prop_assert_eq!(decoded_payload, payload.to_vec());
        }
    }
}
