//! secp256r1 public keys.
//!
//! A [`PublicKey`] is decoded and validated with `p256`, then keeps its
//! affine coordinates as big integers so callers can order keys by `X`.

use crate::{Error, Result};
use neo_config::COMPRESSED_PUBLIC_KEY_SIZE;
use num_bigint::BigUint;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use std::fmt;

/// A point on the secp256r1 curve.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    compressed: [u8; COMPRESSED_PUBLIC_KEY_SIZE],
    x: BigUint,
    y: BigUint,
}

impl PublicKey {
    /// Decodes a SEC1 encoded point (compressed or uncompressed).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPublicKey` if the bytes are not a point on the curve.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let point = p256::PublicKey::from_sec1_bytes(bytes)
            .map_err(|e| Error::InvalidPublicKey(format!("{e}")))?;

        let uncompressed = point.to_encoded_point(false);
        let (x, y) = match (uncompressed.x(), uncompressed.y()) {
            (Some(x), Some(y)) => (BigUint::from_bytes_be(x), BigUint::from_bytes_be(y)),
            _ => {
                return Err(Error::InvalidPublicKey(
                    "point at infinity has no coordinates".to_string(),
                ))
            }
        };

        let encoded = point.to_encoded_point(true);
        let mut compressed = [0u8; COMPRESSED_PUBLIC_KEY_SIZE];
        if encoded.as_bytes().len() != COMPRESSED_PUBLIC_KEY_SIZE {
            return Err(Error::InvalidLength {
                expected: COMPRESSED_PUBLIC_KEY_SIZE,
                actual: encoded.as_bytes().len(),
            });
        }
        compressed.copy_from_slice(encoded.as_bytes());

        Ok(Self { compressed, x, y })
    }

    /// Decodes a hex encoded point.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }

    /// The affine X coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// The affine Y coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// The 33-byte compressed encoding.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_PUBLIC_KEY_SIZE] {
        self.compressed
    }

    /// Encodes the point, compressed or uncompressed.
    pub fn encode_point(&self, compressed: bool) -> Vec<u8> {
        if compressed {
            return self.compressed.to_vec();
        }
        let mut encoded = Vec::with_capacity(65);
        encoded.push(0x04);
        encoded.extend_from_slice(&to_fixed_32(&self.x));
        encoded.extend_from_slice(&to_fixed_32(&self.y));
        encoded
    }
}

fn to_fixed_32(value: &BigUint) -> [u8; 32] {
    let bytes = value.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.compressed))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.compressed))
    }
}
