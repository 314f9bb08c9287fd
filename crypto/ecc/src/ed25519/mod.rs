//! Ed25519 point arithmetic shared by the SLIP-10, Blake2b, Monero and
//! Kholaw key flavors. The flavors differ only in how a 32-byte secret is
//! expanded into a scalar; the compressed-Edwards public side is common.

pub mod blake2b;
pub mod monero;
pub mod slip10;

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::IsIdentity;

use crate::error::Error;
use crate::result::Result;

pub const KEY_SIZE: usize = 32;

/// Reduces 32 bytes modulo the ed25519 group order (little-endian).
pub fn reduce(bytes: &[u8; KEY_SIZE]) -> [u8; KEY_SIZE] {
    Scalar::from_bytes_mod_order(*bytes).to_bytes()
}

/// A point on the ed25519 curve in its compressed 32-byte form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PublicKey(EdwardsPoint);

impl PublicKey {
    pub fn from_bytes(bytes: &[u8; KEY_SIZE]) -> Result<Self> {
        let point = CompressedEdwardsY(*bytes).decompress().ok_or(Error::InvalidPoint)?;
        if point.is_identity() {
            return Err(Error::InvalidPoint);
        }
        Ok(Self(point))
    }

    pub fn to_bytes(&self) -> [u8; KEY_SIZE] {
        self.0.compress().to_bytes()
    }

    /// Returns `self + tweak·G`, reducing the tweak modulo the group order.
    pub fn add_tweak_mul_base(&self, tweak: &[u8; KEY_SIZE]) -> Self {
        Self(self.0 + EdwardsPoint::mul_base(&Scalar::from_bytes_mod_order(*tweak)))
    }

    pub(crate) fn from_point(point: EdwardsPoint) -> Self {
        Self(point)
    }

    pub(crate) fn as_point(&self) -> &EdwardsPoint {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;

    #[test]
    fn identity_point_is_rejected() {
        // The identity (0, 1) compresses to 0x01 followed by zeros.
        let mut bytes = [0u8; KEY_SIZE];
        bytes[0] = 0x01;
        assert_eq!(PublicKey::from_bytes(&bytes), Err(Error::InvalidPoint));
    }

    #[test]
    fn basepoint_round_trips() {
        let bytes = ED25519_BASEPOINT_POINT.compress().to_bytes();
        let key = PublicKey::from_bytes(&bytes).unwrap();
        assert_eq!(key.to_bytes(), bytes);
    }

    #[test]
    fn tweak_by_one_adds_the_basepoint() {
        let bytes = ED25519_BASEPOINT_POINT.compress().to_bytes();
        let key = PublicKey::from_bytes(&bytes).unwrap();
        let mut one = [0u8; KEY_SIZE];
        one[0] = 0x01;
        let doubled = key.add_tweak_mul_base(&one);
        assert_eq!(doubled.as_point(), &(ED25519_BASEPOINT_POINT + ED25519_BASEPOINT_POINT));
    }
}
