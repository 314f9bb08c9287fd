//! Kholaw-style extended ed25519 secret keys: 64 bytes holding a pre-clamped
//! scalar half `kL` and a nonce half `kR`. Child scalars are produced by the
//! additive tweaks below rather than by re-hashing, so public-side soft
//! derivation stays possible.

use std::fmt;

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::ed25519::{PublicKey, KEY_SIZE};

pub const EXTENDED_KEY_SIZE: usize = 64;

#[derive(Clone)]
pub struct SecretKey([u8; EXTENDED_KEY_SIZE]);

impl SecretKey {
    pub fn from_bytes(bytes: &[u8; EXTENDED_KEY_SIZE]) -> Self {
        Self(*bytes)
    }

    pub fn to_bytes(&self) -> [u8; EXTENDED_KEY_SIZE] {
        self.0
    }

    pub fn key_left(&self) -> [u8; KEY_SIZE] {
        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(&self.0[..KEY_SIZE]);
        bytes
    }

    pub fn key_right(&self) -> [u8; KEY_SIZE] {
        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(&self.0[KEY_SIZE..]);
        bytes
    }

    /// Returns `kL·G`. A clamped `kL` exceeds the group order; the reduction
    /// here is absorbed by the basepoint's order and yields the same point.
    pub fn public_key(&self) -> PublicKey {
        let scalar = Scalar::from_bytes_mod_order(self.key_left());
        PublicKey::from_point(EdwardsPoint::mul_base(&scalar))
    }
}

impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecretKey").field(&"...").finish()
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// `x + 8·trunc28(z)` over little-endian bytes with full carry propagation.
/// The sum of a clamped scalar and a 227-bit tweak never overflows 256 bits.
pub fn add_28_mul8(x: &[u8; KEY_SIZE], z: &[u8; KEY_SIZE]) -> [u8; KEY_SIZE] {
    let mut out = [0u8; KEY_SIZE];
    let mut carry: u16 = 0;
    for i in 0..28 {
        let r = x[i] as u16 + ((z[i] as u16) << 3) + carry;
        out[i] = r as u8;
        carry = r >> 8;
    }
    for i in 28..KEY_SIZE {
        let r = x[i] as u16 + carry;
        out[i] = r as u8;
        carry = r >> 8;
    }
    out
}

/// `x + z mod 2^256` over little-endian bytes.
pub fn add_256bits(x: &[u8; KEY_SIZE], z: &[u8; KEY_SIZE]) -> [u8; KEY_SIZE] {
    let mut out = [0u8; KEY_SIZE];
    let mut carry: u16 = 0;
    for i in 0..KEY_SIZE {
        let r = x[i] as u16 + z[i] as u16 + carry;
        out[i] = r as u8;
        carry = r >> 8;
    }
    out
}

/// Legacy variant of [`add_28_mul8`]: each byte of `z` is shifted left by 3
/// in isolation (bits falling off the byte are lost) before the scalar sum
/// modulo the group order. Kept bit-for-bit for old key trees.
pub fn add_28_mul8_v1(x: &[u8; KEY_SIZE], z: &[u8; KEY_SIZE]) -> [u8; KEY_SIZE] {
    let mut shifted = [0u8; KEY_SIZE];
    for i in 0..KEY_SIZE {
        shifted[i] = z[i] << 3;
    }
    let sum = Scalar::from_bytes_mod_order(*x) + Scalar::from_bytes_mod_order(shifted);
    shifted.zeroize();
    sum.to_bytes()
}

/// Legacy variant of [`add_256bits`]: byte-wise addition without carry
/// propagation. Kept bit-for-bit for old key trees.
pub fn add_256bits_v1(x: &[u8; KEY_SIZE], z: &[u8; KEY_SIZE]) -> [u8; KEY_SIZE] {
    let mut out = [0u8; KEY_SIZE];
    for i in 0..KEY_SIZE {
        out[i] = x[i].wrapping_add(z[i]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use faster_hex::hex_decode_fallback;

    macro_rules! hex {
        ($str: expr) => {{
            let len = $str.as_bytes().len() / 2;
            let mut dst = vec![0; len];
            dst.resize(len, 0);
            hex_decode_fallback($str.as_bytes(), &mut dst);
            dst
        }};
    }

    #[test]
    fn public_key_comes_from_the_left_half() {
        let mut bytes = [0u8; EXTENDED_KEY_SIZE];
        bytes[..KEY_SIZE].copy_from_slice(&hex!("b07ff3e63c17cd2e0504e4bfd52a98c47abde183ccd0738efc385e764fd91d4b"));
        bytes[KEY_SIZE..].copy_from_slice(&hex!("d7d399eeef3c4df68facb3f11e4a4d45513ea1e2a8018aa35b3c078714cfdced"));
        let key = SecretKey::from_bytes(&bytes);
        assert_eq!(
            key.public_key().to_bytes(),
            hex!("51aa1dcac6324b41cb184e27589a208b7f1c941c620e1e0d10414c979989a7c2")[..]
        );
        assert_eq!(key.key_left(), bytes[..KEY_SIZE]);
        assert_eq!(key.key_right(), bytes[KEY_SIZE..]);
    }

    #[test]
    fn add_28_mul8_carries_across_bytes_and_the_legacy_variant_does_not() {
        let zero = [0u8; KEY_SIZE];
        let mut z = [0u8; KEY_SIZE];
        z[0] = 0x20;
        // 0x20·8 = 0x100: the carry lands in the next byte.
        let mut carried = [0u8; KEY_SIZE];
        carried[1] = 0x01;
        assert_eq!(add_28_mul8(&zero, &z), carried);
        // The legacy shift loses those bits entirely.
        assert_eq!(add_28_mul8_v1(&zero, &z), zero);
    }

    #[test]
    fn add_256bits_carries_and_the_legacy_variant_wraps_per_byte() {
        let x = [0xffu8; KEY_SIZE];
        let z = [0x01u8; KEY_SIZE];
        let mut carried = [0x01u8; KEY_SIZE];
        carried[0] = 0x00;
        assert_eq!(add_256bits(&x, &z), carried);
        assert_eq!(add_256bits_v1(&x, &z), [0u8; KEY_SIZE]);
    }

    #[test]
    fn tweaks_ignore_bytes_past_the_28_byte_window() {
        let zero = [0u8; KEY_SIZE];
        let mut z = [0u8; KEY_SIZE];
        z[28] = 0xff;
        z[31] = 0xff;
        assert_eq!(add_28_mul8(&zero, &z), zero);
    }
}
