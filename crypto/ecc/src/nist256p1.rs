//! NIST P-256 key types layered over the `p256` arithmetic backend. Scalars
//! that fall outside `[1, n)` are reported as [`Error::InvalidScalar`] so the
//! derivation layer can retry with fresh entropy.

use std::fmt;

use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::elliptic_curve::PrimeField;
use p256::{NonZeroScalar, ProjectivePoint, Scalar};
use subtle::{Choice, ConstantTimeEq};

use crate::error::Error;
use crate::result::Result;

pub const KEY_SIZE: usize = 32;
pub const PUBLIC_KEY_SIZE: usize = 33;
pub const PUBLIC_KEY_UNCOMPRESSED_SIZE: usize = 65;

#[derive(Clone)]
pub struct SecretKey(p256::SecretKey);

impl SecretKey {
    pub fn from_bytes(bytes: &[u8; KEY_SIZE]) -> Result<Self> {
        let inner = p256::SecretKey::from_slice(bytes).map_err(|_| Error::InvalidScalar)?;
        Ok(Self(inner))
    }

    pub fn to_bytes(&self) -> [u8; KEY_SIZE] {
        self.0.to_bytes().into()
    }

    /// Returns `self + tweak mod n`, rejecting tweaks outside the field and
    /// sums that cancel to zero.
    pub fn add_tweak(&self, tweak: &[u8; KEY_SIZE]) -> Result<Self> {
        let tweak = Option::<Scalar>::from(Scalar::from_repr((*tweak).into())).ok_or(Error::InvalidScalar)?;
        let sum = *self.0.to_nonzero_scalar().as_ref() + tweak;
        let sum = Option::<NonZeroScalar>::from(NonZeroScalar::new(sum)).ok_or(Error::InvalidScalar)?;
        Ok(Self(p256::SecretKey::from(sum)))
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.public_key())
    }
}

impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
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

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PublicKey(p256::PublicKey);

impl PublicKey {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        p256::PublicKey::from_sec1_bytes(bytes).map(Self).map_err(|_| Error::InvalidPoint)
    }

    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        let point = self.0.to_encoded_point(true);
        let mut bytes = [0u8; PUBLIC_KEY_SIZE];
        bytes.copy_from_slice(point.as_bytes());
        bytes
    }

    pub fn to_bytes_uncompressed(&self) -> [u8; PUBLIC_KEY_UNCOMPRESSED_SIZE] {
        let point = self.0.to_encoded_point(false);
        let mut bytes = [0u8; PUBLIC_KEY_UNCOMPRESSED_SIZE];
        bytes.copy_from_slice(point.as_bytes());
        bytes
    }

    /// Returns `self + tweak·G`, rejecting tweaks outside the field and sums
    /// that land on the point at infinity.
    pub fn add_exp_tweak(&self, tweak: &[u8; KEY_SIZE]) -> Result<Self> {
        let tweak = Option::<Scalar>::from(Scalar::from_repr((*tweak).into())).ok_or(Error::InvalidScalar)?;
        let point = ProjectivePoint::from(*self.0.as_affine()) + ProjectivePoint::GENERATOR * tweak;
        let public = p256::PublicKey::from_affine(point.to_affine()).map_err(|_| Error::InvalidPoint)?;
        Ok(Self(public))
    }
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

    fn key32(hex: &str) -> [u8; KEY_SIZE] {
        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(&hex!(hex));
        bytes
    }

    #[test]
    fn public_keys_serialize_compressed() {
        let data = [
            ["612091aaa12e22dd2abef664f8a01a82cae99ad7441b7ef8110424915c268bc2", "0266874dc6ade47b3ecd096745ca09bcd29638dd52c2c12117b11ed3e458cfa9e8"],
            ["6939694369114c67917a182c59ddb8cafc3004e63ca5d3b84403ba8613debc0c", "0384610f5ecffe8fda089363a41f56a5c7ffc1d81b59a612d0d649b2d22355590c"],
        ];
        for [secret_hex, public_hex] in data {
            let key = SecretKey::from_bytes(&key32(secret_hex)).unwrap();
            assert_eq!(key.public_key().to_bytes(), hex!(public_hex)[..]);
        }
    }

    #[test]
    fn out_of_range_scalars_are_rejected() {
        assert!(SecretKey::from_bytes(&[0u8; KEY_SIZE]).is_err());
        // The group order itself is not a valid secret.
        let order = key32("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");
        assert!(SecretKey::from_bytes(&order).is_err());
    }

    #[test]
    fn tweaking_commutes_with_the_public_side() {
        let key = SecretKey::from_bytes(&key32("612091aaa12e22dd2abef664f8a01a82cae99ad7441b7ef8110424915c268bc2")).unwrap();
        let mut tweak = [0u8; KEY_SIZE];
        tweak[31] = 0x2a;
        let tweaked_secret = key.add_tweak(&tweak).unwrap();
        let tweaked_public = key.public_key().add_exp_tweak(&tweak).unwrap();
        assert_eq!(tweaked_secret.public_key(), tweaked_public);
    }

    #[test]
    fn public_keys_round_trip_through_sec1() {
        let key = SecretKey::from_bytes(&key32("612091aaa12e22dd2abef664f8a01a82cae99ad7441b7ef8110424915c268bc2")).unwrap();
        let bytes = key.public_key().to_bytes();
        assert_eq!(PublicKey::from_bytes(&bytes).unwrap(), key.public_key());
    }

    #[test]
    fn uncompressed_form_carries_both_coordinates() {
        let mut one = [0u8; KEY_SIZE];
        one[31] = 1;
        let generator = SecretKey::from_bytes(&one).unwrap().public_key();
        assert_eq!(
            generator.to_bytes_uncompressed(),
            hex!(
                "046b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296\
                 4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
            )[..]
        );
        assert_eq!(PublicKey::from_bytes(&generator.to_bytes_uncompressed()).unwrap(), generator);
    }
}
