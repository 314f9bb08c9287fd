//! SLIP-10 flavored ed25519 secret keys: the 32-byte secret is expanded with
//! SHA-512 and the clamped low half drives the basepoint multiplication.

use std::fmt;

use curve25519_dalek::edwards::EdwardsPoint;
use sha2::{Digest, Sha512};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use super::{PublicKey, KEY_SIZE};

#[derive(Clone)]
pub struct SecretKey([u8; KEY_SIZE]);

impl SecretKey {
    pub fn from_bytes(bytes: &[u8; KEY_SIZE]) -> Self {
        Self(*bytes)
    }

    pub fn to_bytes(&self) -> [u8; KEY_SIZE] {
        self.0
    }

    pub fn public_key(&self) -> PublicKey {
        let digest = Sha512::digest(self.0);
        let mut scalar = [0u8; KEY_SIZE];
        scalar.copy_from_slice(&digest[..KEY_SIZE]);
        PublicKey::from_point(EdwardsPoint::mul_base_clamped(scalar))
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
