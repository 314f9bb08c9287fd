//! Ed25519 secret keys expanded with Blake2b-512 instead of SHA-512, as used
//! by the Nano key tree.

use std::fmt;

use curve25519_dalek::edwards::EdwardsPoint;
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
        let digest = blake2b_simd::blake2b(&self.0);
        let mut scalar = [0u8; KEY_SIZE];
        scalar.copy_from_slice(&digest.as_bytes()[..KEY_SIZE]);
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
    fn public_keys_use_blake2b_expansion() {
        let data = [
            ["2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7", "835e3307bf32df124bc0bd3e3d5eb4a751ceeebe06b69fbce54fef97bc37c062"],
            ["68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3", "df1f51aae49a3c17d07f603ded31c409e4c81fa8b32425a7e0de4143d3cfbeac"],
        ];
        for [secret_hex, public_hex] in data {
            let mut secret = [0u8; KEY_SIZE];
            secret.copy_from_slice(&hex!(secret_hex));
            let key = SecretKey::from_bytes(&secret);
            assert_eq!(key.public_key().to_bytes(), hex!(public_hex)[..]);
        }
    }
}
