//! Monero flavored ed25519 secret keys. The 32-byte secret is used as a
//! little-endian scalar directly (reduced modulo the group order at point
//! multiplication time, with no hashing and no clamping).

use std::fmt;

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;
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
        PublicKey::from_point(EdwardsPoint::mul_base(&self.scalar()))
    }

    /// Returns `self·P`, the shared-secret half of the subaddress scheme.
    pub fn mul_point(&self, point: &PublicKey) -> PublicKey {
        PublicKey::from_point(self.scalar() * point.as_point())
    }

    fn scalar(&self) -> Scalar {
        Scalar::from_bytes_mod_order(self.0)
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
    use super::super::reduce;
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
    fn reduce_folds_high_bytes_into_the_order() {
        let seed = key32("3b094ca7218f175e91fa2402b4ae239a2f4a0478a999c609bd5e2ce1eee7f33c");
        assert_eq!(
            reduce(&seed),
            key32("748d6a90d265e0550e243e1918c1865b2f4a0478a999c609bd5e2ce1eee7f30c")
        );
    }

    #[test]
    fn public_keys_skip_hashing_and_clamping() {
        let data = [
            ["748d6a90d265e0550e243e1918c1865b2f4a0478a999c609bd5e2ce1eee7f30c", "65fae77eaa3235a3d804f6680221204b857535ffcea92231cd506cac74f501dc"],
            ["89ff23c91c78e82c0dbb5e2d30409b5a6b4cd91fd15d77b65195e140d4df7905", "51a6169fb241aabbc79dcc32a04b05fe19dd6eab7653e4eebf69090acbc971e0"],
            ["2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7", "44a4031ee6118aff80dee71b64e010df1b02e59751c10df117cc93a850793c72"],
            ["68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3", "96d807884b148730f82678b619199b4ce93ff95b519f70481d0597721ced7e97"],
        ];
        for [secret_hex, public_hex] in data {
            let key = SecretKey::from_bytes(&key32(secret_hex));
            assert_eq!(key.public_key().to_bytes(), hex!(public_hex)[..]);
        }
    }

    #[test]
    fn mul_point_matches_the_subaddress_view_half() {
        let view = SecretKey::from_bytes(&key32("89ff23c91c78e82c0dbb5e2d30409b5a6b4cd91fd15d77b65195e140d4df7905"));
        let sub_spend =
            PublicKey::from_bytes(&key32("7caf2c299f7bb2d9b23e94826715ed836a5464e2802b2677413499d7eaebae2a")).unwrap();
        assert_eq!(
            view.mul_point(&sub_spend).to_bytes(),
            hex!("18d35f7771226c54d3610bb2b7b737fc48bf5417976778a23ed5c5a75093d2ba")[..]
        );
    }
}
