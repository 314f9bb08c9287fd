use hdwallet_ecc::ed25519::{self, monero::SecretKey, PublicKey};
use sha3::{Digest, Keccak256};

use crate::error::Error;
use crate::result::Result;

/// Tag prepended to the subaddress hash preimage.
const SUBADDRESS_TAG: &[u8] = b"SubAddr\0";

/// Monero wallet keys. The scheme has no derivation tree: the spend key is
/// the seed reduced into the curve order, the view key is derived from the
/// spend key, and subaddresses are generated on the public side from
/// (major, minor) account coordinates.
pub struct MoneroKeys {
    spend: SecretKey,
    view: SecretKey,
}

impl MoneroKeys {
    /// Builds the key pair from a seed. A 16-byte seed is widened by
    /// repeating it, matching legacy short-seed wallets.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        let seed32: [u8; 32] = match seed.len() {
            32 => seed.try_into()?,
            16 => {
                let mut widened = [0u8; 32];
                widened[..16].copy_from_slice(seed);
                widened[16..].copy_from_slice(seed);
                widened
            }
            _ => return Err(Error::SeedLength),
        };
        Ok(Self::from_spend_key(&ed25519::reduce(&seed32)))
    }

    /// Restores the key pair from a canonical spend scalar.
    pub fn from_spend_key(spend_bytes: &[u8; 32]) -> Self {
        let digest: [u8; 32] = Keccak256::digest(spend_bytes).into();
        let view = SecretKey::from_bytes(&ed25519::reduce(&digest));
        Self { spend: SecretKey::from_bytes(spend_bytes), view }
    }

    pub fn spend_private_key(&self) -> &SecretKey {
        &self.spend
    }

    pub fn view_private_key(&self) -> &SecretKey {
        &self.view
    }

    pub fn spend_public_key(&self) -> PublicKey {
        self.spend.public_key()
    }

    pub fn view_public_key(&self) -> PublicKey {
        self.view.public_key()
    }

    /// Subaddress key pair `(spend, view)` at (major, minor). The (0, 0)
    /// coordinate is the primary address and returns the wallet keys
    /// themselves rather than hashed ones.
    pub fn subaddress(&self, major: u32, minor: u32) -> (PublicKey, PublicKey) {
        if major == 0 && minor == 0 {
            return (self.spend_public_key(), self.view_public_key());
        }
        let mut hasher = Keccak256::new();
        hasher.update(SUBADDRESS_TAG);
        hasher.update(self.view.to_bytes());
        hasher.update(major.to_le_bytes());
        hasher.update(minor.to_le_bytes());
        let digest: [u8; 32] = hasher.finalize().into();
        let m = ed25519::reduce(&digest);
        let sub_spend = self.spend_public_key().add_tweak_mul_base(&m);
        let sub_view = self.view.mul_point(&sub_spend);
        (sub_spend, sub_view)
    }
}
