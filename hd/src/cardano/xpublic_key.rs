use hmac::Mac;

use hdwallet_ecc::ed25519::PublicKey;
use hdwallet_ecc::kholaw;

use crate::attrs::ExtendedKeyAttrs;
use crate::child_number::ChildNumber;
use crate::derivation_path::DerivationPath;
use crate::error::Error;
use crate::result::Result;
use crate::types::{ChainCode, HmacSha512, KeyFingerprint, KEY_SIZE};

use super::{key_fingerprint, DerivationScheme};

/// Size of the `public key ‖ chain code` export encoding.
pub const EXPORT_SIZE: usize = KEY_SIZE * 2;

/// Cardano extended public key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct XPub {
    /// Derived public key
    public_key: PublicKey,

    /// Extended key attributes.
    attrs: ExtendedKeyAttrs,
}

impl XPub {
    /// Restores an account key from the 64-byte `public key ‖ chain code`
    /// export format. The restored key carries root attributes.
    pub fn from_bytes(bytes: &[u8; EXPORT_SIZE]) -> Result<Self> {
        let mut public = [0u8; KEY_SIZE];
        public.copy_from_slice(&bytes[..KEY_SIZE]);
        let mut chain_code = ChainCode::default();
        chain_code.copy_from_slice(&bytes[KEY_SIZE..]);
        let public_key = PublicKey::from_bytes(&public)?;
        let attrs = ExtendedKeyAttrs {
            depth: 0,
            parent_fingerprint: Default::default(),
            child_number: ChildNumber::default(),
            chain_code,
        };
        Ok(Self { public_key, attrs })
    }

    pub fn from_public_key(public_key: PublicKey, attrs: &ExtendedKeyAttrs) -> Self {
        Self { public_key, attrs: attrs.clone() }
    }

    /// Obtain the non-extended public key value.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Get attributes for this key such as depth, parent fingerprint,
    /// child number, and chain code.
    pub fn attrs(&self) -> &ExtendedKeyAttrs {
        &self.attrs
    }

    /// Compute a 4-byte key fingerprint for this extended public key.
    pub fn fingerprint(&self) -> KeyFingerprint {
        key_fingerprint(&self.public_key)
    }

    /// Derive a soft child key for a particular [`ChildNumber`]. Hardened
    /// children commit to the secret halves and cannot be derived here.
    pub fn derive_child(&self, child_number: ChildNumber, scheme: DerivationScheme) -> Result<Self> {
        if child_number.is_hardened() {
            return Err(Error::InvalidDerivation);
        }
        let depth = self.attrs.depth.checked_add(1).ok_or(Error::Depth)?;
        let index_bytes = match scheme {
            DerivationScheme::V1 => u32::from(child_number).to_be_bytes(),
            DerivationScheme::V2 => u32::from(child_number).to_le_bytes(),
        };
        let public_bytes = self.public_key.to_bytes();

        let mut z_mac = HmacSha512::new_from_slice(&self.attrs.chain_code)?;
        let mut i_mac = HmacSha512::new_from_slice(&self.attrs.chain_code)?;
        z_mac.update(&[0x02]);
        i_mac.update(&[0x03]);
        for mac in [&mut z_mac, &mut i_mac] {
            mac.update(&public_bytes);
            mac.update(&index_bytes);
        }
        let z = z_mac.finalize().into_bytes();
        let i = i_mac.finalize().into_bytes();

        let mut z_left = [0u8; KEY_SIZE];
        z_left.copy_from_slice(&z[..KEY_SIZE]);

        // The additive tweak is 8·trunc28(zL); the legacy scheme shifts each
        // byte in isolation instead.
        let tweak = match scheme {
            DerivationScheme::V1 => kholaw::add_28_mul8_v1(&[0u8; KEY_SIZE], &z_left),
            DerivationScheme::V2 => kholaw::add_28_mul8(&[0u8; KEY_SIZE], &z_left),
        };
        let public_key = self.public_key.add_tweak_mul_base(&tweak);

        let mut chain_code = ChainCode::default();
        chain_code.copy_from_slice(&i[KEY_SIZE..]);

        let attrs = ExtendedKeyAttrs {
            parent_fingerprint: self.fingerprint(),
            child_number,
            chain_code,
            depth,
        };

        Ok(Self { public_key, attrs })
    }

    /// Derive a sequence of soft children from a given path.
    pub fn derive_path(self, path: &DerivationPath, scheme: DerivationScheme) -> Result<Self> {
        path.iter().try_fold(self, |key, child_number| key.derive_child(child_number, scheme))
    }

    /// The `public key ‖ chain code` export encoding.
    pub fn to_bytes(&self) -> [u8; EXPORT_SIZE] {
        let mut bytes = [0u8; EXPORT_SIZE];
        bytes[..KEY_SIZE].copy_from_slice(&self.public_key.to_bytes());
        bytes[KEY_SIZE..].copy_from_slice(&self.attrs.chain_code);
        bytes
    }
}
