//! Trait for public key types.

use crate::types::*;
use hdwallet_ecc::{ed25519, nist256p1};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Serialized public key material.
pub trait PublicKey: Sized {
    /// Initialize from the provided bytes.
    fn from_bytes(bytes: PublicKeyBytes) -> Result<Self>;

    /// Serialize this key as bytes.
    fn to_bytes(&self) -> PublicKeyBytes;

    /// Derive a child key from a parent key and the left half of the
    /// derivation HMAC. Not available on curves where public derivation is
    /// undefined.
    fn derive_child(&self, tweak: PrivateKeyBytes) -> Result<Self>;

    /// First four bytes of `RIPEMD160(SHA-256(key_bytes))`.
    fn fingerprint(&self) -> KeyFingerprint {
        let digest = Ripemd160::digest(Sha256::digest(self.to_bytes()));
        [digest[0], digest[1], digest[2], digest[3]]
    }
}

impl PublicKey for secp256k1::PublicKey {
    fn from_bytes(bytes: PublicKeyBytes) -> Result<Self> {
        Ok(secp256k1::PublicKey::from_slice(&bytes)?)
    }

    fn to_bytes(&self) -> PublicKeyBytes {
        self.serialize()
    }

    fn derive_child(&self, tweak: PrivateKeyBytes) -> Result<Self> {
        let tweak = secp256k1::Scalar::from_be_bytes(tweak).map_err(|_| Error::TweakOutOfRange)?;
        self.add_exp_tweak(secp256k1::SECP256K1, &tweak).map_err(|_| Error::TweakOutOfRange)
    }
}

impl PublicKey for nist256p1::PublicKey {
    fn from_bytes(bytes: PublicKeyBytes) -> Result<Self> {
        Ok(nist256p1::PublicKey::from_bytes(&bytes)?)
    }

    fn to_bytes(&self) -> PublicKeyBytes {
        self.to_bytes()
    }

    fn derive_child(&self, tweak: PrivateKeyBytes) -> Result<Self> {
        // Both an out-of-range tweak and an identity child point are
        // retryable conditions.
        self.add_exp_tweak(&tweak).map_err(|_| Error::TweakOutOfRange)
    }
}

/// Ed25519 public keys serialize with a leading zero tag byte in front of
/// the 32-byte compressed point, and have no public-side derivation.
impl PublicKey for ed25519::PublicKey {
    fn from_bytes(bytes: PublicKeyBytes) -> Result<Self> {
        if bytes[0] != 0 {
            return Err(Error::DecodeIssue);
        }

        Ok(ed25519::PublicKey::from_bytes(&bytes[1..].try_into()?)?)
    }

    fn to_bytes(&self) -> PublicKeyBytes {
        let mut bytes = [0u8; KEY_SIZE + 1];
        bytes[1..].copy_from_slice(&self.to_bytes());
        bytes
    }

    fn derive_child(&self, _tweak: PrivateKeyBytes) -> Result<Self> {
        Err(Error::InvalidDerivation)
    }
}
