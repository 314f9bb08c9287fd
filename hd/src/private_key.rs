//! Trait for private key types, with impls for every curve the derivation
//! engine speaks.

use crate::types::*;
use crate::PublicKey;
use hdwallet_ecc::{ed25519, nist256p1};

/// Raw private key material usable as an extended-key payload.
pub trait PrivateKey: Sized {
    /// Public key type which corresponds to this private key.
    type PublicKey: PublicKey;

    /// HMAC-SHA512 key used when deriving this curve's master key from seed
    /// bytes.
    const DOMAIN_SEPARATOR: &'static [u8];

    /// Whether the curve restricts child derivation to hardened indexes.
    /// True for ed25519, where raw secrets have no group addition.
    const HARDENED_ONLY: bool;

    /// Initialize from the provided bytes.
    fn from_bytes(bytes: &PrivateKeyBytes) -> Result<Self>;

    /// Serialize this key as bytes.
    fn to_bytes(&self) -> PrivateKeyBytes;

    /// Derive a child key from a parent key and the left half of the
    /// derivation HMAC.
    ///
    /// Returns [`Error::TweakOutOfRange`] when the tweak (or the key it
    /// would produce) falls outside the curve group; callers retry on that.
    fn derive_child(&self, tweak: PrivateKeyBytes) -> Result<Self>;

    /// Serialize this key as its corresponding public key.
    fn public_key(&self) -> Self::PublicKey;
}

impl PrivateKey for secp256k1::SecretKey {
    type PublicKey = secp256k1::PublicKey;

    const DOMAIN_SEPARATOR: &'static [u8] = b"Bitcoin seed";
    const HARDENED_ONLY: bool = false;

    fn from_bytes(bytes: &PrivateKeyBytes) -> Result<Self> {
        Ok(secp256k1::SecretKey::from_slice(bytes)?)
    }

    fn to_bytes(&self) -> PrivateKeyBytes {
        self.secret_bytes()
    }

    fn derive_child(&self, tweak: PrivateKeyBytes) -> Result<Self> {
        let tweak = secp256k1::Scalar::from_be_bytes(tweak).map_err(|_| Error::TweakOutOfRange)?;
        self.add_tweak(&tweak).map_err(|_| Error::TweakOutOfRange)
    }

    fn public_key(&self) -> Self::PublicKey {
        secp256k1::PublicKey::from_secret_key_global(self)
    }
}

impl PrivateKey for nist256p1::SecretKey {
    type PublicKey = nist256p1::PublicKey;

    const DOMAIN_SEPARATOR: &'static [u8] = b"Nist256p1 seed";
    const HARDENED_ONLY: bool = false;

    fn from_bytes(bytes: &PrivateKeyBytes) -> Result<Self> {
        Ok(nist256p1::SecretKey::from_bytes(bytes)?)
    }

    fn to_bytes(&self) -> PrivateKeyBytes {
        self.to_bytes()
    }

    fn derive_child(&self, tweak: PrivateKeyBytes) -> Result<Self> {
        self.add_tweak(&tweak).map_err(|_| Error::TweakOutOfRange)
    }

    fn public_key(&self) -> Self::PublicKey {
        self.public_key()
    }
}

impl PrivateKey for ed25519::slip10::SecretKey {
    type PublicKey = ed25519::PublicKey;

    const DOMAIN_SEPARATOR: &'static [u8] = b"ed25519 seed";
    const HARDENED_ONLY: bool = true;

    fn from_bytes(bytes: &PrivateKeyBytes) -> Result<Self> {
        Ok(ed25519::slip10::SecretKey::from_bytes(bytes))
    }

    fn to_bytes(&self) -> PrivateKeyBytes {
        self.to_bytes()
    }

    /// The HMAC left half replaces the key wholesale; there is no additive
    /// step and nothing to retry.
    fn derive_child(&self, tweak: PrivateKeyBytes) -> Result<Self> {
        Ok(ed25519::slip10::SecretKey::from_bytes(&tweak))
    }

    fn public_key(&self) -> Self::PublicKey {
        self.public_key()
    }
}

impl PrivateKey for ed25519::blake2b::SecretKey {
    type PublicKey = ed25519::PublicKey;

    const DOMAIN_SEPARATOR: &'static [u8] = b"ed25519 seed";
    const HARDENED_ONLY: bool = true;

    fn from_bytes(bytes: &PrivateKeyBytes) -> Result<Self> {
        Ok(ed25519::blake2b::SecretKey::from_bytes(bytes))
    }

    fn to_bytes(&self) -> PrivateKeyBytes {
        self.to_bytes()
    }

    fn derive_child(&self, tweak: PrivateKeyBytes) -> Result<Self> {
        Ok(ed25519::blake2b::SecretKey::from_bytes(&tweak))
    }

    fn public_key(&self) -> Self::PublicKey {
        self.public_key()
    }
}

impl PrivateKey for ed25519::monero::SecretKey {
    type PublicKey = ed25519::PublicKey;

    const DOMAIN_SEPARATOR: &'static [u8] = b"ed25519 seed";
    const HARDENED_ONLY: bool = true;

    fn from_bytes(bytes: &PrivateKeyBytes) -> Result<Self> {
        Ok(ed25519::monero::SecretKey::from_bytes(bytes))
    }

    fn to_bytes(&self) -> PrivateKeyBytes {
        self.to_bytes()
    }

    fn derive_child(&self, tweak: PrivateKeyBytes) -> Result<Self> {
        Ok(ed25519::monero::SecretKey::from_bytes(&tweak))
    }

    fn public_key(&self) -> Self::PublicKey {
        self.public_key()
    }
}
