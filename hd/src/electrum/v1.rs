use faster_hex::hex_string;
use secp256k1::{PublicKey, Scalar, SecretKey, SECP256K1};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::error::Error;
use crate::result::Result;

/// Number of SHA-256 rounds applied when stretching a seed into the master
/// private key.
pub const STRETCH_ROUNDS: usize = 100_000;

/// Electrum V1 wallet secret. The scheme has no chain code; every wallet key
/// is the master scalar offset by a hash of the master public key and the
/// key's (change, index) coordinates.
pub struct ElectrumV1PrivateKey {
    master: SecretKey,
}

impl ElectrumV1PrivateKey {
    /// Stretches `seed` into the master scalar.
    ///
    /// The seed is rendered as lowercase hex first. The historical client
    /// hashed the printable form rather than the raw bytes, and that
    /// rendering must be preserved for wallet compatibility.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        let hex = Zeroizing::new(hex_string(seed));
        let x = hex.as_bytes();
        let mut out = Zeroizing::new(x.to_vec());
        for _ in 0..STRETCH_ROUNDS {
            let mut hasher = Sha256::new();
            hasher.update(out.as_slice());
            hasher.update(x);
            out = Zeroizing::new(hasher.finalize().to_vec());
        }
        let master = SecretKey::from_slice(out.as_slice())?;
        Ok(Self { master })
    }

    pub fn master_private_key(&self) -> &SecretKey {
        &self.master
    }

    /// Master public key in the 64-byte Electrum wire form (uncompressed
    /// point without the 0x04 tag).
    pub fn master_public_key(&self) -> [u8; 64] {
        let uncompressed = PublicKey::from_secret_key_global(&self.master).serialize_uncompressed();
        let mut mpk = [0u8; 64];
        mpk.copy_from_slice(&uncompressed[1..]);
        mpk
    }

    /// Watch-only counterpart of this wallet.
    pub fn public_key(&self) -> ElectrumV1PublicKey {
        ElectrumV1PublicKey {
            master: PublicKey::from_secret_key_global(&self.master),
        }
    }

    /// Private key at (change, index).
    pub fn derive(&self, index: u32, change: u32) -> Result<SecretKey> {
        let sequence = sequence(&self.master_public_key(), index, change);
        let tweak = Scalar::from_be_bytes(sequence).map_err(|_| Error::TweakOutOfRange)?;
        Ok(self.master.add_tweak(&tweak)?)
    }
}

/// Watch-only Electrum V1 wallet. The master public key alone is enough to
/// derive every wallet public key.
pub struct ElectrumV1PublicKey {
    master: PublicKey,
}

impl ElectrumV1PublicKey {
    /// Restores a watch-only wallet from the 64-byte master public key.
    pub fn from_master_public_key(mpk: &[u8; 64]) -> Result<Self> {
        let mut uncompressed = [0u8; 65];
        uncompressed[0] = 0x04;
        uncompressed[1..].copy_from_slice(mpk);
        let master = PublicKey::from_slice(&uncompressed)?;
        Ok(Self { master })
    }

    pub fn master_public_key(&self) -> [u8; 64] {
        let mut mpk = [0u8; 64];
        mpk.copy_from_slice(&self.master.serialize_uncompressed()[1..]);
        mpk
    }

    /// Public key at (change, index), uncompressed as the historical client
    /// serialized it.
    pub fn derive(&self, index: u32, change: u32) -> Result<[u8; 65]> {
        let sequence = sequence(&self.master_public_key(), index, change);
        let tweak = Scalar::from_be_bytes(sequence).map_err(|_| Error::TweakOutOfRange)?;
        let child = self.master.add_exp_tweak(SECP256K1, &tweak)?;
        Ok(child.serialize_uncompressed())
    }
}

/// Key offset at (change, index): double SHA-256 over the decimal rendering
/// `"{index}:{change}:"` followed by the 64-byte master public key.
pub fn sequence(mpk: &[u8; 64], index: u32, change: u32) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(format!("{index}:{change}:").as_bytes());
    hasher.update(mpk);
    let first = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(first));
    out
}
