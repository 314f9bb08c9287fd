//!
//! Cardano extended keys over the Kholaw ed25519 construction: 64-byte
//! secrets tweaked additively so that soft paths stay derivable from the
//! public side. Covers the Icarus and Ledger master KDFs (Shelley wallets)
//! and the Byron legacy scheme with its encrypted derivation-path payload.
//!

pub mod byron;
mod payload;
mod xprivate_key;
mod xpublic_key;

pub use xprivate_key::XPrv;
pub use xpublic_key::XPub;

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use hdwallet_ecc::ed25519::PublicKey;

use crate::types::KeyFingerprint;

/// Child index serialization and tweak arithmetic variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DerivationScheme {
    /// Byron-era derivation: big-endian child indexes and byte-wise tweak
    /// arithmetic that drops carries.
    V1,
    /// Icarus/Shelley derivation: little-endian child indexes with full
    /// carry propagation.
    V2,
}

/// First four bytes of `RIPEMD160(SHA-256(public key))` over the raw
/// 32-byte point encoding.
pub(crate) fn key_fingerprint(public_key: &PublicKey) -> KeyFingerprint {
    let digest = Ripemd160::digest(Sha256::digest(public_key.to_bytes()));
    let mut fingerprint = KeyFingerprint::default();
    fingerprint.copy_from_slice(&digest[..4]);
    fingerprint
}
