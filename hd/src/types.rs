//! Common type aliases shared across the derivation engines.

pub use crate::error::Error;
pub use crate::result::Result;

/// HMAC with SHA-512.
pub type HmacSha512 = hmac::Hmac<sha2::Sha512>;

/// HMAC with SHA-256.
pub type HmacSha256 = hmac::Hmac<sha2::Sha256>;

/// Derivation depth.
pub type Depth = u8;

/// Chain code: extension for both private and public keys.
pub type ChainCode = [u8; KEY_SIZE];

/// Key fingerprints.
pub type KeyFingerprint = [u8; 4];

/// Extended key version bytes.
pub type Version = u32;

/// Raw private key bytes.
pub type PrivateKeyBytes = [u8; KEY_SIZE];

/// Serialized public key bytes. Weierstrass keys use the full SEC1
/// compressed form; ed25519 keys carry a leading zero tag byte.
pub type PublicKeyBytes = [u8; KEY_SIZE + 1];

/// Size of a raw private key or chain code in bytes.
pub const KEY_SIZE: usize = 32;
