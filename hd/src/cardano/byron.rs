//!
//! Byron legacy (Daedalus) derivation. The master key iterates an HMAC
//! counter chain over the CBOR-wrapped seed, children derive under
//! [`DerivationScheme::V1`], and the hardened path of a key travels with
//! it inside an encrypted CBOR payload so that an xprv alone can rebuild
//! its position in the tree.
//!

use ciborium::value::Value;
use hmac::Mac;
use sha2::{Digest, Sha512};
use zeroize::{Zeroize, Zeroizing};

use hdwallet_ecc::kholaw::{SecretKey, EXTENDED_KEY_SIZE};

use crate::derivation_path::DerivationPath;
use crate::result::Result;
use crate::types::{ChainCode, HmacSha512, KEY_SIZE};

use super::{payload, DerivationScheme, XPrv};

/// Derives the master key from the legacy wallet seed (the Blake2b-256
/// digest of the CBOR-wrapped entropy).
///
/// The HMAC is keyed by the CBOR byte-string wrapping of the seed and fed
/// `"Root Seed Chain {n}"` for n = 1, 2, ... until the SHA-512 expansion of
/// the digest's left half clamps with bit 5 of byte 31 clear.
pub fn master(seed: &[u8]) -> Result<XPrv> {
    let mut key = Zeroizing::new(Vec::with_capacity(seed.len() + 3));
    ciborium::ser::into_writer(&Value::Bytes(seed.to_vec()), &mut *key)?;

    let mut counter = 1u32;
    loop {
        let mut hmac = HmacSha512::new_from_slice(&key)?;
        hmac.update(format!("Root Seed Chain {counter}").as_bytes());
        let digest = hmac.finalize().into_bytes();
        let (secret, chain_code_bytes) = digest.split_at(KEY_SIZE);

        let mut extended: [u8; EXTENDED_KEY_SIZE] = Sha512::digest(secret).into();
        extended[0] &= 0b1111_1000;
        extended[31] &= 0b0011_1111;
        extended[31] |= 0b0100_0000;

        if extended[31] & 0b0010_0000 == 0 {
            let private_key = SecretKey::from_bytes(&extended);
            extended.zeroize();
            let mut chain_code = ChainCode::default();
            chain_code.copy_from_slice(chain_code_bytes);
            return Ok(XPrv::new_master(private_key, chain_code));
        }
        extended.zeroize();
        counter += 1;
    }
}

/// Convenience wrapper for [`XPrv::derive_path`] under the legacy scheme.
pub fn derive_path(xprv: XPrv, path: &DerivationPath) -> Result<XPrv> {
    xprv.derive_path(path, DerivationScheme::V1)
}

/// Key encrypting the derivation-path payload of `xprv`.
pub fn payload_key(xprv: &XPrv) -> Result<[u8; KEY_SIZE]> {
    payload::path_key(&xprv.private_key().public_key().to_bytes(), &xprv.attrs().chain_code)
}

/// Encrypts `path` for attachment to a serialized legacy key.
pub fn encrypt_path(xprv: &XPrv, path: &DerivationPath) -> Result<Vec<u8>> {
    let key = payload_key(xprv)?;
    payload::encrypt(&key, &payload::encode_path(path))
}

/// Decrypts and decodes a payload produced by [`encrypt_path`]. Fails if
/// the payload was sealed by a different key or has been altered.
pub fn decrypt_path(xprv: &XPrv, sealed: &[u8]) -> Result<DerivationPath> {
    let key = payload_key(xprv)?;
    payload::decode_path(&payload::decrypt(&key, sealed)?)
}
