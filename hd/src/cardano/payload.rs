//! Encrypted derivation-path payload carried by Byron legacy keys. The
//! plaintext is an indefinite-length CBOR array of child indexes; the
//! legacy wallet hashed and encrypted that exact framing, and `ciborium`
//! only emits definite-length arrays, so the bytes are written by hand.

use chacha20poly1305::aead::Aead;
use chacha20poly1305::{ChaCha20Poly1305, KeyInit, Nonce};

use crate::child_number::ChildNumber;
use crate::derivation_path::DerivationPath;
use crate::error::Error;
use crate::result::Result;
use crate::types::{ChainCode, HmacSha512, KEY_SIZE};

/// Fixed nonce of the payload cipher. Each payload key encrypts a single
/// message, so the nonce never repeats under one key.
const NONCE: &[u8; 12] = b"serokellfore";

const PATH_KEY_SALT: &[u8] = b"address-hashing";
const PATH_KEY_ROUNDS: u32 = 500;

/// Per-node payload key: PBKDF2-HMAC-SHA512 over `public key ‖ chain code`.
pub(crate) fn path_key(public_key: &[u8; KEY_SIZE], chain_code: &ChainCode) -> Result<[u8; KEY_SIZE]> {
    let mut password = [0u8; KEY_SIZE * 2];
    password[..KEY_SIZE].copy_from_slice(public_key);
    password[KEY_SIZE..].copy_from_slice(chain_code);
    let mut key = [0u8; KEY_SIZE];
    pbkdf2::pbkdf2::<HmacSha512>(&password, PATH_KEY_SALT, PATH_KEY_ROUNDS, &mut key)?;
    Ok(key)
}

pub(crate) fn encrypt(key: &[u8; KEY_SIZE], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = ChaCha20Poly1305::new(key.into());
    cipher
        .encrypt(Nonce::from_slice(NONCE), plaintext)
        .map_err(|_| Error::custom("payload encryption failed"))
}

pub(crate) fn decrypt(key: &[u8; KEY_SIZE], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let cipher = ChaCha20Poly1305::new(key.into());
    cipher.decrypt(Nonce::from_slice(NONCE), ciphertext).map_err(|_| Error::PayloadAuth)
}

/// Indefinite-length CBOR array of the path's raw child indexes, each
/// written as a minimal-width unsigned integer.
pub(crate) fn encode_path(path: &DerivationPath) -> Vec<u8> {
    let mut out = vec![0x9f];
    for child_number in path.iter() {
        let value = u32::from(child_number);
        match value {
            0x00..=0x17 => out.push(value as u8),
            0x18..=0xff => {
                out.push(0x18);
                out.push(value as u8);
            }
            0x100..=0xffff => {
                out.push(0x19);
                out.extend_from_slice(&(value as u16).to_be_bytes());
            }
            _ => {
                out.push(0x1a);
                out.extend_from_slice(&value.to_be_bytes());
            }
        }
    }
    out.push(0xff);
    out
}

pub(crate) fn decode_path(bytes: &[u8]) -> Result<DerivationPath> {
    if bytes.first() != Some(&0x9f) {
        return Err(Error::DecodeIssue);
    }
    let mut path = DerivationPath::default();
    let mut at = 1;
    loop {
        let header = *bytes.get(at).ok_or(Error::DecodeIssue)?;
        at += 1;
        let value = match header {
            0xff => break,
            0x00..=0x17 => header as u32,
            0x18 => {
                let byte = *bytes.get(at).ok_or(Error::DecodeIssue)?;
                at += 1;
                byte as u32
            }
            0x19 => {
                let word: [u8; 2] = bytes.get(at..at + 2).ok_or(Error::DecodeIssue)?.try_into()?;
                at += 2;
                u16::from_be_bytes(word) as u32
            }
            0x1a => {
                let word: [u8; 4] = bytes.get(at..at + 4).ok_or(Error::DecodeIssue)?.try_into()?;
                at += 4;
                u32::from_be_bytes(word)
            }
            _ => return Err(Error::DecodeIssue),
        };
        path.push(ChildNumber(value));
    }
    if at != bytes.len() {
        return Err(Error::DecodeIssue);
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn hardened_pair_encoding() {
        let path = DerivationPath::from_str("m/0'/1'").unwrap();
        assert_eq!(encode_path(&path), [0x9f, 0x1a, 0x80, 0x00, 0x00, 0x00, 0x1a, 0x80, 0x00, 0x00, 0x01, 0xff]);
    }

    #[test]
    fn integers_take_their_minimal_width() {
        let mut path = DerivationPath::default();
        for index in [0u32, 0x17, 0x18, 0xff, 0x100, 0xffff, 0x10000] {
            path.push(ChildNumber(index));
        }
        let encoded = encode_path(&path);
        assert_eq!(
            encoded,
            [
                0x9f, 0x00, 0x17, 0x18, 0x18, 0x18, 0xff, 0x19, 0x01, 0x00, 0x19, 0xff, 0xff, 0x1a,
                0x00, 0x01, 0x00, 0x00, 0xff
            ]
        );
        assert_eq!(decode_path(&encoded).unwrap(), path);
    }

    #[test]
    fn decode_rejects_foreign_framing() {
        // Definite-length array of the same two integers.
        assert!(decode_path(&[0x82, 0x00, 0x01]).is_err());
        // Truncated before the break byte.
        assert!(decode_path(&[0x9f, 0x1a, 0x80, 0x00]).is_err());
        // Trailing garbage after the break byte.
        assert!(decode_path(&[0x9f, 0x00, 0xff, 0x00]).is_err());
    }

    #[test]
    fn encrypt_then_decrypt() {
        let key = [0x42u8; KEY_SIZE];
        let sealed = encrypt(&key, b"0123456789ab").unwrap();
        assert_eq!(sealed.len(), 12 + 16);
        assert_eq!(decrypt(&key, &sealed).unwrap(), b"0123456789ab");
        let mut tampered = sealed;
        tampered[0] ^= 1;
        assert!(matches!(decrypt(&key, &tampered), Err(Error::PayloadAuth)));
    }
}
