//! Wallet Import Format for raw secp256k1 private keys.

use crate::{Error, Result};
use zeroize::{Zeroize, Zeroizing};

/// Mainnet WIF version byte.
pub const MAINNET: u8 = 0x80;

/// Testnet WIF version byte.
pub const TESTNET: u8 = 0xEF;

/// Encode a private key as `version ‖ key ‖ optional 0x01 compressed flag`,
/// Base58Check wrapped.
pub fn encode(version: u8, private_key: &secp256k1::SecretKey, compressed: bool) -> Zeroizing<String> {
    let mut payload = [0u8; 34];
    payload[0] = version;
    payload[1..33].copy_from_slice(&private_key.secret_bytes());

    let len = if compressed {
        payload[33] = 1;
        34
    } else {
        33
    };

    let encoded = bs58::encode(&payload[..len]).with_check().into_string();
    payload.zeroize();

    Zeroizing::new(encoded)
}

/// Decode a WIF string into its version byte, private key and compressed
/// flag. The flag byte, when present, must be exactly 0x01.
pub fn decode(wif: &str) -> Result<(u8, secp256k1::SecretKey, bool)> {
    let bytes = Zeroizing::new(bs58::decode(wif).with_check(None).into_vec()?);

    let compressed = match bytes.len() {
        33 => false,
        34 if bytes[33] == 1 => true,
        34 => return Err(Error::DecodeIssue),
        len => return Err(Error::DecodeLength(len, 34)),
    };

    let private_key = secp256k1::SecretKey::from_slice(&bytes[1..33])?;

    Ok((bytes[0], private_key, compressed))
}

#[cfg(test)]
mod tests {
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

    const KEY: &str = "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d";

    fn key(hex: &str) -> secp256k1::SecretKey {
        secp256k1::SecretKey::from_slice(&hex!(hex)).unwrap()
    }

    #[test]
    fn reference_strings() {
        let data = [
            (KEY, MAINNET, false, "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ"),
            (KEY, MAINNET, true, "KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617"),
            (KEY, TESTNET, true, "cMzLdeGd5vEqxB8B6VFQoRopQ3sLAAvEzDAoQgvX54xwofSWj1fx"),
            ("0000000000000000000000000000000000000000000000000000000000000001", MAINNET, true, "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn"),
        ];

        for (secret, version, compressed, wif) in data {
            assert_eq!(encode(version, &key(secret), compressed).as_str(), wif);

            let (decoded_version, decoded_key, decoded_compressed) = decode(wif).unwrap();
            assert_eq!(decoded_version, version);
            assert_eq!(decoded_key, key(secret));
            assert_eq!(decoded_compressed, compressed);
        }
    }

    #[test]
    fn flag_byte_must_be_one() {
        let mut payload = vec![MAINNET];
        payload.extend_from_slice(&hex!(KEY));
        payload.push(0x02);
        let wif = bs58::encode(&payload).with_check().into_string();
        assert!(matches!(decode(&wif), Err(Error::DecodeIssue)));
    }

    #[test]
    fn length_is_validated() {
        let payload = [MAINNET; 20];
        let wif = bs58::encode(&payload).with_check().into_string();
        assert!(matches!(decode(&wif), Err(Error::DecodeLength(20, 34))));
    }

    #[test]
    fn checksum_is_validated() {
        assert!(matches!(
            decode("5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTk"),
            Err(Error::Base58Decode(_))
        ));
    }
}
