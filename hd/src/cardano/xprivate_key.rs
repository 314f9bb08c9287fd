use core::str::FromStr;

use hmac::Mac;
use zeroize::{Zeroize, Zeroizing};

use hdwallet_ecc::kholaw::{self, SecretKey, EXTENDED_KEY_SIZE};

use crate::attrs::ExtendedKeyAttrs;
use crate::child_number::ChildNumber;
use crate::derivation_path::DerivationPath;
use crate::error::Error;
use crate::prefix::Prefix;
use crate::result::Result;
use crate::types::{ChainCode, HmacSha256, HmacSha512, Version, KEY_SIZE};

use super::{key_fingerprint, DerivationScheme, XPub};

/// Domain tag keying the Ledger master HMAC chain.
const MASTER_TAG: &[u8] = b"ed25519 seed";

/// PBKDF2 rounds of the Icarus master KDF.
const ICARUS_ROUNDS: u32 = 4096;

/// Cardano extended private key: a Kholaw secret (`kL ‖ kR`) with BIP-32
/// style attributes.
#[derive(Clone)]
pub struct XPrv {
    /// Derived private key
    private_key: SecretKey,

    /// Extended key attributes.
    attrs: ExtendedKeyAttrs,
}

impl XPrv {
    /// Size of the serialized envelope: the BIP-32 layout with a 65-byte
    /// key field (`0x00 ‖ kL ‖ kR`).
    pub const BYTE_SIZE: usize = 110;

    /// Icarus (CIP-3) master key: PBKDF2-HMAC-SHA512 keyed by the
    /// passphrase over the mnemonic entropy, then clamped in place.
    pub fn icarus(entropy: &[u8], passphrase: &str) -> Result<Self> {
        let mut data = Zeroizing::new([0u8; EXTENDED_KEY_SIZE + KEY_SIZE]);
        pbkdf2::pbkdf2::<HmacSha512>(passphrase.as_bytes(), entropy, ICARUS_ROUNDS, &mut data[..])?;
        data[0] &= 0b1111_1000;
        data[31] &= 0b0001_1111;
        data[31] |= 0b0100_0000;
        Ok(Self::from_split_bytes(&data))
    }

    /// Ledger master key: the HMAC of the BIP-39 seed is re-keyed through
    /// itself until bit 5 of byte 31 clears, then clamped. The chain code
    /// comes from the untouched seed under a `0x01` tag.
    pub fn ledger(seed: &[u8]) -> Result<Self> {
        let mut hmac = HmacSha512::new_from_slice(MASTER_TAG)?;
        hmac.update(seed);
        let mut data = hmac.finalize().into_bytes();
        while data[31] & 0b0010_0000 != 0 {
            let mut hmac = HmacSha512::new_from_slice(MASTER_TAG)?;
            hmac.update(&data);
            data = hmac.finalize().into_bytes();
        }

        let mut key_bytes = [0u8; EXTENDED_KEY_SIZE];
        key_bytes.copy_from_slice(&data);
        key_bytes[0] &= 0b1111_1000;
        key_bytes[31] &= 0b0111_1111;
        key_bytes[31] |= 0b0100_0000;
        let private_key = SecretKey::from_bytes(&key_bytes);
        key_bytes.zeroize();

        let mut hmac = HmacSha256::new_from_slice(MASTER_TAG)?;
        hmac.update(&[0x01]);
        hmac.update(seed);
        let mut chain_code = ChainCode::default();
        chain_code.copy_from_slice(&hmac.finalize().into_bytes());

        Ok(Self::new_master(private_key, chain_code))
    }

    /// Restores a key from the 96-byte `kL ‖ kR ‖ chain code` wallet export
    /// encoding. The restored key carries root attributes.
    pub fn from_extended_bytes(bytes: &[u8; EXTENDED_KEY_SIZE + KEY_SIZE]) -> Self {
        Self::from_split_bytes(bytes)
    }

    /// The `kL ‖ kR ‖ chain code` encoding.
    pub fn to_extended_bytes(&self) -> Zeroizing<[u8; EXTENDED_KEY_SIZE + KEY_SIZE]> {
        let mut bytes = Zeroizing::new([0u8; EXTENDED_KEY_SIZE + KEY_SIZE]);
        bytes[..EXTENDED_KEY_SIZE].copy_from_slice(&self.private_key.to_bytes());
        bytes[EXTENDED_KEY_SIZE..].copy_from_slice(&self.attrs.chain_code);
        bytes
    }

    pub(crate) fn new_master(private_key: SecretKey, chain_code: ChainCode) -> Self {
        let attrs = ExtendedKeyAttrs {
            depth: 0,
            parent_fingerprint: Default::default(),
            child_number: ChildNumber::default(),
            chain_code,
        };
        Self { private_key, attrs }
    }

    fn from_split_bytes(bytes: &[u8; EXTENDED_KEY_SIZE + KEY_SIZE]) -> Self {
        let mut key_bytes = [0u8; EXTENDED_KEY_SIZE];
        key_bytes.copy_from_slice(&bytes[..EXTENDED_KEY_SIZE]);
        let mut chain_code = ChainCode::default();
        chain_code.copy_from_slice(&bytes[EXTENDED_KEY_SIZE..]);
        let private_key = SecretKey::from_bytes(&key_bytes);
        key_bytes.zeroize();
        Self::new_master(private_key, chain_code)
    }

    /// Derive a child key for a particular [`ChildNumber`]. Hardened
    /// children commit to both secret halves, soft children to the public
    /// key, so the same index yields unrelated keys in the two ranges.
    pub fn derive_child(&self, child_number: ChildNumber, scheme: DerivationScheme) -> Result<Self> {
        let depth = self.attrs.depth.checked_add(1).ok_or(Error::Depth)?;
        let index_bytes = match scheme {
            DerivationScheme::V1 => u32::from(child_number).to_be_bytes(),
            DerivationScheme::V2 => u32::from(child_number).to_le_bytes(),
        };

        let kl = self.private_key.key_left();
        let kr = self.private_key.key_right();

        let mut z_mac = HmacSha512::new_from_slice(&self.attrs.chain_code)?;
        let mut i_mac = HmacSha512::new_from_slice(&self.attrs.chain_code)?;
        if child_number.is_hardened() {
            z_mac.update(&[0x00]);
            i_mac.update(&[0x01]);
            for mac in [&mut z_mac, &mut i_mac] {
                mac.update(&kl);
                mac.update(&kr);
                mac.update(&index_bytes);
            }
        } else {
            let public_bytes = self.private_key.public_key().to_bytes();
            z_mac.update(&[0x02]);
            i_mac.update(&[0x03]);
            for mac in [&mut z_mac, &mut i_mac] {
                mac.update(&public_bytes);
                mac.update(&index_bytes);
            }
        }
        let z = z_mac.finalize().into_bytes();
        let i = i_mac.finalize().into_bytes();

        let mut z_left = [0u8; KEY_SIZE];
        z_left.copy_from_slice(&z[..KEY_SIZE]);
        let mut z_right = [0u8; KEY_SIZE];
        z_right.copy_from_slice(&z[KEY_SIZE..]);

        let (child_kl, child_kr) = match scheme {
            DerivationScheme::V1 => {
                (kholaw::add_28_mul8_v1(&kl, &z_left), kholaw::add_256bits_v1(&kr, &z_right))
            }
            DerivationScheme::V2 => {
                (kholaw::add_28_mul8(&kl, &z_left), kholaw::add_256bits(&kr, &z_right))
            }
        };

        let mut key_bytes = [0u8; EXTENDED_KEY_SIZE];
        key_bytes[..KEY_SIZE].copy_from_slice(&child_kl);
        key_bytes[KEY_SIZE..].copy_from_slice(&child_kr);
        let private_key = SecretKey::from_bytes(&key_bytes);
        key_bytes.zeroize();

        let mut chain_code = ChainCode::default();
        chain_code.copy_from_slice(&i[KEY_SIZE..]);

        let attrs = ExtendedKeyAttrs {
            parent_fingerprint: key_fingerprint(&self.private_key.public_key()),
            child_number,
            chain_code,
            depth,
        };

        Ok(Self { private_key, attrs })
    }

    /// Derive a child key from a given path, applying `scheme` at every
    /// step.
    pub fn derive_path(self, path: &DerivationPath, scheme: DerivationScheme) -> Result<Self> {
        path.iter().try_fold(self, |key, child_number| key.derive_child(child_number, scheme))
    }

    /// Borrow the derived private key value.
    pub fn private_key(&self) -> &SecretKey {
        &self.private_key
    }

    /// Serialize the raw private key value for this extended private key.
    pub fn to_bytes(&self) -> [u8; EXTENDED_KEY_SIZE] {
        self.private_key.to_bytes()
    }

    /// Obtain the extended public key for this extended private key.
    pub fn public_key(&self) -> XPub {
        XPub::from_public_key(self.private_key.public_key(), &self.attrs)
    }

    /// Get attributes for this key such as depth, parent fingerprint,
    /// child number, and chain code.
    pub fn attrs(&self) -> &ExtendedKeyAttrs {
        &self.attrs
    }

    /// Serialize this key as a self-zeroizing Base58Check string.
    pub fn to_string(&self, prefix: Prefix) -> Zeroizing<String> {
        let mut body = Zeroizing::new([0u8; Self::BYTE_SIZE]);
        body[..4].copy_from_slice(&prefix.to_bytes());
        body[4] = self.attrs.depth;
        body[5..9].copy_from_slice(&self.attrs.parent_fingerprint);
        body[9..13].copy_from_slice(&self.attrs.child_number.to_bytes());
        body[13..45].copy_from_slice(&self.attrs.chain_code);
        body[45] = 0;
        body[46..].copy_from_slice(&self.private_key.to_bytes());
        Zeroizing::new(bs58::encode(&body[..]).with_check().into_string())
    }
}

impl FromStr for XPrv {
    type Err = Error;

    fn from_str(base58: &str) -> Result<Self> {
        let mut bytes = [0u8; Self::BYTE_SIZE + 4]; // with 4-byte checksum
        let decoded_len = bs58::decode(base58).with_check(None).onto(&mut bytes)?;

        if decoded_len != Self::BYTE_SIZE {
            bytes.zeroize();
            return Err(Error::DecodeLength(decoded_len, Self::BYTE_SIZE));
        }

        let version = Version::from_be_bytes(bytes[..4].try_into()?);
        let prefix = Prefix::try_from(version)?;
        if !prefix.is_private() || bytes[45] != 0 {
            bytes.zeroize();
            return Err(Error::DecodeIssue);
        }

        let depth = bytes[4];
        let parent_fingerprint = bytes[5..9].try_into()?;
        let child_number = ChildNumber::from_bytes(bytes[9..13].try_into()?);
        let chain_code = bytes[13..45].try_into()?;
        let mut key_bytes = [0u8; EXTENDED_KEY_SIZE];
        key_bytes.copy_from_slice(&bytes[46..Self::BYTE_SIZE]);
        let private_key = SecretKey::from_bytes(&key_bytes);
        key_bytes.zeroize();
        bytes.zeroize();

        let attrs = ExtendedKeyAttrs { depth, parent_fingerprint, child_number, chain_code };

        Ok(Self { private_key, attrs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icarus_clamp_invariants() {
        let root = XPrv::icarus(&[0u8; 32], "").unwrap();
        let kl = root.private_key().key_left();
        assert_eq!(kl[0] & 0b0000_0111, 0);
        assert_eq!(kl[31] & 0b1110_0000, 0b0100_0000);
    }

    #[test]
    fn envelope_string_round_trip() {
        let root = XPrv::icarus(&[0u8; 32], "").unwrap();
        let base58 = root.to_string(Prefix::XPRV);
        let parsed = base58.parse::<XPrv>().unwrap();
        assert_eq!(parsed.to_bytes(), root.to_bytes());
        assert_eq!(parsed.attrs().chain_code, root.attrs().chain_code);
    }

    #[test]
    fn extended_bytes_round_trip() {
        let root = XPrv::icarus(&[0u8; 32], "").unwrap();
        let restored = XPrv::from_extended_bytes(&root.to_extended_bytes());
        assert_eq!(restored.to_bytes(), root.to_bytes());
    }

    #[test]
    fn depth_increments_per_step() {
        let root = XPrv::icarus(&[0u8; 32], "").unwrap();
        let child = root
            .derive_child(ChildNumber::new(0, true).unwrap(), DerivationScheme::V2)
            .unwrap();
        assert_eq!(child.attrs().depth, 1);
        assert_eq!(child.attrs().parent_fingerprint, key_fingerprint(&root.private_key().public_key()));
    }
}
