use std::fmt;

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::Error;
use crate::result::Result;

/// Starting point for the Electrum V2 phrase search: a big-endian integer of
/// 132 or 264 bits. The codec bumps this integer until the encoded phrase
/// carries the wanted version prefix, so the container pins the top bit of
/// the strength range to keep the word count stable across bumps.
#[derive(Clone)]
pub struct ElectrumV2Entropy {
    bytes: Vec<u8>,
}

impl ElectrumV2Entropy {
    pub const STRENGTHS: &'static [usize] = &[132, 264];

    pub fn random(strength: usize) -> Result<Self> {
        Self::random_impl(strength, rand::thread_rng())
    }

    pub fn random_impl(strength: usize, mut rng: impl RngCore + CryptoRng) -> Result<Self> {
        if !Self::STRENGTHS.contains(&strength) {
            return Err(Error::Strength(strength));
        }
        let mut bytes = vec![0u8; strength.div_ceil(8)];
        rng.fill_bytes(&mut bytes);
        // Clear the bits above `strength`, then set bit `strength - 1`.
        let excess = bytes.len() * 8 - strength;
        bytes[0] &= 0xff >> excess;
        bytes[0] |= 1 << ((strength - 1) % 8);
        Ok(Self { bytes })
    }

    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = bytes.as_ref();
        match bytes.len() {
            17 | 33 => Ok(Self { bytes: bytes.to_vec() }),
            len => Err(Error::Length(len)),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for ElectrumV2Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ElectrumV2Entropy").field(&"...").finish()
    }
}

impl Drop for ElectrumV2Entropy {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_bits_are_masked() {
        let entropy = ElectrumV2Entropy::random(132).unwrap();
        assert_eq!(entropy.as_bytes().len(), 17);
        assert_eq!(entropy.as_bytes()[0] & 0xf0, 0);
        assert_eq!(entropy.as_bytes()[0] & 0x08, 0x08);

        let entropy = ElectrumV2Entropy::random(264).unwrap();
        assert_eq!(entropy.as_bytes().len(), 33);
        assert_eq!(entropy.as_bytes()[0] & 0x80, 0x80);

        assert_eq!(ElectrumV2Entropy::random(128).unwrap_err(), Error::Strength(128));
        assert_eq!(ElectrumV2Entropy::from_bytes([0u8; 16]).unwrap_err(), Error::Length(16));
        assert!(ElectrumV2Entropy::from_bytes([0u8; 17]).is_ok());
    }
}
