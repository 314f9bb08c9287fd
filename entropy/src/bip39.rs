use std::fmt;

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::Error;
use crate::result::Result;

/// Raw entropy behind a BIP-39 phrase: 128 to 256 bits in 32-bit steps,
/// mapping to the 12 / 15 / 18 / 21 / 24 word counts.
#[derive(Clone)]
pub struct Bip39Entropy {
    bytes: Vec<u8>,
}

impl Bip39Entropy {
    pub const STRENGTHS: &'static [usize] = &[128, 160, 192, 224, 256];

    pub fn random(strength: usize) -> Result<Self> {
        Self::random_impl(strength, rand::thread_rng())
    }

    pub fn random_impl(strength: usize, mut rng: impl RngCore + CryptoRng) -> Result<Self> {
        if !Self::STRENGTHS.contains(&strength) {
            return Err(Error::Strength(strength));
        }
        let mut bytes = vec![0u8; strength / 8];
        rng.fill_bytes(&mut bytes);
        Ok(Self { bytes })
    }

    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = bytes.as_ref();
        if !Self::STRENGTHS.contains(&(bytes.len() * 8)) {
            return Err(Error::Length(bytes.len()));
        }
        Ok(Self { bytes: bytes.to_vec() })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Bip39Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Bip39Entropy").field(&"...").finish()
    }
}

impl Drop for Bip39Entropy {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}
