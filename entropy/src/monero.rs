use std::fmt;

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::Error;
use crate::result::Result;

/// Raw entropy behind a Monero phrase: 128 bits for the short 13-word form
/// or 256 bits for the full 25-word form.
#[derive(Clone)]
pub struct MoneroEntropy {
    bytes: Vec<u8>,
}

impl MoneroEntropy {
    pub const STRENGTHS: &'static [usize] = &[128, 256];

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

impl fmt::Debug for MoneroEntropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MoneroEntropy").field(&"...").finish()
    }
}

impl Drop for MoneroEntropy {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}
