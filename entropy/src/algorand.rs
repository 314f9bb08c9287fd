use std::fmt;

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::Error;
use crate::result::Result;

/// Raw entropy behind an Algorand 25-word phrase: always 256 bits.
#[derive(Clone)]
pub struct AlgorandEntropy {
    bytes: Vec<u8>,
}

impl AlgorandEntropy {
    pub const STRENGTHS: &'static [usize] = &[256];

    pub fn random() -> Self {
        Self::random_impl(rand::thread_rng())
    }

    pub fn random_impl(mut rng: impl RngCore + CryptoRng) -> Self {
        let mut bytes = vec![0u8; 32];
        rng.fill_bytes(&mut bytes);
        Self { bytes }
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

impl fmt::Debug for AlgorandEntropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AlgorandEntropy").field(&"...").finish()
    }
}

impl Drop for AlgorandEntropy {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_thirty_two_bytes_are_accepted() {
        assert_eq!(AlgorandEntropy::random().as_bytes().len(), 32);
        assert!(AlgorandEntropy::from_bytes([0u8; 32]).is_ok());
        assert_eq!(AlgorandEntropy::from_bytes([0u8; 16]).unwrap_err(), Error::Length(16));
    }
}
