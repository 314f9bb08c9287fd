use std::fmt;

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::Error;
use crate::result::Result;

/// Raw entropy behind an old-style Electrum phrase: always 128 bits, encoded
/// as twelve words with no checksum.
#[derive(Clone)]
pub struct ElectrumV1Entropy {
    bytes: Vec<u8>,
}

impl ElectrumV1Entropy {
    pub const STRENGTHS: &'static [usize] = &[128];

    pub fn random() -> Self {
        Self::random_impl(rand::thread_rng())
    }

    pub fn random_impl(mut rng: impl RngCore + CryptoRng) -> Self {
        let mut bytes = vec![0u8; 16];
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

impl fmt::Debug for ElectrumV1Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ElectrumV1Entropy").field(&"...").finish()
    }
}

impl Drop for ElectrumV1Entropy {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_sixteen_bytes_are_accepted() {
        assert_eq!(ElectrumV1Entropy::random().as_bytes().len(), 16);
        assert!(ElectrumV1Entropy::from_bytes([0u8; 16]).is_ok());
        assert_eq!(ElectrumV1Entropy::from_bytes([0u8; 32]).unwrap_err(), Error::Length(32));
    }
}
