use hdwallet_entropy::ElectrumV1Entropy;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::Error;
use crate::result::Result;
use crate::wordlist::LegacyWordList;

const GROUP_WORDS: usize = 3;
const PHRASE_WORDS: usize = 12;

/// An old-style Electrum phrase: sixteen entropy bytes spread over twelve
/// words through the trilinear recurrence, with no checksum.
#[derive(Clone)]
pub struct ElectrumV1Mnemonic {
    entropy: Vec<u8>,
    phrase: String,
}

impl ElectrumV1Mnemonic {
    pub fn random(words: &LegacyWordList) -> Self {
        Self::random_impl(rand::thread_rng(), words)
    }

    pub fn random_impl(rng: impl RngCore + CryptoRng, words: &LegacyWordList) -> Self {
        Self::from_entropy(&ElectrumV1Entropy::random_impl(rng), words)
    }

    pub fn from_entropy(entropy: &ElectrumV1Entropy, words: &LegacyWordList) -> Self {
        let n = crate::wordlist::LEGACY_WORD_COUNT as u64;
        let mut phrase_words = Vec::with_capacity(PHRASE_WORDS);
        for group in entropy.as_bytes().chunks_exact(4) {
            let x = u32::from_be_bytes([group[0], group[1], group[2], group[3]]) as u64;
            let w1 = x % n;
            let w2 = (x / n + w1) % n;
            let w3 = (x / n / n + w2) % n;
            for index in [w1, w2, w3] {
                phrase_words.push(words.word(index as u32));
            }
        }
        Self { entropy: entropy.as_bytes().to_vec(), phrase: phrase_words.join(" ") }
    }

    /// Decodes a phrase back to its entropy; the recurrence is an exact
    /// inverse so any twelve known words with in-range groups are accepted.
    pub fn new(phrase: &str, words: &LegacyWordList) -> Result<Self> {
        let indices = phrase
            .split_whitespace()
            .map(|word| words.index(word).ok_or(Error::UnknownWord))
            .collect::<Result<Vec<u32>>>()?;
        if indices.len() != PHRASE_WORDS {
            return Err(Error::WordCount(indices.len()));
        }

        let n = crate::wordlist::LEGACY_WORD_COUNT as u64;
        let mut entropy = Vec::with_capacity(16);
        for group in indices.chunks_exact(GROUP_WORDS) {
            let (w1, w2, w3) = (group[0] as u64, group[1] as u64, group[2] as u64);
            let x = w1 + n * ((n + w2 - w1) % n) + n * n * ((n + w3 - w2) % n);
            let x = u32::try_from(x).map_err(|_| Error::WordGroup)?;
            entropy.extend_from_slice(&x.to_be_bytes());
        }

        let phrase = indices.iter().map(|index| words.word(*index)).collect::<Vec<_>>().join(" ");
        Ok(Self { entropy, phrase })
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn entropy(&self) -> &[u8] {
        &self.entropy
    }
}

impl Drop for ElectrumV1Mnemonic {
    fn drop(&mut self) {
        self.entropy.zeroize();
        self.phrase.zeroize();
    }
}
