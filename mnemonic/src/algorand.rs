use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha512_256};
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroize;

use hdwallet_entropy::AlgorandEntropy;

use crate::bits::Bits11;
use crate::error::Error;
use crate::language::Language;
use crate::result::Result;

const PHRASE_WORDS: usize = 25;
const DATA_WORDS: usize = 24;

/// An Algorand 25-word phrase: 256 bits of entropy packed into 11-bit
/// words least-significant bit first, followed by one checksum word drawn
/// from SHA-512/256 of the entropy.
#[derive(Clone)]
pub struct AlgorandMnemonic {
    language: Language,
    entropy: Vec<u8>,
    phrase: String,
}

impl AlgorandMnemonic {
    pub fn random(language: Language) -> Self {
        Self::random_impl(rand::thread_rng(), language)
    }

    pub fn random_impl(rng: impl RngCore + CryptoRng, language: Language) -> Self {
        Self::from_entropy(&AlgorandEntropy::random_impl(rng), language)
    }

    pub fn from_entropy(entropy: &AlgorandEntropy, language: Language) -> Self {
        let wordlist = language.wordlist();
        let mut indices = pack_indices(entropy.as_bytes());
        indices.push(checksum_index(entropy.as_bytes()));
        let phrase = indices.iter().map(|index| wordlist.get_word(Bits11::new(*index))).collect::<Vec<_>>().join(" ");
        Self { language, entropy: entropy.as_bytes().to_vec(), phrase }
    }

    pub fn new(phrase: impl Into<String>, language: Language) -> Result<Self> {
        let mut raw: String = phrase.into();
        let normalized: String = raw.nfkd().collect();
        raw.zeroize();
        let words: Vec<&str> = normalized.split_whitespace().collect();
        if words.len() != PHRASE_WORDS {
            return Err(Error::WordCount(words.len()));
        }

        let wordmap = language.wordmap();
        let mut indices = Vec::with_capacity(PHRASE_WORDS);
        for word in words.iter() {
            indices.push(wordmap.get_bits(word).ok_or(Error::UnknownWord)?.bits());
        }

        // 24 data words unpack to 33 bytes; the final byte holds nothing but
        // the zero padding of the last word.
        let mut entropy = unpack_indices(&indices[..DATA_WORDS]);
        if entropy[32] != 0 {
            return Err(Error::WordGroup);
        }
        entropy.truncate(32);
        if indices[DATA_WORDS] != checksum_index(&entropy) {
            return Err(Error::Checksum);
        }

        let phrase = words.join(" ");
        Ok(Self { language, entropy, phrase })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn entropy(&self) -> &[u8] {
        &self.entropy
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }
}

impl Drop for AlgorandMnemonic {
    fn drop(&mut self) {
        self.entropy.zeroize();
        self.phrase.zeroize();
    }
}

fn pack_indices(entropy: &[u8]) -> Vec<u16> {
    let mut indices = Vec::with_capacity(DATA_WORDS);
    let mut acc: u32 = 0;
    let mut bits = 0usize;
    for byte in entropy.iter() {
        acc |= (*byte as u32) << bits;
        bits += 8;
        while bits >= 11 {
            indices.push((acc & 0x7ff) as u16);
            acc >>= 11;
            bits -= 11;
        }
    }
    if bits > 0 {
        indices.push((acc & 0x7ff) as u16);
    }
    indices
}

fn unpack_indices(indices: &[u16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(indices.len() * 11 / 8 + 1);
    let mut acc: u32 = 0;
    let mut bits = 0usize;
    for index in indices.iter() {
        acc |= (*index as u32) << bits;
        bits += 11;
        while bits >= 8 {
            bytes.push(acc as u8);
            acc >>= 8;
            bits -= 8;
        }
    }
    bytes
}

fn checksum_index(entropy: &[u8]) -> u16 {
    let digest = Sha512_256::digest(entropy);
    u16::from_le_bytes([digest[0], digest[1]]) & 0x7ff
}
