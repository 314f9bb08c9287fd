use borsh::{BorshDeserialize, BorshSerialize};
use hdwallet_entropy::Bip39Entropy;
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroize;

use crate::bits::{BitWriter, IterExt};
use crate::error::Error;
use crate::language::Language;
use crate::result::Result;

#[derive(Default, Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordCount {
    #[default]
    Twelve,
    Fifteen,
    Eighteen,
    TwentyOne,
    TwentyFour,
}

impl WordCount {
    pub fn word_count(&self) -> usize {
        match self {
            WordCount::Twelve => 12,
            WordCount::Fifteen => 15,
            WordCount::Eighteen => 18,
            WordCount::TwentyOne => 21,
            WordCount::TwentyFour => 24,
        }
    }

    /// Entropy strength in bits: 32 bits for every three words.
    pub fn strength(&self) -> usize {
        self.word_count() / 3 * 32
    }
}

impl TryFrom<usize> for WordCount {
    type Error = Error;

    fn try_from(word_count: usize) -> Result<Self> {
        match word_count {
            12 => Ok(WordCount::Twelve),
            15 => Ok(WordCount::Fifteen),
            18 => Ok(WordCount::Eighteen),
            21 => Ok(WordCount::TwentyOne),
            24 => Ok(WordCount::TwentyFour),
            _ => Err(Error::WordCount(word_count)),
        }
    }
}

/// A BIP-39 phrase bound to its source entropy and language.
#[derive(Clone)]
pub struct Bip39Mnemonic {
    language: Language,
    entropy: Vec<u8>,
    phrase: String,
}

impl Bip39Mnemonic {
    pub fn random(word_count: WordCount, language: Language) -> Result<Self> {
        Self::random_impl(word_count, rand::thread_rng(), language)
    }

    pub fn random_impl(word_count: WordCount, rng: impl RngCore + CryptoRng, language: Language) -> Result<Self> {
        let entropy = Bip39Entropy::random_impl(word_count.strength(), rng)?;
        Ok(Self::from_entropy(&entropy, language))
    }

    pub fn from_entropy(entropy: &Bip39Entropy, language: Language) -> Self {
        let wordlist = language.wordlist();
        let checksum_byte = build_checksum(entropy.as_bytes());
        let phrase = entropy
            .as_bytes()
            .iter()
            .chain(Some(&checksum_byte))
            .bits()
            .map(|bits| wordlist.get_word(bits))
            .join(" ");
        Self { language, entropy: entropy.as_bytes().to_vec(), phrase }
    }

    /// Parses and validates a phrase: known words, a supported word count and
    /// a matching checksum.
    pub fn new(phrase: impl Into<String>, language: Language) -> Result<Self> {
        let mut raw: String = phrase.into();
        let normalized: String = raw.nfkd().collect();
        raw.zeroize();
        let words: Vec<&str> = normalized.split_whitespace().collect();
        let word_count = WordCount::try_from(words.len())?;

        let wordmap = language.wordmap();
        let mut writer = BitWriter::with_capacity(264);
        for word in &words {
            writer.push(wordmap.get_bits(word).ok_or(Error::UnknownWord)?);
        }
        let bytes = writer.into_bytes();
        let (entropy, checksum) = bytes.split_at(word_count.strength() / 8);

        let actual_checksum = checksum[0];
        let expected_checksum = build_checksum(entropy);
        if actual_checksum != expected_checksum {
            return Err(Error::String(format!(
                "BIP39: actual checksum({actual_checksum}) != expected checksum({expected_checksum})"
            )));
        }

        Ok(Self { language, entropy: entropy.to_vec(), phrase: words.join(" ") })
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn entropy(&self) -> &[u8] {
        &self.entropy
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn word_count(&self) -> usize {
        self.phrase.split(' ').count()
    }
}

impl Drop for Bip39Mnemonic {
    fn drop(&mut self) {
        self.entropy.zeroize();
        self.phrase.zeroize();
    }
}

/// The leading ENT/32 bits of SHA-256 over the entropy, left-aligned in a
/// byte with the unused low bits cleared.
fn build_checksum(entropy: &[u8]) -> u8 {
    let checksum_bits = entropy.len() / 4;
    let mask = 0xffu8 << (8 - checksum_bits);
    Sha256::digest(entropy)[0] & mask
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

    #[test]
    fn reference_phrases_round_trip() {
        let data = [
            ["00000000000000000000000000000000", "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"],
            ["7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f", "legal winner thank year wave sausage worth useful legal winner thank yellow"],
            ["80808080808080808080808080808080", "letter advice cage absurd amount doctor acoustic avoid letter advice cage above"],
            ["ffffffffffffffffffffffffffffffff", "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong"],
            [
                "0000000000000000000000000000000000000000000000000000000000000000",
                "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
            ],
            [
                "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
                "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote",
            ],
        ];
        for [entropy_hex, phrase] in data {
            let entropy = Bip39Entropy::from_bytes(hex!(entropy_hex)).unwrap();
            let mnemonic = Bip39Mnemonic::from_entropy(&entropy, Language::English);
            assert_eq!(mnemonic.phrase(), phrase);

            let parsed = Bip39Mnemonic::new(phrase, Language::English).unwrap();
            assert_eq!(parsed.entropy(), &hex!(entropy_hex)[..]);
        }
    }

    #[test]
    fn all_word_counts_round_trip() {
        for word_count in [WordCount::Twelve, WordCount::Fifteen, WordCount::Eighteen, WordCount::TwentyOne, WordCount::TwentyFour] {
            let mnemonic = Bip39Mnemonic::random(word_count, Language::English).unwrap();
            assert_eq!(mnemonic.word_count(), word_count.word_count());
            let parsed = Bip39Mnemonic::new(mnemonic.phrase(), Language::English).unwrap();
            assert_eq!(parsed.entropy(), mnemonic.entropy());
        }
    }

    #[test]
    fn bad_phrases_are_rejected() {
        // Twelve copies of the first word carry a wrong checksum.
        let twelve_abandon = ["abandon"; 12].join(" ");
        assert!(matches!(Bip39Mnemonic::new(twelve_abandon, Language::English), Err(Error::String(_))));

        let thirteen = ["abandon"; 13].join(" ");
        assert!(matches!(Bip39Mnemonic::new(thirteen, Language::English), Err(Error::WordCount(13))));

        let unknown = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon zzz";
        assert!(matches!(Bip39Mnemonic::new(unknown, Language::English), Err(Error::UnknownWord)));
    }
}
