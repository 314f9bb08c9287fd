use borsh::{BorshDeserialize, BorshSerialize};
use hdwallet_entropy::ElectrumV2Entropy;
use hmac::{Hmac, Mac};
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroize;

use crate::bip39::Bip39Mnemonic;
use crate::bits::Bits11;
use crate::error::Error;
use crate::language::Language;
use crate::result::Result;

type HmacSha512 = Hmac<Sha512>;

const SEED_VERSION_KEY: &[u8] = b"Seed version";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElectrumV2MnemonicType {
    Standard,
    Segwit,
    TwoFactor,
    TwoFactorSegwit,
}

impl ElectrumV2MnemonicType {
    /// Hex prefix of HMAC-SHA512(b"Seed version", phrase) selecting the type.
    pub fn prefix(&self) -> &'static str {
        match self {
            ElectrumV2MnemonicType::Standard => "01",
            ElectrumV2MnemonicType::Segwit => "100",
            ElectrumV2MnemonicType::TwoFactor => "101",
            ElectrumV2MnemonicType::TwoFactorSegwit => "102",
        }
    }

    fn classify(digest: &[u8]) -> Option<Self> {
        let hex = format!("{:02x}{:02x}", digest[0], digest[1]);
        [
            ElectrumV2MnemonicType::Standard,
            ElectrumV2MnemonicType::Segwit,
            ElectrumV2MnemonicType::TwoFactor,
            ElectrumV2MnemonicType::TwoFactorSegwit,
        ]
        .into_iter()
        .find(|mnemonic_type| hex.starts_with(mnemonic_type.prefix()))
    }
}

/// An Electrum V2 phrase: the positional base-2048 rendering of an integer,
/// least-significant word first, self-certified by the version prefix of its
/// keyed hash rather than by a wordlist checksum.
#[derive(Clone)]
pub struct ElectrumV2Mnemonic {
    mnemonic_type: ElectrumV2MnemonicType,
    language: Language,
    entropy: Vec<u8>,
    phrase: String,
}

impl ElectrumV2Mnemonic {
    pub fn random(strength: usize, mnemonic_type: ElectrumV2MnemonicType, language: Language) -> Result<Self> {
        Self::random_impl(strength, rand::thread_rng(), mnemonic_type, language)
    }

    pub fn random_impl(
        strength: usize,
        rng: impl RngCore + CryptoRng,
        mnemonic_type: ElectrumV2MnemonicType,
        language: Language,
    ) -> Result<Self> {
        let entropy = ElectrumV2Entropy::random_impl(strength, rng)?;
        Self::from_entropy(&entropy, mnemonic_type, language)
    }

    /// Runs the Electrum search loop: starting from the entropy integer, bump
    /// by one until the encoded phrase carries the wanted version prefix and
    /// does not double as a valid BIP-39 phrase.
    pub fn from_entropy(
        entropy: &ElectrumV2Entropy,
        mnemonic_type: ElectrumV2MnemonicType,
        language: Language,
    ) -> Result<Self> {
        let mut scratch = entropy.as_bytes().to_vec();
        loop {
            let phrase = encode(&scratch, language);
            if Bip39Mnemonic::new(phrase.as_str(), language).is_err()
                && seed_version_type(&phrase)? == Some(mnemonic_type)
            {
                return Ok(Self { mnemonic_type, language, entropy: scratch, phrase });
            }
            increment(&mut scratch);
        }
    }

    /// Parses a phrase, recovering its integer and classifying its version
    /// prefix; phrases with an unknown prefix are rejected.
    pub fn new(phrase: impl Into<String>, language: Language) -> Result<Self> {
        let mut raw: String = phrase.into();
        let normalized: String = raw.nfkd().collect();
        raw.zeroize();
        let words: Vec<&str> = normalized.split_whitespace().collect();
        let phrase = words.join(" ");

        let wordmap = language.wordmap();
        let mut entropy: Vec<u8> = Vec::new();
        for word in words.iter().rev() {
            let bits = wordmap.get_bits(word).ok_or(Error::UnknownWord)?;
            mul_add(&mut entropy, 2048, bits.bits() as u32);
        }

        let mnemonic_type = seed_version_type(&phrase)?.ok_or(Error::SeedVersion)?;
        Ok(Self { mnemonic_type, language, entropy, phrase })
    }

    pub fn mnemonic_type(&self) -> ElectrumV2MnemonicType {
        self.mnemonic_type
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Big-endian bytes of the phrase integer. The width is not canonical:
    /// the search keeps its container width, parsing yields minimal bytes.
    pub fn entropy(&self) -> &[u8] {
        &self.entropy
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }
}

impl Drop for ElectrumV2Mnemonic {
    fn drop(&mut self) {
        self.entropy.zeroize();
        self.phrase.zeroize();
    }
}

fn seed_version_type(phrase: &str) -> Result<Option<ElectrumV2MnemonicType>> {
    let normalized: String = phrase.nfkd().collect();
    let mut mac = HmacSha512::new_from_slice(SEED_VERSION_KEY)?;
    mac.update(normalized.as_bytes());
    let digest = mac.finalize().into_bytes();
    Ok(ElectrumV2MnemonicType::classify(&digest))
}

/// Renders the big-endian integer as words, least-significant first.
fn encode(entropy: &[u8], language: Language) -> String {
    let wordlist = language.wordlist();
    let mut scratch = entropy.to_vec();
    trim_leading_zeros(&mut scratch);
    let mut words = Vec::new();
    while !scratch.is_empty() {
        let index = div_rem_2048(&mut scratch);
        words.push(wordlist.get_word(Bits11::new(index)));
    }
    words.join(" ")
}

fn div_rem_2048(bytes: &mut Vec<u8>) -> u16 {
    let mut rem: u32 = 0;
    for byte in bytes.iter_mut() {
        let acc = (rem << 8) | *byte as u32;
        *byte = (acc >> 11) as u8;
        rem = acc & 0x7ff;
    }
    trim_leading_zeros(bytes);
    rem as u16
}

fn mul_add(bytes: &mut Vec<u8>, mul: u32, add: u32) {
    let mut carry = add as u64;
    for byte in bytes.iter_mut().rev() {
        let acc = *byte as u64 * mul as u64 + carry;
        *byte = acc as u8;
        carry = acc >> 8;
    }
    while carry > 0 {
        bytes.insert(0, carry as u8);
        carry >>= 8;
    }
}

fn increment(bytes: &mut Vec<u8>) {
    mul_add(bytes, 1, 1);
}

fn trim_leading_zeros(bytes: &mut Vec<u8>) {
    while bytes.first() == Some(&0) {
        bytes.remove(0);
    }
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

    const STANDARD_PHRASE: &str = "salad quality shadow filter educate scare wash pumpkin forward harvest sport apart";
    const SEGWIT_PHRASE: &str = "swamp quantum shadow filter educate scare wash pumpkin forward harvest sport apart";

    #[test]
    fn search_loop_finds_the_certified_phrases() {
        let start = ElectrumV2Entropy::from_bytes(hex!("00a5a55a5adeadbeef0123456789abcdef")).unwrap();

        let standard =
            ElectrumV2Mnemonic::from_entropy(&start, ElectrumV2MnemonicType::Standard, Language::English).unwrap();
        assert_eq!(standard.phrase(), STANDARD_PHRASE);
        assert_eq!(standard.entropy(), &hex!("00a5a55a5adeadbeef0123456789abcdf2")[..]);

        let segwit =
            ElectrumV2Mnemonic::from_entropy(&start, ElectrumV2MnemonicType::Segwit, Language::English).unwrap();
        assert_eq!(segwit.phrase(), SEGWIT_PHRASE);
        assert_eq!(segwit.entropy(), &hex!("00a5a55a5adeadbeef0123456789abd6d9")[..]);
    }

    #[test]
    fn parsing_recovers_type_and_integer() {
        let standard = ElectrumV2Mnemonic::new(STANDARD_PHRASE, Language::English).unwrap();
        assert_eq!(standard.mnemonic_type(), ElectrumV2MnemonicType::Standard);
        assert_eq!(standard.entropy(), &hex!("a5a55a5adeadbeef0123456789abcdf2")[..]);

        let segwit = ElectrumV2Mnemonic::new(SEGWIT_PHRASE, Language::English).unwrap();
        assert_eq!(segwit.mnemonic_type(), ElectrumV2MnemonicType::Segwit);
    }

    #[test]
    fn bip39_phrases_fail_the_version_check() {
        // A valid BIP-39 phrase is (overwhelmingly) not a valid V2 phrase.
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
        assert!(matches!(ElectrumV2Mnemonic::new(phrase, Language::English), Err(Error::SeedVersion)));
    }

    #[test]
    fn unknown_words_are_rejected() {
        assert!(matches!(ElectrumV2Mnemonic::new("zzz zzz", Language::English), Err(Error::UnknownWord)));
    }
}
