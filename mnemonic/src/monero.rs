use hdwallet_entropy::MoneroEntropy;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::Error;
use crate::result::Result;
use crate::wordlist::{LegacyWordList, LEGACY_WORD_COUNT};

/// A Monero phrase: four-byte little-endian groups spread over word triplets
/// through the trilinear recurrence, optionally sealed with a checksum word.
///
/// The checksum word repeats the data word at position
/// `crc32(prefixes) % data_word_count`, where the CRC runs over the
/// concatenated unique prefixes of every data word.
#[derive(Clone)]
pub struct MoneroMnemonic {
    entropy: Vec<u8>,
    phrase: String,
}

impl MoneroMnemonic {
    pub fn random(strength: usize, words: &LegacyWordList) -> Result<Self> {
        Self::random_impl(strength, rand::thread_rng(), words)
    }

    pub fn random_impl(strength: usize, rng: impl RngCore + CryptoRng, words: &LegacyWordList) -> Result<Self> {
        Ok(Self::from_entropy(&MoneroEntropy::random_impl(strength, rng)?, words))
    }

    pub fn from_entropy(entropy: &MoneroEntropy, words: &LegacyWordList) -> Self {
        let n = LEGACY_WORD_COUNT as u64;
        let mut data_words = Vec::with_capacity(25);
        for group in entropy.as_bytes().chunks_exact(4) {
            let x = u32::from_le_bytes([group[0], group[1], group[2], group[3]]) as u64;
            let w1 = x % n;
            let w2 = (x / n + w1) % n;
            let w3 = (x / n / n + w2) % n;
            for index in [w1, w2, w3] {
                data_words.push(words.word(index as u32));
            }
        }
        let position = checksum_position(&data_words, words);
        data_words.push(data_words[position]);
        Self { entropy: entropy.as_bytes().to_vec(), phrase: data_words.join(" ") }
    }

    /// Accepts 12 or 24 bare data words, or 13 / 25 words where the last one
    /// is the checksum.
    pub fn new(phrase: &str, words: &LegacyWordList) -> Result<Self> {
        let phrase_words: Vec<&str> = phrase.split_whitespace().collect();
        let (data_words, checksum_word) = match phrase_words.len() {
            12 | 24 => (&phrase_words[..], None),
            13 | 25 => {
                let (last, data) = phrase_words.split_last().ok_or(Error::WordCount(0))?;
                (data, Some(*last))
            }
            count => return Err(Error::WordCount(count)),
        };

        let indices = data_words
            .iter()
            .map(|word| words.index(word).ok_or(Error::UnknownWord))
            .collect::<Result<Vec<u32>>>()?;

        if let Some(checksum_word) = checksum_word {
            let position = checksum_position(data_words, words);
            if words.prefix(checksum_word) != words.prefix(data_words[position]) {
                return Err(Error::Checksum);
            }
        }

        let n = LEGACY_WORD_COUNT as u64;
        let mut entropy = Vec::with_capacity(data_words.len() / 3 * 4);
        for group in indices.chunks_exact(3) {
            let (w1, w2, w3) = (group[0] as u64, group[1] as u64, group[2] as u64);
            let x = w1 + n * ((n + w2 - w1) % n) + n * n * ((n + w3 - w2) % n);
            let x = u32::try_from(x).map_err(|_| Error::WordGroup)?;
            entropy.extend_from_slice(&x.to_le_bytes());
        }

        Ok(Self { entropy, phrase: phrase_words.join(" ") })
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn entropy(&self) -> &[u8] {
        &self.entropy
    }

    pub fn has_checksum(&self) -> bool {
        matches!(self.phrase.split(' ').count(), 13 | 25)
    }
}

impl Drop for MoneroMnemonic {
    fn drop(&mut self) {
        self.entropy.zeroize();
        self.phrase.zeroize();
    }
}

fn checksum_position(data_words: &[&str], words: &LegacyWordList) -> usize {
    let mut prefixes = String::new();
    for word in data_words {
        prefixes.push_str(words.prefix(word));
    }
    (crc32fast::hash(prefixes.as_bytes()) as usize) % data_words.len()
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

    fn synthetic_list() -> LegacyWordList {
        let words: Vec<String> = (0..LEGACY_WORD_COUNT).map(|i| format!("w{i:04}")).collect();
        LegacyWordList::new(&words, 3).unwrap()
    }

    #[test]
    fn checksum_word_repeats_the_crc_position() {
        let words = synthetic_list();
        let entropy = MoneroEntropy::from_bytes(hex!(
            "3b094ca7218f175e91fa2402b4ae239a2f4a0478a999c609bd5e2ce1eee7f33c"
        ))
        .unwrap();
        let mnemonic = MoneroMnemonic::from_entropy(&entropy, &words);
        assert_eq!(
            mnemonic.phrase(),
            "w1361 w0734 w0169 w0173 w0301 w0898 w0997 w0359 w0372 w0324 w0520 w1498 \
             w1337 w0668 w1429 w0667 w0722 w0784 w1329 w1133 w0935 w0166 w1446 w0206 w0997"
        );
        assert!(mnemonic.has_checksum());

        let parsed = MoneroMnemonic::new(mnemonic.phrase(), &words).unwrap();
        assert_eq!(parsed.entropy(), entropy.as_bytes());
    }

    #[test]
    fn bare_24_word_phrases_decode_without_a_checksum() {
        let words = synthetic_list();
        let entropy = MoneroEntropy::from_bytes(hex!(
            "3b094ca7218f175e91fa2402b4ae239a2f4a0478a999c609bd5e2ce1eee7f33c"
        ))
        .unwrap();
        let full = MoneroMnemonic::from_entropy(&entropy, &words);
        let bare = full.phrase().rsplit_once(' ').map(|(head, _)| head.to_string());
        let parsed = MoneroMnemonic::new(&bare.unwrap(), &words).unwrap();
        assert_eq!(parsed.entropy(), entropy.as_bytes());
        assert!(!parsed.has_checksum());
    }

    #[test]
    fn wrong_checksum_word_is_rejected() {
        let words = synthetic_list();
        let entropy = MoneroEntropy::from_bytes(hex!(
            "3b094ca7218f175e91fa2402b4ae239a2f4a0478a999c609bd5e2ce1eee7f33c"
        ))
        .unwrap();
        let full = MoneroMnemonic::from_entropy(&entropy, &words);
        let mut tampered: Vec<&str> = full.phrase().split(' ').collect();
        tampered[24] = "w0000";
        assert!(matches!(MoneroMnemonic::new(&tampered.join(" "), &words), Err(Error::Checksum)));
    }
}
