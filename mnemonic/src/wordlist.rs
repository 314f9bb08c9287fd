use std::collections::BTreeMap;

use crate::error::Error;
use crate::result::Result;

pub const LEGACY_WORD_COUNT: usize = 1626;

/// Word table for the 1626-word schemes (Electrum V1 and Monero). The table
/// is caller-supplied: those ecosystems version their lists independently of
/// BIP-39 and pick the list per language at a higher layer.
pub struct LegacyWordList {
    words: Vec<String>,
    map: BTreeMap<String, u32>,
    prefix_len: usize,
}

impl LegacyWordList {
    /// `prefix_len` is the number of leading characters that identify a word
    /// uniquely; the Monero checksum hashes these prefixes (3 for English).
    pub fn new(words: &[impl AsRef<str>], prefix_len: usize) -> Result<Self> {
        if words.len() != LEGACY_WORD_COUNT {
            return Err(Error::WordList(words.len()));
        }
        let words: Vec<String> = words.iter().map(|word| word.as_ref().to_string()).collect();
        let map: BTreeMap<String, u32> = words.iter().enumerate().map(|(i, word)| (word.clone(), i as u32)).collect();
        if map.len() != LEGACY_WORD_COUNT {
            return Err(Error::WordList(map.len()));
        }
        Ok(Self { words, map, prefix_len })
    }

    pub fn word(&self, index: u32) -> &str {
        &self.words[index as usize]
    }

    pub fn index(&self, word: &str) -> Option<u32> {
        self.map.get(word).copied()
    }

    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    pub(crate) fn prefix<'a>(&self, word: &'a str) -> &'a str {
        match word.char_indices().nth(self.prefix_len) {
            Some((offset, _)) => &word[..offset],
            None => word,
        }
    }
}
