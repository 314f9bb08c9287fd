use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::bits::Bits11;

/// Reference word lists shipped with the crate. English is the only list all
/// five schemes certify against; further lists slot in as new variants.
#[derive(Default, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Language {
    #[default]
    English,
}

impl Language {
    pub fn wordlist(&self) -> &'static WordList {
        match *self {
            Language::English => &lazy::WORDLIST_ENGLISH,
        }
    }

    pub(crate) fn wordmap(&self) -> &'static WordMap {
        match *self {
            Language::English => &lazy::WORDMAP_ENGLISH,
        }
    }
}

pub struct WordMap {
    inner: BTreeMap<&'static str, Bits11>,
}

pub struct WordList {
    inner: Vec<&'static str>,
}

impl WordMap {
    pub(crate) fn get_bits(&self, word: &str) -> Option<Bits11> {
        self.inner.get(word).copied()
    }
}

impl WordList {
    pub(crate) fn get_word(&self, bits: Bits11) -> &'static str {
        self.inner[bits.bits() as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.iter().copied()
    }
}

mod lazy {
    use super::*;

    fn gen_wordlist(lang_words: &'static str) -> WordList {
        let inner: Vec<_> = lang_words.split_whitespace().collect();
        debug_assert!(inner.len() == 2048, "Invalid wordlist length");
        WordList { inner }
    }

    fn gen_wordmap(wordlist: &WordList) -> WordMap {
        let inner = wordlist.inner.iter().enumerate().map(|(i, item)| (*item, Bits11::new(i as u16))).collect();
        WordMap { inner }
    }

    pub(super) static WORDLIST_ENGLISH: Lazy<WordList> = Lazy::new(|| gen_wordlist(include_str!("words/english.txt")));
    pub(super) static WORDMAP_ENGLISH: Lazy<WordMap> = Lazy::new(|| gen_wordmap(&WORDLIST_ENGLISH));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_list_is_complete_and_indexed() {
        let wordlist = Language::English.wordlist();
        assert_eq!(wordlist.iter().count(), 2048);
        assert_eq!(wordlist.get_word(Bits11::new(0)), "abandon");
        assert_eq!(wordlist.get_word(Bits11::new(2047)), "zoo");
        let wordmap = Language::English.wordmap();
        assert_eq!(wordmap.get_bits("zoo"), Some(Bits11::new(2047)));
        assert_eq!(wordmap.get_bits("zzz"), None);
    }
}
