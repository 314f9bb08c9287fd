use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    String(String),

    #[error("invalid word count: {0}")]
    WordCount(usize),

    #[error("mnemonic contains a word outside the word list")]
    UnknownWord,

    #[error("mnemonic checksum mismatch")]
    Checksum,

    #[error("word group encodes an out-of-range value")]
    WordGroup,

    #[error("unrecognized seed version prefix")]
    SeedVersion,

    #[error("legacy word list must hold 1626 distinct words, got {0}")]
    WordList(usize),

    #[error(transparent)]
    Entropy(#[from] hdwallet_entropy::Error),

    #[error(transparent)]
    Hmac(#[from] hmac::digest::InvalidLength),
}
