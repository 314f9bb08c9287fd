use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    String(String),

    #[error("base58 encoding error: {0}")]
    Base58(#[from] bs58::encode::Error),

    #[error("base58 decoding error: {0}")]
    Base58Decode(#[from] bs58::decode::Error),

    #[error("HMAC error: {0}")]
    Hmac(#[from] hmac::digest::InvalidLength),

    #[error("secp256k1 error: {0}")]
    Crypto(#[from] secp256k1::Error),

    #[error("elliptic curve error: {0}")]
    Ecc(#[from] hdwallet_ecc::Error),

    #[error("CBOR encoding error: {0}")]
    CborSerialize(#[from] ciborium::ser::Error<std::io::Error>),

    #[error("CBOR decoding error: {0}")]
    CborDeserialize(#[from] ciborium::de::Error<std::io::Error>),

    #[error("payload authentication failed")]
    PayloadAuth,

    #[error("decoding error: {0}")]
    TryFromSlice(#[from] core::array::TryFromSliceError),

    #[error("UTF-8 error: {0}")]
    Utf8Error(#[from] core::str::Utf8Error),

    #[error("invalid child number")]
    ChildNumber,

    #[error("maximum derivation depth exceeded")]
    Depth,

    #[error("seed length invalid")]
    SeedLength,

    #[error("decoded base58 data is {0} bytes, expected {1}")]
    DecodeLength(usize, usize),

    #[error("decoding error")]
    DecodeIssue,

    #[error("unknown extended key version {0:#010x}")]
    UnknownVersion(u32),

    /// The tweak (or the candidate key it produces) fell outside the curve
    /// group. Derivation retries the same index with fresh HMAC material, so
    /// this surfaces only from the raw key traits.
    #[error("tweak out of range")]
    TweakOutOfRange,

    #[error("derivation not supported for this key type")]
    InvalidDerivation,
}

impl Error {
    pub fn custom(msg: impl std::fmt::Display) -> Self {
        Error::String(msg.to_string())
    }
}
