use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid seed length: {0} bytes")]
    Length(usize),

    #[error(transparent)]
    Kdf(#[from] hmac::digest::InvalidLength),

    #[error("CBOR encoding failed: {0}")]
    Cbor(#[from] ciborium::ser::Error<std::io::Error>),
}
