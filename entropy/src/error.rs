use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("entropy strength {0} bits is not supported by this scheme")]
    Strength(usize),

    #[error("entropy length {0} bytes is not supported by this scheme")]
    Length(usize),
}
