use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// Encoded point does not land on the curve (or is the identity).
    #[error("invalid curve point")]
    InvalidPoint,

    /// Scalar is zero or not below the group order.
    #[error("scalar out of range")]
    InvalidScalar,
}
