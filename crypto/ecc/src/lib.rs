//! Elliptic-curve key types backing the HD derivation engines.
//!
//! Each module wraps one curve behind the small secret/public key surface the
//! derivation layer expects: fixed-size byte conversions, tweak arithmetic and
//! redacted debug output. secp256k1 is consumed directly from the upstream FFI
//! crate by the layers above and has no wrapper here.

pub mod ed25519;
mod error;
pub mod kholaw;
pub mod nist256p1;
mod result;

pub use error::Error;
pub use result::Result;
