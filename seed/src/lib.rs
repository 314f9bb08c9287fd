//! Mnemonic-to-seed derivation. Each constructor on [`Seed`] implements one
//! scheme's stretch: PBKDF2-HMAC-SHA512 for BIP-39 and Electrum V2, CBOR +
//! Blake2b-256 for the Daedalus legacy flow, and straight entropy passthrough
//! for the schemes whose engines key off the decoded bytes.

mod error;
mod result;
mod seed;

pub use error::Error;
pub use result::Result;
pub use seed::Seed;
