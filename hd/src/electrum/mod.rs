//!
//! Electrum wallet derivation. The V1 scheme predates BIP-32 and derives
//! every key directly from a stretched master secret with no chain code;
//! the V2 scheme is ordinary BIP-32 over secp256k1 with a keystore root
//! selected by the mnemonic version prefix.
//!

pub mod v1;
pub mod v2;

pub use v1::{ElectrumV1PrivateKey, ElectrumV1PublicKey};
pub use v2::ElectrumV2Keystore;
