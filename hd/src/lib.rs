//! Hierarchical deterministic key derivation.
//!
//! The BIP-32 engine here is generic over the curve: secp256k1 and
//! NIST P-256 keys derive additively, while the ed25519 flavors follow
//! SLIP-10's hardened-only replacement rule. Cardano's Kholaw-ed25519
//! trees, the Electrum V1/V2 derivations, Monero subaddress keys and the
//! WIF codec live in their own modules on top of the shared plumbing.

pub use secp256k1;

mod private_key;
mod public_key;
mod xkey;
mod xprivate_key;
mod xpublic_key;

mod address_type;
mod attrs;
mod child_number;
mod derivation_path;
mod error;
mod prefix;
mod result;
pub mod types;

pub mod cardano;
pub mod electrum;
pub mod monero;
pub mod wif;

pub use address_type::AddressType;
pub use attrs::ExtendedKeyAttrs;
pub use child_number::ChildNumber;
pub use derivation_path::DerivationPath;
pub use error::Error;
pub use prefix::Prefix;
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use result::Result;
pub use types::*;
pub use xkey::ExtendedKey;
pub use xprivate_key::ExtendedPrivateKey;
pub use xpublic_key::ExtendedPublicKey;
