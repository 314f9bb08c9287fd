//! Entropy containers for the mnemonic schemes. Each container validates its
//! scheme's accepted strengths on construction, samples from a CSPRNG in the
//! `random` constructors and wipes itself on drop.

mod algorand;
mod bip39;
mod electrum_v1;
mod electrum_v2;
mod error;
mod monero;
mod result;

pub use algorand::AlgorandEntropy;
pub use bip39::Bip39Entropy;
pub use electrum_v1::ElectrumV1Entropy;
pub use electrum_v2::ElectrumV2Entropy;
pub use error::Error;
pub use monero::MoneroEntropy;
pub use result::Result;
