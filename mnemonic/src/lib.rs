//! Mnemonic phrase codecs. Every scheme round-trips entropy and phrase
//! exactly: BIP-39 with its SHA-256 checksum, the legacy Electrum trilinear
//! encoding, the Electrum V2 seed-version scheme, the Monero word triplets
//! with their CRC-32 checksum word and the Algorand 25-word account format.
//!
//! Phrases and entropy wipe themselves on drop.

mod algorand;
mod bip39;
mod bits;
mod electrum_v1;
mod electrum_v2;
mod error;
mod language;
mod monero;
mod result;
mod wordlist;

pub use algorand::AlgorandMnemonic;
pub use bip39::{Bip39Mnemonic, WordCount};
pub use electrum_v1::ElectrumV1Mnemonic;
pub use electrum_v2::{ElectrumV2Mnemonic, ElectrumV2MnemonicType};
pub use error::Error;
pub use language::{Language, WordList, WordMap};
pub use monero::MoneroMnemonic;
pub use result::Result;
pub use wordlist::{LegacyWordList, LEGACY_WORD_COUNT};
