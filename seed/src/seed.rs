use std::fmt;

use blake2b_simd::Params;
use ciborium::value::Value;
use hmac::Hmac;
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, Zeroizing};

use hdwallet_mnemonic::{AlgorandMnemonic, Bip39Mnemonic, ElectrumV1Mnemonic, ElectrumV2Mnemonic, MoneroMnemonic};

use crate::error::Error;
use crate::result::Result;

/// Number of PBKDF2 rounds used by the BIP-39 and Electrum V2 stretches.
const PBKDF2_ROUNDS: u32 = 2048;

/// Master-key input for the HD engines. Constructors produce 64 bytes for
/// the PBKDF2 schemes, 32 for the Daedalus legacy digest and the decoded
/// entropy (16 to 32 bytes) for the passthrough schemes; `from_bytes`
/// accepts that range plus 128-byte extended-key imports. Wipes on drop.
#[derive(Clone)]
pub struct Seed {
    bytes: Vec<u8>,
}

impl Seed {
    /// PBKDF2-HMAC-SHA512(phrase, "mnemonic" + NFKD(passphrase), 2048, 64).
    pub fn bip39(mnemonic: &Bip39Mnemonic, passphrase: &str) -> Result<Self> {
        pbkdf2_stretch(mnemonic.phrase(), "mnemonic", passphrase)
    }

    /// Same stretch as BIP-39 with the salt prefix "electrum".
    pub fn electrum_v2(mnemonic: &ElectrumV2Mnemonic, passphrase: &str) -> Result<Self> {
        pbkdf2_stretch(mnemonic.phrase(), "electrum", passphrase)
    }

    pub fn electrum_v1(mnemonic: &ElectrumV1Mnemonic) -> Self {
        Self { bytes: mnemonic.entropy().to_vec() }
    }

    pub fn monero(mnemonic: &MoneroMnemonic) -> Self {
        Self { bytes: mnemonic.entropy().to_vec() }
    }

    pub fn algorand(mnemonic: &AlgorandMnemonic) -> Self {
        Self { bytes: mnemonic.entropy().to_vec() }
    }

    /// The Icarus master KDF (CIP-3) salts with the raw entropy, so the seed
    /// stage passes the mnemonic's entropy through unstretched.
    pub fn cardano_icarus(mnemonic: &Bip39Mnemonic) -> Self {
        Self { bytes: mnemonic.entropy().to_vec() }
    }

    /// The Ledger flow feeds the plain 64-byte BIP-39 seed into its master
    /// loop.
    pub fn cardano_ledger(mnemonic: &Bip39Mnemonic, passphrase: &str) -> Result<Self> {
        Self::bip39(mnemonic, passphrase)
    }

    /// Daedalus legacy seed: Blake2b-256 over the CBOR byte-string wrapping
    /// of the entropy.
    pub fn cardano_legacy(mnemonic: &Bip39Mnemonic) -> Result<Self> {
        let mut cbor = Vec::with_capacity(mnemonic.entropy().len() + 3);
        ciborium::ser::into_writer(&Value::Bytes(mnemonic.entropy().to_vec()), &mut cbor)?;
        let digest = Params::new().hash_length(32).hash(&cbor);
        Ok(Self { bytes: digest.as_bytes().to_vec() })
    }

    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = bytes.as_ref();
        match bytes.len() {
            16..=32 | 64 | 128 => Ok(Self { bytes: bytes.to_vec() }),
            len => Err(Error::Length(len)),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Seed").field(&"...").finish()
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

fn pbkdf2_stretch(phrase: &str, salt_prefix: &str, passphrase: &str) -> Result<Seed> {
    let passphrase = Zeroizing::new(passphrase.nfkd().collect::<String>());
    let salt = Zeroizing::new(format!("{salt_prefix}{}", passphrase.as_str()));
    let mut bytes = vec![0u8; 64];
    pbkdf2::pbkdf2::<Hmac<Sha512>>(phrase.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut bytes)?;
    Ok(Seed { bytes })
}
