//! Extended key prefixes, i.e. the version-byte tables behind `xprv`,
//! `ypub`, `tprv` and friends.

use crate::{Error, Result, Version};
use core::{fmt, str};

/// Extended key prefixes: a 4-character Base58 rendering paired with the
/// 4-byte version that produces it.
///
/// The constants below cover the mainnet/testnet script families. Coin
/// tables that live outside this registry can still be expressed with
/// [`Prefix::from_parts_unchecked`]; such keys serialize fine but will be
/// rejected when parsed back, since parsing only accepts known versions.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Prefix {
    /// ASCII characters of the prefix (e.g. `xprv`).
    chars: [u8; 4],

    /// Version bytes, interpreted big-endian.
    version: Version,
}

impl Prefix {
    /// Mainnet P2PKH/P2SH private key (`xprv`).
    pub const XPRV: Self = Self::from_parts_unchecked("xprv", 0x0488_ADE4);

    /// Mainnet P2PKH/P2SH public key (`xpub`).
    pub const XPUB: Self = Self::from_parts_unchecked("xpub", 0x0488_B21E);

    /// Mainnet P2WPKH-in-P2SH private key (`yprv`).
    pub const YPRV: Self = Self::from_parts_unchecked("yprv", 0x049D_7878);

    /// Mainnet P2WPKH-in-P2SH public key (`ypub`).
    pub const YPUB: Self = Self::from_parts_unchecked("ypub", 0x049D_7CB2);

    /// Mainnet P2WPKH private key (`zprv`).
    pub const ZPRV: Self = Self::from_parts_unchecked("zprv", 0x04B2_430C);

    /// Mainnet P2WPKH public key (`zpub`).
    pub const ZPUB: Self = Self::from_parts_unchecked("zpub", 0x04B2_4746);

    /// Mainnet multi-signature P2WSH-in-P2SH private key (`Yprv`).
    pub const YPRV_MULTISIG: Self = Self::from_parts_unchecked("Yprv", 0x0295_B005);

    /// Mainnet multi-signature P2WSH-in-P2SH public key (`Ypub`).
    pub const YPUB_MULTISIG: Self = Self::from_parts_unchecked("Ypub", 0x0295_B43F);

    /// Mainnet multi-signature P2WSH private key (`Zprv`).
    pub const ZPRV_MULTISIG: Self = Self::from_parts_unchecked("Zprv", 0x02AA_7A99);

    /// Mainnet multi-signature P2WSH public key (`Zpub`).
    pub const ZPUB_MULTISIG: Self = Self::from_parts_unchecked("Zpub", 0x02AA_7ED3);

    /// Testnet P2PKH/P2SH private key (`tprv`).
    pub const TPRV: Self = Self::from_parts_unchecked("tprv", 0x0435_8394);

    /// Testnet P2PKH/P2SH public key (`tpub`).
    pub const TPUB: Self = Self::from_parts_unchecked("tpub", 0x0435_87CF);

    /// Testnet P2WPKH-in-P2SH private key (`uprv`).
    pub const UPRV: Self = Self::from_parts_unchecked("uprv", 0x044A_4E28);

    /// Testnet P2WPKH-in-P2SH public key (`upub`).
    pub const UPUB: Self = Self::from_parts_unchecked("upub", 0x044A_5262);

    /// Testnet P2WPKH private key (`vprv`).
    pub const VPRV: Self = Self::from_parts_unchecked("vprv", 0x045F_18BC);

    /// Testnet P2WPKH public key (`vpub`).
    pub const VPUB: Self = Self::from_parts_unchecked("vpub", 0x045F_1CF6);

    const REGISTRY: [Self; 16] = [
        Self::XPRV,
        Self::XPUB,
        Self::YPRV,
        Self::YPUB,
        Self::ZPRV,
        Self::ZPUB,
        Self::YPRV_MULTISIG,
        Self::YPUB_MULTISIG,
        Self::ZPRV_MULTISIG,
        Self::ZPUB_MULTISIG,
        Self::TPRV,
        Self::TPUB,
        Self::UPRV,
        Self::UPUB,
        Self::VPRV,
        Self::VPUB,
    ];

    /// Create a [`Prefix`] from the given 4-character string and version.
    ///
    /// Panics if the string is shorter than 4 bytes; longer input is
    /// truncated. No registry lookup is performed, so this is the escape
    /// hatch for coin tables this crate does not know about.
    pub const fn from_parts_unchecked(prefix: &str, version: Version) -> Self {
        let bytes = prefix.as_bytes();
        Prefix { chars: [bytes[0], bytes[1], bytes[2], bytes[3]], version }
    }

    /// Validate that the given string can act as a key prefix.
    pub(crate) fn validate_str(s: &str) -> Result<&str> {
        if s.len() != 4 {
            return Err(Error::DecodeIssue);
        }

        if s.bytes().any(|byte| !byte.is_ascii_alphanumeric()) {
            return Err(Error::DecodeIssue);
        }

        Ok(s)
    }

    /// Borrow the prefix as a `str`.
    pub fn as_str(&self) -> &str {
        str::from_utf8(&self.chars).expect("prefix chars are ASCII")
    }

    /// Get the version bytes for this prefix.
    pub fn to_bytes(self) -> [u8; 4] {
        self.version.to_be_bytes()
    }

    /// Get the [`Version`] for this prefix.
    pub fn version(self) -> Version {
        self.version
    }

    /// Is this a private key prefix?
    pub fn is_private(self) -> bool {
        self.chars[1..] == *b"prv"
    }

    /// Is this a public key prefix?
    pub fn is_public(self) -> bool {
        self.chars[1..] == *b"pub"
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<Version> for Prefix {
    type Error = Error;

    fn try_from(version: Version) -> Result<Self> {
        Self::REGISTRY.into_iter().find(|prefix| prefix.version == version).ok_or(Error::UnknownVersion(version))
    }
}
