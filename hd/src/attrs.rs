use crate::{ChainCode, ChildNumber, Depth, KeyFingerprint};
use borsh::{BorshDeserialize, BorshSerialize};

/// Extended key attributes: the fields shared by extended private and public
/// keys besides the key material itself.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord, BorshSerialize, BorshDeserialize)]
pub struct ExtendedKeyAttrs {
    /// Depth in the key derivation hierarchy.
    pub depth: Depth,

    /// Fingerprint of the parent public key.
    pub parent_fingerprint: KeyFingerprint,

    /// Child number this key was derived at.
    pub child_number: ChildNumber,

    /// Chain code.
    pub chain_code: ChainCode,
}
