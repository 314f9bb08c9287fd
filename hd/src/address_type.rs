use core::fmt;

/// External/internal chain selector for BIP-44 style paths.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddressType {
    Receive = 0,
    Change,
}

impl AddressType {
    pub fn index(&self) -> u32 {
        match self {
            Self::Receive => 0,
            Self::Change => 1,
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Receive => f.write_str("Receive"),
            Self::Change => f.write_str("Change"),
        }
    }
}
