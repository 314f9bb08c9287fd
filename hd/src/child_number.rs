//! Child number types.

use crate::{error::Error, result::Result};
use borsh::{BorshDeserialize, BorshSerialize};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// Index of a particular child key for a given (extended) private key.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, BorshSerialize, BorshDeserialize)]
pub struct ChildNumber(pub u32);

impl ChildNumber {
    /// Bit which indicates a child is hardened.
    pub const HARDENED_FLAG: u32 = 1 << 31;

    /// Create a new [`ChildNumber`] from an index and a hardened flag.
    ///
    /// The index must be less than 2³¹ or this function will return an error.
    pub fn new(index: u32, hardened: bool) -> Result<Self> {
        if index & Self::HARDENED_FLAG == 0 {
            let index = if hardened { index | Self::HARDENED_FLAG } else { index };
            Ok(ChildNumber(index))
        } else {
            Err(Error::ChildNumber)
        }
    }

    /// Parse a child number from the big-endian serialization used by
    /// extended keys.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        ChildNumber(u32::from_be_bytes(bytes))
    }

    /// Serialize this child number as bytes (big-endian).
    pub fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Is this child number within the hardened range?
    pub fn is_hardened(self) -> bool {
        self.0 & Self::HARDENED_FLAG != 0
    }

    /// Index of this child number, with the hardened bit masked off.
    pub fn index(self) -> u32 {
        self.0 & !Self::HARDENED_FLAG
    }
}

impl From<u32> for ChildNumber {
    fn from(n: u32) -> ChildNumber {
        ChildNumber(n)
    }
}

impl From<ChildNumber> for u32 {
    fn from(n: ChildNumber) -> u32 {
        n.0
    }
}

impl FromStr for ChildNumber {
    type Err = Error;

    /// Accepts both the `1'` and `1h` hardened notations.
    fn from_str(child: &str) -> Result<ChildNumber> {
        match child.strip_suffix(['\'', 'h']) {
            Some(child) => {
                let index = child.parse::<u32>().map_err(|_| Error::ChildNumber)?;
                ChildNumber::new(index, true)
            }
            None => {
                let index = child.parse::<u32>().map_err(|_| Error::ChildNumber)?;
                ChildNumber::new(index, false)
            }
        }
    }
}

impl Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())?;

        if self.is_hardened() {
            write!(f, "'")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ChildNumber;

    #[test]
    fn child_number_parse() {
        let child = "42".parse::<ChildNumber>().unwrap();
        assert_eq!(child, ChildNumber(42));
        assert!(!child.is_hardened());

        let child = "42'".parse::<ChildNumber>().unwrap();
        assert_eq!(child.index(), 42);
        assert!(child.is_hardened());

        let child = "42h".parse::<ChildNumber>().unwrap();
        assert_eq!(child.index(), 42);
        assert!(child.is_hardened());

        assert!("2147483648".parse::<ChildNumber>().is_err());
        assert!("x".parse::<ChildNumber>().is_err());
    }

    #[test]
    fn child_number_round_trip() {
        let child = ChildNumber::new(2147483647, true).unwrap();
        assert_eq!(child.to_string(), "2147483647'");
        assert_eq!(ChildNumber::from_bytes(child.to_bytes()), child);
    }
}
