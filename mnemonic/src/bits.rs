//! Bit packing between byte strings and 11-bit word indexes.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bits11(u16);

impl Bits11 {
    pub fn new(value: u16) -> Self {
        Self(value & 0x7ff)
    }

    pub fn bits(self) -> u16 {
        self.0
    }
}

/// Collects 11-bit values back into bytes; a trailing partial byte is
/// left-aligned and zero-padded.
pub(crate) struct BitWriter {
    bytes: Vec<u8>,
    acc: u32,
    len: usize,
}

impl BitWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { bytes: Vec::with_capacity(capacity / 8 + 1), acc: 0, len: 0 }
    }

    pub fn push(&mut self, value: Bits11) {
        self.acc = (self.acc << 11) | value.bits() as u32;
        self.len += 11;
        while self.len >= 8 {
            self.len -= 8;
            self.bytes.push((self.acc >> self.len) as u8);
            self.acc &= (1 << self.len) - 1;
        }
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        if self.len > 0 {
            self.bytes.push((self.acc << (8 - self.len)) as u8);
        }
        self.bytes
    }
}

/// Streams big-endian bytes as 11-bit groups, dropping the incomplete tail.
pub(crate) struct BitIter<I> {
    source: I,
    acc: u32,
    len: usize,
}

impl<'a, I: Iterator<Item = &'a u8>> Iterator for BitIter<I> {
    type Item = Bits11;

    fn next(&mut self) -> Option<Bits11> {
        while self.len < 11 {
            let byte = *self.source.next()?;
            self.acc = (self.acc << 8) | byte as u32;
            self.len += 8;
        }
        self.len -= 11;
        let value = (self.acc >> self.len) as u16;
        self.acc &= (1 << self.len) - 1;
        Some(Bits11::new(value))
    }
}

pub(crate) trait IterExt: Iterator + Sized {
    fn bits(self) -> BitIter<Self> {
        BitIter { source: self, acc: 0, len: 0 }
    }

    fn join(self, separator: &str) -> String
    where
        Self::Item: AsRef<str>,
    {
        let mut out = String::new();
        for (i, item) in self.enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(item.as_ref());
        }
        out
    }
}

impl<I: Iterator> IterExt for I {}
