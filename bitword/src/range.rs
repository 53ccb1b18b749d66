//! Validated argument types.
//!
//! A value of one of these types is always in its legal domain, so the operations that take
//! them cannot fail.

use crate::bits::Bits;
use crate::error::{Error, Result};
use crate::Word;

/// An inclusive span of bit positions, `low <= high <= 63`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBitRange", into = "RawBitRange"))]
pub struct BitRange {
    low: u32,
    high: u32,
}

impl BitRange {
    pub const FULL: BitRange = BitRange { low: 0, high: 63 };

    pub fn new(low: u32, high: u32) -> Result<BitRange> {
        BitRange::checked(low, high).ok_or_else(|| Error::reject(Error::BitRange { low, high }))
    }

    /// Same as [`BitRange::new`] but usable in const contexts. Does not log.
    pub const fn checked(low: u32, high: u32) -> Option<BitRange> {
        if low <= high && high < Word::BITS {
            Some(BitRange { low, high })
        } else {
            None
        }
    }

    pub const fn low(self) -> u32 {
        self.low
    }

    pub const fn high(self) -> u32 {
        self.high
    }

    /// Number of bits covered, `1..=64`.
    pub const fn width(self) -> u32 {
        self.high - self.low + 1
    }

    /// The range's bits set in place, everything else clear.
    #[inline]
    pub fn mask(self) -> Word {
        Word::mask(self.low, self.high)
    }
}

/// A single bit position, `0..=63`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitPos(u32);

impl BitPos {
    pub const SIGN: BitPos = BitPos(Word::BITS - 1);

    pub fn new(pos: u32) -> Result<BitPos> {
        if pos < Word::BITS {
            Ok(BitPos(pos))
        } else {
            Err(Error::reject(Error::BitPosition(pos)))
        }
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

/// One of the eight bytes of a word, `0..=7` with 0 the least significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteIndex(u32);

impl ByteIndex {
    pub const COUNT: u32 = Word::BITS / 8;

    pub fn new(index: u32) -> Result<ByteIndex> {
        if index < ByteIndex::COUNT {
            Ok(ByteIndex(index))
        } else {
            Err(Error::reject(Error::ByteIndex(index)))
        }
    }

    /// Every index from least to most significant.
    pub fn all() -> impl Iterator<Item = ByteIndex> {
        (0..ByteIndex::COUNT).map(ByteIndex)
    }

    /// Offset of the byte's least significant bit.
    pub const fn shift(self) -> u32 {
        self.0 * 8
    }

    pub const fn range(self) -> BitRange {
        BitRange {
            low: self.shift(),
            high: self.shift() + 7,
        }
    }
}

/// Serialized shape of a [`BitRange`], checked on the way in.
#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBitRange {
    low: u32,
    high: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBitRange> for BitRange {
    type Error = Error;

    fn try_from(raw: RawBitRange) -> Result<BitRange> {
        BitRange::new(raw.low, raw.high)
    }
}

#[cfg(feature = "serde")]
impl From<BitRange> for RawBitRange {
    fn from(range: BitRange) -> RawBitRange {
        RawBitRange {
            low: range.low,
            high: range.high,
        }
    }
}
