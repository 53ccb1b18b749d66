//! Unchecked bit primitives.
//!
//! Bit offsets count from the least significant bit (offset 0) and ranges are inclusive on
//! both ends. Arguments are only checked with `debug_assert!`; the functions in
//! [`word`](crate::word) and [`bytes`](crate::bytes) validate their arguments first.

use crate::Word;

pub trait Bits: Sized {
    /// All ones in `low..=high`, zeroes elsewhere.
    fn mask(low: u32, high: u32) -> Self;

    /// Bits `low..=high` shifted down to offset 0.
    fn bits(self, low: u32, high: u32) -> Self;
    fn bit(self, offset: u32) -> Self;
    fn set_bits(self, low: u32, high: u32) -> Self;
    fn clear_bits(self, low: u32, high: u32) -> Self;
    fn replace_bit(self, offset: u32, value: bool) -> Self;

    /// The most significant bit interpreted as a two's-complement sign.
    fn is_negative(self) -> bool;
}

impl Bits for Word {
    /// Built by shifting `MAX` right rather than `1` left, so a range covering the whole word
    /// never shifts by 64.
    #[inline(always)]
    fn mask(low: u32, high: u32) -> Self {
        debug_assert!(low <= high && high < Self::BITS, "bad bit range {}..={}", low, high);
        (Word::MAX >> (Self::BITS - 1 - (high - low))) << low
    }

    #[inline(always)]
    fn bits(self, low: u32, high: u32) -> Self {
        (self & Self::mask(low, high)) >> low
    }

    #[inline(always)]
    fn bit(self, offset: u32) -> Self {
        debug_assert!(offset < Self::BITS, "bad bit offset {}", offset);
        (self >> offset) & 1
    }

    #[inline(always)]
    fn set_bits(self, low: u32, high: u32) -> Self {
        self | Self::mask(low, high)
    }

    #[inline(always)]
    fn clear_bits(self, low: u32, high: u32) -> Self {
        self & !Self::mask(low, high)
    }

    #[inline(always)]
    fn replace_bit(self, offset: u32, value: bool) -> Self {
        self.clear_bits(offset, offset) | ((value as Word) << offset)
    }

    #[inline(always)]
    fn is_negative(self) -> bool {
        self >> (Self::BITS - 1) == 1
    }
}
