//! Checked bit-field operations on a [`Word`].

use crate::bits::Bits;
use crate::error::{Error, Result};
use crate::range::{BitPos, BitRange};
use crate::Word;

/// Returns bits `low..=high` of `word` shifted down to bit 0. Every bit above `high - low`
/// in the result is clear.
///
/// ```
/// assert_eq!(bitword::extract_bits(12, 15, 0x0123_4567_89ab_cdef), Ok(0xc));
/// ```
pub fn extract_bits(low: u32, high: u32, word: Word) -> Result<Word> {
    BitRange::new(low, high).map(|range| extract_bits_in(range, word))
}

/// Returns `word` with bits `low..=high` set to 1.
pub fn set_bit_range(low: u32, high: u32, word: Word) -> Result<Word> {
    BitRange::new(low, high).map(|range| set_bits_in(range, word))
}

/// Returns `word` with bits `low..=high` set to 0.
pub fn clear_bit_range(low: u32, high: u32, word: Word) -> Result<Word> {
    BitRange::new(low, high).map(|range| clear_bits_in(range, word))
}

/// Returns `word` with bit `bit_num` set to `bit_val`, which must be 0 or 1.
pub fn assign_bit(bit_num: u32, bit_val: u32, word: Word) -> Result<Word> {
    let pos = BitPos::new(bit_num)?;
    match bit_val {
        0 | 1 => Ok(assign_bit_at(pos, bit_val == 1, word)),
        _ => Err(Error::reject(Error::BitValue(bit_val))),
    }
}

/// True when the sign bit (bit 63) is set.
#[inline]
pub fn is_negative(word: Word) -> bool {
    word.is_negative()
}

#[inline]
pub fn extract_bits_in(range: BitRange, word: Word) -> Word {
    word.bits(range.low(), range.high())
}

#[inline]
pub fn set_bits_in(range: BitRange, word: Word) -> Word {
    word | range.mask()
}

#[inline]
pub fn clear_bits_in(range: BitRange, word: Word) -> Word {
    word & !range.mask()
}

#[inline]
pub fn assign_bit_at(pos: BitPos, value: bool, word: Word) -> Word {
    word.replace_bit(pos.get(), value)
}

#[cfg(test)]
mod test {
    use super::*;

    const SAMPLE: Word = 0x0123_4567_89AB_CDEF;

    #[test]
    fn extract() {
        assert_eq!(extract_bits(62, 63, 0xABCD_EF01_2345_6789), Ok(0x2));
        assert_eq!(extract_bits(0, 0, SAMPLE), Ok(1));
        assert_eq!(extract_bits(63, 63, SAMPLE), Ok(0));
        assert_eq!(extract_bits(0, 63, SAMPLE), Ok(SAMPLE));
        assert_eq!(extract_bits(56, 63, SAMPLE), Ok(0x01));
        assert_eq!(extract_bits(1, 63, Word::MAX), Ok(Word::MAX >> 1));
    }

    #[test]
    fn set_and_clear() {
        assert_eq!(set_bit_range(12, 15, SAMPLE), Ok(0x0123_4567_89AB_FDEF));
        assert_eq!(clear_bit_range(12, 15, SAMPLE), Ok(0x0123_4567_89AB_0DEF));
        assert_eq!(set_bit_range(0, 63, 0), Ok(Word::MAX));
        assert_eq!(clear_bit_range(0, 63, Word::MAX), Ok(0));
        assert_eq!(set_bit_range(63, 63, 0), Ok(1 << 63));
        assert_eq!(clear_bit_range(0, 0, Word::MAX), Ok(Word::MAX - 1));
    }

    #[test]
    fn assign() {
        assert_eq!(assign_bit(12, 1, SAMPLE), Ok(0x0123_4567_89AB_DDEF));
        assert_eq!(assign_bit(0, 0, SAMPLE), Ok(SAMPLE - 1));
        assert_eq!(assign_bit(63, 1, 0), Ok(1 << 63));
        assert_eq!(assign_bit(63, 0, Word::MAX), Ok(Word::MAX >> 1));
        assert_eq!(assign_bit(5, 1, 0b10_0000), Ok(0b10_0000));
    }

    #[test]
    fn rejects_out_of_domain_arguments() {
        assert_eq!(extract_bits(0, 64, SAMPLE), Err(Error::BitRange { low: 0, high: 64 }));
        assert_eq!(extract_bits(8, 7, SAMPLE), Err(Error::BitRange { low: 8, high: 7 }));
        assert_eq!(set_bit_range(63, 62, SAMPLE), Err(Error::BitRange { low: 63, high: 62 }));
        assert_eq!(clear_bit_range(70, 80, SAMPLE), Err(Error::BitRange { low: 70, high: 80 }));
        assert_eq!(assign_bit(64, 1, SAMPLE), Err(Error::BitPosition(64)));
        assert_eq!(assign_bit(3, 2, SAMPLE), Err(Error::BitValue(2)));
    }

    #[test]
    fn sign() {
        assert!(is_negative(0x8000_0000_0000_0000));
        assert!(is_negative(Word::MAX));
        assert!(!is_negative(0x7FFF_FFFF_FFFF_FFFF));
        assert!(!is_negative(0));
    }
}
