//! Checked byte access within a [`Word`].

use crate::bits::Bits;
use crate::error::Result;
use crate::range::ByteIndex;
use crate::{Byte, Word};

/// Returns byte `byte_index` of `word`, where byte 0 is the least significant.
///
/// ```
/// assert_eq!(bitword::get_byte(3, 0x0011_2233_4455_6677), Ok(0x44));
/// ```
pub fn get_byte(byte_index: u32, word: Word) -> Result<Byte> {
    ByteIndex::new(byte_index).map(|index| get_byte_at(index, word))
}

/// Returns `word` with byte `byte_index` replaced by `byte_val`.
pub fn put_byte(byte_index: u32, byte_val: Byte, word: Word) -> Result<Word> {
    ByteIndex::new(byte_index).map(|index| put_byte_at(index, byte_val, word))
}

#[inline]
pub fn get_byte_at(index: ByteIndex, word: Word) -> Byte {
    let range = index.range();
    word.bits(range.low(), range.high()) as Byte
}

/// The old byte is cleared before the new one is OR'd in, so none of its bits survive.
#[inline]
pub fn put_byte_at(index: ByteIndex, byte: Byte, word: Word) -> Word {
    let range = index.range();
    word.clear_bits(range.low(), range.high()) | (Word::from(byte) << index.shift())
}

/// Concatenates eight bytes into a word, `b0` least significant and `b7` most significant.
#[allow(clippy::too_many_arguments)]
pub fn build_word(
    b0: Byte,
    b1: Byte,
    b2: Byte,
    b3: Byte,
    b4: Byte,
    b5: Byte,
    b6: Byte,
    b7: Byte,
) -> Word {
    ByteIndex::all()
        .zip([b0, b1, b2, b3, b4, b5, b6, b7])
        .fold(0, |word, (index, byte)| word | (Word::from(byte) << index.shift()))
}
