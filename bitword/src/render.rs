//! The bit-string form of a word: eight groups of eight binary digits, most significant
//! byte first, separated by single spaces.
//!
//! ```text
//! 10101010 10111011 11001100 11011101 11101110 00000000 00010001 00100010
//! ```

use crate::bits::Bits;
use crate::Word;

/// Printable length of a bit-string.
pub const BIT_STRING_LEN: usize = 71;

/// Length of the buffer written by [`expand_bits`]: the bit-string and a NUL terminator.
pub const BIT_STRING_BUFFER_LEN: usize = BIT_STRING_LEN + 1;

/// Writes the bit-string of `word` into `buf` as ASCII, followed by a `0` byte.
pub fn expand_bits(word: Word, buf: &mut [u8; BIT_STRING_BUFFER_LEN]) {
    let mut offset = 0;
    for bit in (0..Word::BITS).rev() {
        buf[offset] = b'0' + word.bit(bit) as u8;
        offset += 1;
        if bit > 0 && bit % 8 == 0 {
            buf[offset] = b' ';
            offset += 1;
        }
    }
    buf[BIT_STRING_LEN] = 0;
}

/// Returns the bit-string of `word`.
///
/// ```
/// assert_eq!(
///     bitword::render_bits(0xAABB_CCDD_EE00_1122),
///     "10101010 10111011 11001100 11011101 11101110 00000000 00010001 00100010"
/// );
/// ```
pub fn render_bits(word: Word) -> String {
    let mut buf = [0; BIT_STRING_BUFFER_LEN];
    expand_bits(word, &mut buf);
    buf[..BIT_STRING_LEN].iter().map(|&ch| char::from(ch)).collect()
}
