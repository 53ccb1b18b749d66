#![allow(dead_code)]

use bitword::Word;

pub const SAMPLE_WORDS: [Word; 8] = [
    0,
    Word::MAX,
    0x0123_4567_89AB_CDEF,
    0xABCD_EF01_2345_6789,
    0x8000_0000_0000_0001,
    0x7FFF_FFFF_FFFF_FFFE,
    0xAAAA_AAAA_AAAA_AAAA,
    0x5555_5555_5555_5555,
];

pub fn init_logging() {
    let _ = pretty_env_logger::try_init();
}

/// Every valid `(low, high)` pair.
pub fn all_ranges() -> impl Iterator<Item = (u32, u32)> {
    (0..64).flat_map(|low| (low..64).map(move |high| (low, high)))
}

/// The mask of `low..=high`, computed one bit at a time.
pub fn naive_mask(low: u32, high: u32) -> Word {
    (low..=high).fold(0, |mask, bit| mask | (1 << bit))
}
