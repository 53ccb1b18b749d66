//! Bit-field and byte manipulation over 64-bit machine words.
//!
//! The free functions re-exported at the crate root take raw positions and indices and
//! return [`Error`] for anything out of range. The `*_in`/`*_at` variants in [`word`] and
//! [`bytes`] take pre-validated [`BitRange`], [`BitPos`] and [`ByteIndex`] values and cannot
//! fail. [`Bits`] holds the unchecked primitives underneath both.

#[macro_use]
pub mod macros;

pub mod bits;
pub mod buffer;
pub mod bytes;
pub mod error;
pub mod range;
pub mod render;
pub mod word;

pub use bits::Bits;
pub use buffer::clear_buffer;
pub use bytes::{build_word, get_byte, put_byte};
pub use error::{Error, Result};
pub use range::{BitPos, BitRange, ByteIndex};
pub use render::{expand_bits, render_bits};
pub use word::{assign_bit, clear_bit_range, extract_bits, is_negative, set_bit_range};

/// A 64-bit machine word.
pub type Word = u64;
pub type Byte = u8;
