use std::fmt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An argument outside its legal domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `high` is past bit 63 or `low` is above `high`.
    BitRange { low: u32, high: u32 },
    BitPosition(u32),
    /// A single bit may only be assigned 0 or 1.
    BitValue(u32),
    ByteIndex(u32),
    /// Requested more elements than the buffer holds.
    BufferSize { size: usize, len: usize },
}

impl Error {
    /// Reports a rejected argument to the logger and hands the error back.
    pub(crate) fn reject(err: Error) -> Error {
        log::trace!("rejected argument: {}", err);
        err
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BitRange { low, high } => {
                write!(f, "invalid bit range {}..={} (expected low <= high <= 63)", low, high)
            }
            Error::BitPosition(pos) => write!(f, "bit position {} out of range 0..=63", pos),
            Error::BitValue(val) => write!(f, "bit value {} is not 0 or 1", val),
            Error::ByteIndex(index) => write!(f, "byte index {} out of range 0..=7", index),
            Error::BufferSize { size, len } => {
                write!(f, "size {} exceeds buffer of length {}", size, len)
            }
        }
    }
}

impl std::error::Error for Error {}
