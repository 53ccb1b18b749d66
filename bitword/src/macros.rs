/// Builds a [`BitRange`](crate::BitRange) in a const context. An out-of-range literal is
/// a compile error.
///
/// ```
/// use bitword::{bit_range, BitRange};
///
/// const OPCODE: BitRange = bit_range!(4, 7);
/// assert_eq!(OPCODE.width(), 4);
/// ```
#[macro_export]
macro_rules! bit_range {
    ($low:expr, $high:expr) => {{
        const RANGE: $crate::BitRange = match $crate::BitRange::checked($low, $high) {
            Some(range) => range,
            None => panic!("bit range out of bounds"),
        };
        RANGE
    }};

    ($bit:expr) => {
        $crate::bit_range!($bit, $bit)
    };
}
