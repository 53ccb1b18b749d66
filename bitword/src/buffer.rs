use crate::error::{Error, Result};

/// Zeroes the first `size` elements of `buffer`.
///
/// Fails without touching the buffer if `size` is larger than the buffer.
pub fn clear_buffer<T: Default>(buffer: &mut [T], size: usize) -> Result<()> {
    let len = buffer.len();
    let prefix = buffer
        .get_mut(..size)
        .ok_or_else(|| Error::reject(Error::BufferSize { size, len }))?;
    prefix.fill_with(T::default);
    Ok(())
}
