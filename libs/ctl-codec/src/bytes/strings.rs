//! String fields
//!
//! Strings inside message bodies are NUL-terminated. A missing terminator is
//! not an error: the end of the buffer terminates the string implicitly.

use super::{decode, field};
use crate::error::{CodecError, Result};

/// Read the string starting at `pos` up to the first zero byte or buffer end
///
/// The terminator is not included. `pos == buf.len()` yields an empty string;
/// a start position beyond the end is out of bounds.
pub fn read_cstring(buf: &[u8], pos: usize) -> Result<String> {
    let rest = buf.get(pos..).ok_or_else(|| {
        tracing::debug!(pos, len = buf.len(), "String start outside buffer");
        CodecError::out_of_bounds(pos, 0, buf.len())
    })?;

    let len = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());
    tracing::trace!(pos, len, terminated = len < rest.len(), "Read C string");
    Ok(decode(&rest[..len]))
}

/// Copy a raw payload into `buf[pos..pos + src.len()]`
///
/// Used for variable-length tails (paths, addresses) that follow fixed
/// integer fields.
pub fn write_bytes(buf: &mut [u8], pos: usize, src: &[u8]) -> Result<()> {
    let range = field(buf.len(), pos, src.len())?;
    buf[range].copy_from_slice(src);
    Ok(())
}
