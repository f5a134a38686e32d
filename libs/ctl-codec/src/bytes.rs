//! Buffer field utilities
//!
//! Reads and writes the fields of flat control-protocol messages, where
//! values are packed into byte arrays at known offsets.
//!
//! # Conventions
//!
//! - **Big-endian**: multi-byte integers are stored most significant byte first
//! - **Checked**: fixed-width access outside the buffer is an error, never truncated
//! - **Permissive scans**: string scans stop at a zero byte or at the buffer end
//! - **Caller-owned**: buffers are borrowed, never allocated or retained

pub mod ints;
pub mod split;
pub mod strings;

pub use ints::*;
pub use split::*;
pub use strings::*;

use crate::error::{CodecError, Result};
use std::ops::Range;

/// Index range `pos..pos + width`, or `OutOfBounds` if it leaves the buffer.
pub(crate) fn field(len: usize, pos: usize, width: usize) -> Result<Range<usize>> {
    match pos.checked_add(width) {
        Some(end) if end <= len => Ok(pos..end),
        _ => {
            tracing::debug!(pos, width, len, "Rejected out of bounds buffer access");
            Err(CodecError::out_of_bounds(pos, width, len))
        },
    }
}

/// Decode buffer bytes with the crate's single text encoding (lossy UTF-8).
pub(crate) fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
