//! Fixed-width unsigned integer fields
//!
//! All multi-byte values use network byte order (most significant byte first).
//!
//! For 32-bit value `0x12345678` at position `p`:
//! `buf[p..p + 4] == [0x12, 0x34, 0x56, 0x78]`
//!
//! Every accessor checks `pos + width <= buf.len()` before touching the buffer,
//! so a rejected write leaves it unchanged.

use super::field;
use crate::error::{CodecError, Result};

// ============================================================================
// Writes
// ============================================================================

/// Write a single byte at `pos`
pub fn write_u8(buf: &mut [u8], pos: usize, value: u8) -> Result<()> {
    let range = field(buf.len(), pos, 1)?;
    buf[range.start] = value;
    Ok(())
}

/// Write a 16-bit value at `buf[pos..pos + 2]`, high byte first
pub fn write_u16(buf: &mut [u8], pos: usize, value: u16) -> Result<()> {
    let range = field(buf.len(), pos, 2)?;
    buf[range].copy_from_slice(&value.to_be_bytes());
    Ok(())
}

/// Write a 32-bit value at `buf[pos..pos + 4]`, high byte first
pub fn write_u32(buf: &mut [u8], pos: usize, value: u32) -> Result<()> {
    let range = field(buf.len(), pos, 4)?;
    buf[range].copy_from_slice(&value.to_be_bytes());
    Ok(())
}

/// Write a decimal identifier (e.g. `"4294967295"`) as a 32-bit field
///
/// Inverse of [`read_u32_str`]. The text must be an unsigned decimal that fits
/// in 32 bits; nothing is written if parsing or the bounds check fails.
pub fn write_u32_str(buf: &mut [u8], pos: usize, decimal: &str) -> Result<()> {
    let value: u32 = decimal
        .parse()
        .map_err(|e| CodecError::invalid_number(format!("{:?}: {}", decimal, e)))?;
    write_u32(buf, pos, value)
}

// ============================================================================
// Reads
// ============================================================================

/// Read the byte at `pos`
pub fn read_u8(buf: &[u8], pos: usize) -> Result<u8> {
    let range = field(buf.len(), pos, 1)?;
    Ok(buf[range.start])
}

/// Read a 16-bit value; `buf[pos]` is the high byte
pub fn read_u16(buf: &[u8], pos: usize) -> Result<u16> {
    let range = field(buf.len(), pos, 2)?;
    let p = range.start;
    Ok(u16::from_be_bytes([buf[p], buf[p + 1]]))
}

/// Read a 32-bit value composed as `(b0 << 24) | (b1 << 16) | (b2 << 8) | b3`
pub fn read_u32(buf: &[u8], pos: usize) -> Result<u32> {
    let range = field(buf.len(), pos, 4)?;
    let p = range.start;
    Ok(u32::from_be_bytes([buf[p], buf[p + 1], buf[p + 2], buf[p + 3]]))
}

/// Read a 32-bit value rendered as its unsigned decimal string
///
/// For callers that carry identifiers as text rather than integers.
pub fn read_u32_str(buf: &[u8], pos: usize) -> Result<String> {
    let value = read_u32(buf, pos)?;
    let mut buffer = itoa::Buffer::new();
    Ok(buffer.format(value).to_owned())
}
