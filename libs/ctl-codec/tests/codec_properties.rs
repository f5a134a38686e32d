//! Codec property tests
//!
//! Observable contract of the buffer helpers:
//! - Write/read round trips at every valid position
//! - Network byte order and full unsigned 32-bit range
//! - Permissive string scans and empty-token dropping
//! - Hex rendering

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use ctl_codec::{
    hex, read_cstring, read_u16, read_u32, read_u32_str, split_buffer, split_text, write_u16,
    write_u32, CodecError,
};

// ============================================================================
// Integer Round Trips
// ============================================================================

#[test]
fn test_u16_roundtrip_all_positions() {
    let values = [0u16, 1, 0x00FF, 0x0100, 0x7FFF, 0x8000, 0xABCD, u16::MAX];

    for value in values {
        for pos in 0..=6 {
            let mut buf = [0u8; 8];
            write_u16(&mut buf, pos, value).unwrap();
            assert_eq!(read_u16(&buf, pos).unwrap(), value, "pos={}", pos);
        }
    }
}

#[test]
fn test_u16_roundtrip_exhaustive() {
    let mut buf = [0u8; 2];
    for value in 0..=u16::MAX {
        write_u16(&mut buf, 0, value).unwrap();
        assert_eq!(read_u16(&buf, 0).unwrap(), value);
    }
}

#[test]
fn test_u32_roundtrip_all_positions() {
    let values = [
        0u32,
        1,
        0x0000_FFFF,
        0x0001_0000,
        0x7FFF_FFFF,
        0x8000_0000,
        0xDEAD_BEEF,
        u32::MAX,
    ];

    for value in values {
        for pos in 0..=4 {
            let mut buf = [0u8; 8];
            write_u32(&mut buf, pos, value).unwrap();
            assert_eq!(read_u32(&buf, pos).unwrap(), value, "pos={}", pos);
        }
    }
}

#[test]
fn test_writes_touch_only_their_field() {
    let mut buf = [0x55u8; 8];
    write_u16(&mut buf, 1, 0).unwrap();
    write_u32(&mut buf, 4, 0).unwrap();
    assert_eq!(buf, [0x55, 0, 0, 0x55, 0, 0, 0, 0]);
}

// ============================================================================
// Byte Order
// ============================================================================

#[test]
fn test_u32_network_byte_order() {
    let mut buf = [0u8; 4];
    write_u32(&mut buf, 0, 0x01020304).unwrap();
    assert_eq!(buf, [0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn test_u32_max_is_unsigned() {
    let buf = [0xFF, 0xFF, 0xFF, 0xFF];
    assert_eq!(read_u32(&buf, 0).unwrap(), 4294967295);
    assert_eq!(read_u32_str(&buf, 0).unwrap(), "4294967295");
}

#[test]
fn test_bounds_violations() {
    let mut buf = [0u8; 4];
    assert!(matches!(
        write_u32(&mut buf, 1, 7),
        Err(CodecError::OutOfBounds {
            pos: 1,
            width: 4,
            len: 4
        })
    ));
    assert!(read_u16(&buf, 3).is_err());
    assert!(write_u16(&mut buf, usize::MAX, 1).is_err());
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_cstring_terminated_and_unterminated() {
    assert_eq!(read_cstring(b"hi\x00there", 0).unwrap(), "hi");
    assert_eq!(read_cstring(b"noterm", 0).unwrap(), "noterm");
}

#[test]
fn test_split_buffer_drops_empty_tokens() {
    let mut tokens = Vec::new();
    split_buffer(&mut tokens, b"a,b,,c\x00", 0, b',');
    assert_eq!(tokens, ["a", "b", "c"]);
}

#[test]
fn test_split_buffer_delimiter_at_start_and_before_nul() {
    let mut tokens = Vec::new();
    split_buffer(&mut tokens, b",a,\x00", 0, b',');
    assert_eq!(tokens, ["a"]);
}

#[test]
fn test_split_text_whitespace_runs() {
    assert_eq!(split_text(None, "  foo   bar baz  "), ["foo", "bar", "baz"]);
}

// ============================================================================
// Hex
// ============================================================================

#[test]
fn test_hex_rendering() {
    assert_eq!(hex(&[0x00, 0xFF, 0x1A]), "00FF1A");
    assert_eq!(hex(&[]), "");
}

#[test]
fn test_hex_is_pure() {
    let buf = [0xCA, 0xFE, 0x00, 0x01];
    assert_eq!(hex(&buf), hex(&buf));
    assert_eq!(hex(&buf).len(), 2 * buf.len());
}
