//! ctl-codec
//!
//! Field-level encoding helpers for byte-oriented control protocol clients,
//! where message bodies are flat byte arrays with fields at known offsets.
//!
//! # Architecture
//!
//! This library provides:
//! - **Integers**: big-endian `u8`/`u16`/`u32` reads and writes, bounds-checked
//! - **Strings**: NUL-terminated extraction and raw payload copies
//! - **Tokenization**: delimiter splitting over buffers, whitespace splitting over text
//! - **Hex**: uppercase rendering for diagnostics
//!
//! All operations are stateless. Writes take `&mut [u8]`, so the borrow checker
//! enforces that no one else touches the buffer while it is being written.
//!
//! ```
//! use ctl_codec::{hex, read_cstring, read_u32_str, write_u16, write_u32};
//!
//! let mut body = *b"\0\0\0\0\0\0ok\0";
//! write_u32(&mut body, 0, u32::MAX)?;
//! write_u16(&mut body, 4, 0x0102)?;
//!
//! assert_eq!(read_u32_str(&body, 0)?, "4294967295");
//! assert_eq!(read_cstring(&body, 6)?, "ok");
//! assert_eq!(hex(&body[4..6]), "0102");
//! # Ok::<(), ctl_codec::CodecError>(())
//! ```

pub mod bytes;
pub mod config;
pub mod error;
pub mod hex;
pub mod logging;

// Re-export core operations
pub use bytes::{
    read_cstring, read_u16, read_u32, read_u32_str, read_u8, split_buffer, split_text,
    write_bytes, write_u16, write_u32, write_u32_str, write_u8,
};
pub use config::{load_config, load_config_from_file, CodecConfig};
pub use error::{CodecError, Result};
pub use hex::hex;
pub use logging::{init_logging, LogConfig, LogFormat};
