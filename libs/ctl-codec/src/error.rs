//! Codec Error Types
//!
//! Errors surfaced by buffer access, number parsing and configuration.

use thiserror::Error;

/// Result type for ctl-codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Codec errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Fixed-width access or copy past the end of the buffer
    #[error("Out of bounds: {width}-byte access at position {pos} exceeds buffer length {len}")]
    OutOfBounds { pos: usize, width: usize, len: usize },

    /// Decimal text that does not fit an unsigned field
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for CodecError {
    fn from(err: figment::Error) -> Self {
        CodecError::Config(err.to_string())
    }
}

// Helper methods for creating errors
impl CodecError {
    pub fn out_of_bounds(pos: usize, width: usize, len: usize) -> Self {
        CodecError::OutOfBounds { pos, width, len }
    }

    pub fn invalid_number(msg: impl Into<String>) -> Self {
        CodecError::InvalidNumber(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        CodecError::Config(msg.into())
    }

    /// Check if this error is a rejected buffer access
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, CodecError::OutOfBounds { .. })
    }
}
