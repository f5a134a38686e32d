//! Tokenization
//!
//! Two distinct splitters:
//! - [`split_buffer`]: one delimiter byte, bounded by a zero byte or buffer end
//! - [`split_text`]: runs of whitespace in already-decoded text
//!
//! Neither ever produces an empty token.

use super::decode;

/// Split `buf[pos..]` on `delimiter`, appending tokens to `tokens` in order
///
/// The scan ends at the first zero byte that is not consumed as a delimiter,
/// or at the buffer end. Empty runs (leading, doubled or trailing delimiters)
/// are dropped.
///
/// With `delimiter == 0`, single NULs separate tokens and a double NUL ends
/// the scan.
pub fn split_buffer(tokens: &mut Vec<String>, buf: &[u8], pos: usize, delimiter: u8) {
    let start_count = tokens.len();
    let mut pos = pos;

    while pos < buf.len() && buf[pos] != 0 {
        let rest = &buf[pos..];
        let len = rest
            .iter()
            .position(|&b| b == 0 || b == delimiter)
            .unwrap_or(rest.len());

        if len > 0 {
            tokens.push(decode(&rest[..len]));
        }
        pos += len;

        if buf.get(pos) == Some(&delimiter) {
            pos += 1;
        }
    }

    tracing::trace!(
        delimiter,
        count = tokens.len() - start_count,
        "Split buffer"
    );
}

/// Split `text` on runs of ASCII whitespace
///
/// Tokens are appended to `tokens` when given, otherwise to a new vector.
pub fn split_text(tokens: Option<Vec<String>>, text: &str) -> Vec<String> {
    let mut tokens = tokens.unwrap_or_default();
    tokens.extend(text.split_ascii_whitespace().map(str::to_owned));
    tokens
}
