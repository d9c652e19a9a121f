//! LZW encode (compression) implementation
//!
//! This module provides the single-byte-code LZW compressor: a 256-entry
//! dictionary with 128 literal codes and 128 learned-phrase codes, filled by a
//! greedy longest-match scan.

mod dictionary;
mod encoder;
mod matcher;
mod pattern;

pub use dictionary::{Dictionary, DictionaryEntry};
pub use encoder::{Encoded, Encoder};
pub use pattern::Pattern;

use crate::common::{CompressionOptions, MIN_INPUT_LEN};
use crate::{LzwError, Result};

/// Compress `buffer[..length]` in place and return the compressed length
///
/// The caller's buffer is only written after the whole call has succeeded;
/// on error it is left exactly as it was.
pub fn compress_with_options(
    buffer: &mut [u8],
    length: usize,
    options: &CompressionOptions,
) -> Result<usize> {
    let buffer_len = buffer.len();
    let data = buffer
        .get_mut(..length)
        .ok_or(LzwError::InvalidLength { length, buffer_len })?;

    if length < MIN_INPUT_LEN {
        log::debug!("input of {} bytes too short, leaving buffer as is", length);
        return Ok(length);
    }

    let encoded = Encoder::new(*options).encode(data)?;
    let codes = encoded.codes();
    data[..codes.len()].copy_from_slice(codes);
    Ok(codes.len())
}

/// Convenience function to compress data into a new vector
pub fn compress_bytes(data: &[u8], options: &CompressionOptions) -> Result<Vec<u8>> {
    Ok(Encoder::new(*options).encode(data)?.into_codes())
}
