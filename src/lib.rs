//! bytelzw - single-byte-code LZW compression
//!
//! This crate compresses byte buffers with an LZW-style dictionary coder whose
//! codes are single bytes. Codes `0x00..=0x7F` stand for themselves; codes
//! `0x80..=0xFF` are assigned to multi-byte phrases as they are discovered
//! during a single greedy pass over the input.
//!
//! # Features
//!
//! - In-place compression of a caller-owned buffer
//! - Fixed 256-entry code space, created fresh for every call
//! - Every failure (dictionary overflow, output overflow, allocation failure)
//!   is a recoverable error that leaves the caller's buffer untouched
//! - Optional async batch processing behind the `async` feature
//!
//! There is no decoder and no container format: the output is the raw code
//! stream.
//!
//! # Example
//!
//! ```
//! use bytelzw::compress;
//!
//! let mut buffer = *b"thisthis";
//! let length = compress(&mut buffer, 8)?;
//! assert_eq!(length, 6);
//! assert_eq!(&buffer[..length], &[0x74, 0x68, 0x69, 0x73, 0x80, 0x82]);
//! # Ok::<(), bytelzw::LzwError>(())
//! ```
//!
//! # Example - Inspecting learned phrases
//!
//! ```
//! use bytelzw::{CompressionOptions, Encoder};
//!
//! let encoded = Encoder::new(CompressionOptions::default()).encode(b"thisisthe")?;
//! assert_eq!(encoded.codes(), &[0x74, 0x68, 0x69, 0x73, 0x82, 0x80, 0x65]);
//! assert_eq!(encoded.learned_phrase(0x82), Some(&b"is"[..]));
//! # Ok::<(), bytelzw::LzwError>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// Public modules
pub mod common;
pub mod encode;
pub mod error;

// Async modules (only available with async feature)
#[cfg(feature = "async")]
pub mod async_batch;

// Re-export commonly used types
pub use common::{
    is_learned_code, literal_code, CompressionOptions, CompressionStats, LzwError, Result,
    DICT_SIZE, FIRST_LEARNED_CODE, LEARNED_CAPACITY, LITERAL_COUNT, MIN_INPUT_LEN,
    OUTPUT_CAPACITY,
};
pub use encode::{Dictionary, DictionaryEntry, Encoded, Encoder, Pattern};

// Re-export async types when async feature is enabled
#[cfg(feature = "async")]
pub use async_batch::{compress_bytes_async, AsyncBatchCompressor};

// Convenience functions

/// Compress a buffer in place
///
/// # Arguments
/// * `buffer` - Buffer holding the data; compressed codes overwrite its start
/// * `length` - Number of bytes of `buffer` to compress
///
/// # Returns
/// The compressed length. Inputs shorter than 3 bytes are left as they are and
/// their length is returned unchanged. Bytes past the returned length are stale.
pub fn compress(buffer: &mut [u8], length: usize) -> Result<usize> {
    encode::compress_with_options(buffer, length, &CompressionOptions::default())
}

/// Compress a buffer in place with explicit options
///
/// # Arguments
/// * `buffer` - Buffer holding the data
/// * `length` - Number of bytes of `buffer` to compress
/// * `options` - Output capacity and other per-call settings
pub fn compress_with_options(
    buffer: &mut [u8],
    length: usize,
    options: &CompressionOptions,
) -> Result<usize> {
    encode::compress_with_options(buffer, length, options)
}

/// Compress data into a new vector
///
/// # Arguments
/// * `data` - The data to compress
///
/// # Returns
/// A vector containing the emitted codes
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    encode::compress_bytes(data, &CompressionOptions::default())
}
