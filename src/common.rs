//! Common types and constants for the byte-code LZW compressor
//!
//! This module defines the code-space layout, the error type, the per-call
//! configuration and the statistics shared by the encoder and its callers.

use thiserror::Error;

/// Total number of codes in the dictionary (one byte per code)
pub const DICT_SIZE: usize = 256;

/// Number of pre-populated literal codes (`0x00..=0x7F`)
pub const LITERAL_COUNT: usize = 128;

/// Number of learned-phrase slots (`0x80..=0xFF`)
pub const LEARNED_CAPACITY: usize = DICT_SIZE - LITERAL_COUNT;

/// First code handed out to a learned phrase
pub const FIRST_LEARNED_CODE: u8 = 0x80;

/// Inputs shorter than this are copied through unchanged
pub const MIN_INPUT_LEN: usize = 3;

/// Default maximum number of emitted codes per call
pub const OUTPUT_CAPACITY: usize = 500;

/// Literal code for a byte in the literal range
///
/// Literal codes are assigned so that each one equals the byte it stands for.
/// The encoder's final flush relies on this when it emits a single-byte
/// pattern's value directly.
pub const fn literal_code(byte: u8) -> Option<u8> {
    if (byte as usize) < LITERAL_COUNT {
        Some(byte)
    } else {
        None
    }
}

/// Check whether a code refers to a learned phrase
pub const fn is_learned_code(code: u8) -> bool {
    code >= FIRST_LEARNED_CODE
}

/// Error type for compression operations
#[derive(Debug, Error)]
pub enum LzwError {
    /// A dictionary or pattern buffer could not be allocated
    #[error("Memory allocation failed ({requested} bytes requested)")]
    AllocationFailure {
        /// Number of bytes the failed reservation asked for
        requested: usize,
    },

    /// The input needs more learned phrases than the code space holds
    #[error("Dictionary overflow: input needs more than {capacity} learned phrases")]
    DictionaryOverflow {
        /// Number of learned slots available
        capacity: usize,
    },

    /// The emitted code stream would exceed the output capacity
    #[error("Output overflow: more than {capacity} codes would be emitted")]
    OutputOverflow {
        /// Configured output capacity
        capacity: usize,
    },

    /// A pattern expected to be in the dictionary was not found
    #[error("Internal error: pattern of length {length} has no dictionary code")]
    PatternNotFound {
        /// Length of the missing pattern
        length: usize,
    },

    /// Input byte outside the literal range
    #[error("Unsupported byte 0x{byte:02X} at position {position} (literal range is 0x00-0x7F)")]
    UnsupportedByte {
        /// Offending byte value
        byte: u8,
        /// Offset of the byte in the input
        position: usize,
    },

    /// Requested length is larger than the buffer
    #[error("Invalid length {length} for buffer of {buffer_len} bytes")]
    InvalidLength {
        /// Requested length
        length: usize,
        /// Actual buffer length
        buffer_len: usize,
    },

    /// Background compression task failed to complete
    #[error("Compression task failed: {0}")]
    TaskFailed(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for compression operations
pub type Result<T> = std::result::Result<T, LzwError>;

/// Per-call compression configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionOptions {
    /// Maximum number of codes a single call may emit
    pub output_capacity: usize,
}

impl CompressionOptions {
    /// Create options with the default output capacity
    pub fn new() -> Self {
        Self {
            output_capacity: OUTPUT_CAPACITY,
        }
    }

    /// Set the output capacity
    pub fn with_output_capacity(mut self, capacity: usize) -> Self {
        self.output_capacity = capacity;
        self
    }
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics for a single compression call
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CompressionStats {
    /// Input bytes consumed
    pub bytes_processed: usize,
    /// Codes written to the output
    pub codes_emitted: usize,
    /// Learned phrases inserted into the dictionary
    pub learned_phrases: usize,
    /// Length of the longest phrase emitted as a single code
    pub longest_phrase: usize,
    /// Output size divided by input size
    pub compression_ratio: f64,
}

impl CompressionStats {
    pub(crate) fn finish(&mut self) {
        self.compression_ratio = if self.bytes_processed > 0 {
            self.codes_emitted as f64 / self.bytes_processed as f64
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_space_layout() {
        assert_eq!(DICT_SIZE, 256);
        assert_eq!(LITERAL_COUNT + LEARNED_CAPACITY, DICT_SIZE);
        assert_eq!(FIRST_LEARNED_CODE as usize, LITERAL_COUNT);
        assert_eq!(MIN_INPUT_LEN, 3);
        assert_eq!(OUTPUT_CAPACITY, 500);
    }

    #[test]
    fn test_literal_code_equals_byte() {
        for byte in 0x00..=0x7Fu8 {
            assert_eq!(literal_code(byte), Some(byte));
            assert!(!is_learned_code(byte));
        }
        for byte in 0x80..=0xFFu8 {
            assert_eq!(literal_code(byte), None);
            assert!(is_learned_code(byte));
        }
    }

    #[test]
    fn test_options_builder() {
        let options = CompressionOptions::default();
        assert_eq!(options.output_capacity, OUTPUT_CAPACITY);

        let options = CompressionOptions::new().with_output_capacity(16);
        assert_eq!(options.output_capacity, 16);
    }

    #[test]
    fn test_stats_ratio() {
        let mut stats = CompressionStats {
            bytes_processed: 8,
            codes_emitted: 6,
            ..Default::default()
        };
        stats.finish();
        assert!((stats.compression_ratio - 0.75).abs() < f64::EPSILON);

        let mut empty = CompressionStats::default();
        empty.finish();
        assert_eq!(empty.compression_ratio, 0.0);
    }

    #[test]
    fn test_error_messages() {
        let err = LzwError::UnsupportedByte {
            byte: 0x9A,
            position: 4,
        };
        assert_eq!(
            err.to_string(),
            "Unsupported byte 0x9A at position 4 (literal range is 0x00-0x7F)"
        );

        let err = LzwError::DictionaryOverflow { capacity: 128 };
        assert!(err.to_string().contains("128"));
    }
}
