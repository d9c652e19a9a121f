//! Encoder - greedy longest-match code emission
//!
//! This module implements the single-pass encoding loop. It keeps extending
//! the current phrase while the extension is already learned, and on the
//! first miss emits the current phrase's code, learns the extension and
//! restarts from the byte that caused the miss.

use super::{dictionary::Dictionary, pattern::Pattern};
use crate::common::{
    literal_code, CompressionOptions, CompressionStats, FIRST_LEARNED_CODE, MIN_INPUT_LEN,
};
use crate::{LzwError, Result};

/// Result of one compression call
#[derive(Debug, Clone)]
pub struct Encoded {
    codes: Vec<u8>,
    learned: Vec<Pattern>,
    stats: CompressionStats,
}

impl Encoded {
    /// Emitted code stream
    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    /// Take ownership of the emitted code stream
    pub fn into_codes(self) -> Vec<u8> {
        self.codes
    }

    /// Number of emitted codes
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether nothing was emitted (only for empty input)
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Phrases learned during the call, indexed by `code - 0x80`
    pub fn learned_phrases(&self) -> &[Pattern] {
        &self.learned
    }

    /// Bytes a learned code stood for during this call
    pub fn learned_phrase(&self, code: u8) -> Option<&[u8]> {
        let index = (code as usize).checked_sub(FIRST_LEARNED_CODE as usize)?;
        self.learned.get(index).map(Pattern::as_bytes)
    }

    /// Statistics for the call
    pub fn stats(&self) -> &CompressionStats {
        &self.stats
    }
}

/// Bounded output for emitted codes
#[derive(Debug)]
struct CodeSink {
    codes: Vec<u8>,
    capacity: usize,
}

impl CodeSink {
    fn new(capacity: usize, input_len: usize) -> Result<Self> {
        // Never more codes than input bytes
        let requested = capacity.min(input_len);
        let mut codes = Vec::new();
        codes
            .try_reserve_exact(requested)
            .map_err(|_| LzwError::AllocationFailure { requested })?;
        Ok(Self { codes, capacity })
    }

    fn push(&mut self, code: u8) -> Result<()> {
        if self.codes.len() >= self.capacity {
            return Err(LzwError::OutputOverflow {
                capacity: self.capacity,
            });
        }
        self.codes.push(code);
        Ok(())
    }
}

/// Greedy single-byte-code LZW encoder
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    options: CompressionOptions,
}

impl Encoder {
    /// Create an encoder with the given options
    pub fn new(options: CompressionOptions) -> Self {
        Self { options }
    }

    /// Options this encoder was created with
    pub fn options(&self) -> &CompressionOptions {
        &self.options
    }

    /// Compress `input` into a fresh code stream
    ///
    /// Inputs shorter than [`MIN_INPUT_LEN`] are returned unchanged. Every
    /// call builds its own dictionary, so an encoder can be shared freely.
    pub fn encode(&self, input: &[u8]) -> Result<Encoded> {
        if input.len() < MIN_INPUT_LEN {
            log::debug!("input of {} bytes too short, passing through", input.len());
            return passthrough(input);
        }

        if let Some(position) = input.iter().position(|&b| literal_code(b).is_none()) {
            return Err(LzwError::UnsupportedByte {
                byte: input[position],
                position,
            });
        }

        let mut dictionary = Dictionary::new()?;
        let mut sink = CodeSink::new(self.options.output_capacity, input.len())?;
        let mut stats = CompressionStats {
            bytes_processed: input.len(),
            ..Default::default()
        };

        let mut current = Pattern::literal(input[0]);

        for &byte in &input[1..] {
            debug_assert!(dictionary.contains(&current));

            let candidate = current.extend(byte)?;
            if dictionary.find_code(&candidate).is_some() {
                current = candidate;
                continue;
            }

            let code = dictionary.code_for(&current)?;
            emit(&mut sink, &mut stats, code, current.len())?;

            dictionary.insert_learned(candidate)?;
            stats.learned_phrases += 1;
            current = Pattern::literal(byte);
        }

        match current.single_byte() {
            Some(byte) => {
                debug_assert_eq!(dictionary.code_for(&current).ok(), Some(byte));
                emit(&mut sink, &mut stats, byte, 1)?;
            }
            None => {
                let code = dictionary.code_for(&current)?;
                emit(&mut sink, &mut stats, code, current.len())?;
            }
        }

        stats.codes_emitted = sink.codes.len();
        stats.finish();

        log::debug!(
            "compressed {} bytes into {} codes ({} learned phrases, longest {})",
            stats.bytes_processed,
            stats.codes_emitted,
            stats.learned_phrases,
            stats.longest_phrase
        );

        Ok(Encoded {
            codes: sink.codes,
            learned: dictionary.into_learned(),
            stats,
        })
    }
}

fn emit(
    sink: &mut CodeSink,
    stats: &mut CompressionStats,
    code: u8,
    phrase_len: usize,
) -> Result<()> {
    log::trace!("emit 0x{:02X} for {} byte phrase", code, phrase_len);
    sink.push(code)?;
    stats.longest_phrase = stats.longest_phrase.max(phrase_len);
    Ok(())
}

fn passthrough(input: &[u8]) -> Result<Encoded> {
    let mut codes = Vec::new();
    codes
        .try_reserve_exact(input.len())
        .map_err(|_| LzwError::AllocationFailure {
            requested: input.len(),
        })?;
    codes.extend_from_slice(input);

    let mut stats = CompressionStats {
        bytes_processed: input.len(),
        codes_emitted: input.len(),
        longest_phrase: input.len().min(1),
        ..Default::default()
    };
    stats.finish();

    Ok(Encoded {
        codes,
        learned: Vec::new(),
        stats,
    })
}
