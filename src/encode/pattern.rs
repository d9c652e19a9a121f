//! Byte-buffer utilities for building phrases
//!
//! A [`Pattern`] is an owned byte sequence. Extending one never mutates it:
//! each extension allocates a fresh, independently owned pattern, so a
//! candidate can be moved into the dictionary while the encoder keeps working
//! with its own copy of the current phrase.

use crate::{LzwError, Result};

/// Owned byte sequence representing a phrase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    bytes: Vec<u8>,
}

impl Pattern {
    /// Create a one-byte pattern
    pub fn literal(byte: u8) -> Self {
        Self { bytes: vec![byte] }
    }

    /// Create a new pattern equal to this one with `next_byte` appended
    ///
    /// Allocation goes through `try_reserve_exact`, so running out of memory
    /// surfaces as [`LzwError::AllocationFailure`] instead of aborting.
    pub fn extend(&self, next_byte: u8) -> Result<Self> {
        let requested = self.bytes.len() + 1;
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(requested)
            .map_err(|_| LzwError::AllocationFailure { requested })?;
        bytes.extend_from_slice(&self.bytes);
        bytes.push(next_byte);
        Ok(Self { bytes })
    }

    /// Pattern contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes in the pattern
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for patterns built by [`Pattern::literal`] or [`Pattern::extend`]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// First byte of the pattern, when it is exactly one byte long
    pub fn single_byte(&self) -> Option<u8> {
        match self.bytes.as_slice() {
            [byte] => Some(*byte),
            _ => None,
        }
    }
}

impl AsRef<[u8]> for Pattern {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal() {
        let pattern = Pattern::literal(b'x');
        assert_eq!(pattern.as_bytes(), b"x");
        assert_eq!(pattern.len(), 1);
        assert!(!pattern.is_empty());
        assert_eq!(pattern.single_byte(), Some(b'x'));
    }

    #[test]
    fn test_extend_leaves_source_untouched() {
        let base = Pattern::literal(b't');
        let extended = base.extend(b'h').unwrap();
        let longer = extended.extend(b'i').unwrap();

        assert_eq!(base.as_bytes(), b"t");
        assert_eq!(extended.as_bytes(), b"th");
        assert_eq!(longer.as_bytes(), b"thi");
        assert_eq!(longer.single_byte(), None);
    }

    #[test]
    fn test_extend_is_independent_copy() {
        let base = Pattern::literal(0x04);
        let a = base.extend(0x04).unwrap();
        let b = base.extend(0x04).unwrap();
        assert_eq!(a, b);
        drop(a);
        assert_eq!(b.as_bytes(), &[0x04, 0x04]);
    }
}
