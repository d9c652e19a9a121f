//! Dictionary state management
//!
//! The dictionary is an arena of entries indexed by code. Codes `0x00..=0x7F`
//! hold the literal patterns; codes `0x80..=0xFF` are handed out to learned
//! phrases in strict order, tracked by an explicit next-free slot.

use super::pattern::Pattern;
use crate::common::{
    literal_code, DICT_SIZE, FIRST_LEARNED_CODE, LEARNED_CAPACITY, LITERAL_COUNT,
};
use crate::{LzwError, Result};

/// A single code-to-pattern mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Code emitted for this pattern
    pub code: u8,
    /// Bytes the code stands for
    pub pattern: Pattern,
}

/// Fixed-capacity code table for one compression call
#[derive(Debug)]
pub struct Dictionary {
    /// Populated entries; `entries[i].code == i`
    entries: Vec<DictionaryEntry>,
}

impl Dictionary {
    /// Create a dictionary holding every literal code and no learned phrases
    pub fn new() -> Result<Self> {
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(DICT_SIZE)
            .map_err(|_| LzwError::AllocationFailure {
                requested: DICT_SIZE * std::mem::size_of::<DictionaryEntry>(),
            })?;

        for byte in 0..LITERAL_COUNT as u8 {
            entries.push(DictionaryEntry {
                code: byte,
                pattern: Pattern::literal(byte),
            });
        }

        Ok(Self { entries })
    }

    /// Move `pattern` into the next free learned slot and return its code
    ///
    /// Fails with [`LzwError::DictionaryOverflow`] once all learned slots are
    /// taken; the dictionary is left unchanged in that case.
    pub fn insert_learned(&mut self, pattern: Pattern) -> Result<u8> {
        if self.is_full() {
            return Err(LzwError::DictionaryOverflow {
                capacity: LEARNED_CAPACITY,
            });
        }

        let code = self.next_code();
        log::trace!("learned 0x{:02X} -> {:02X?}", code, pattern.as_bytes());
        self.entries.push(DictionaryEntry { code, pattern });
        Ok(code)
    }

    /// Look up the entry for a code, if that code is populated
    pub fn get(&self, code: u8) -> Option<&DictionaryEntry> {
        self.entries.get(code as usize)
    }

    /// Number of learned phrases inserted so far
    pub fn learned_count(&self) -> usize {
        self.entries.len() - LITERAL_COUNT
    }

    /// Whether every learned slot is taken
    pub fn is_full(&self) -> bool {
        self.learned_count() >= LEARNED_CAPACITY
    }

    /// Learned entries in code order
    pub fn learned(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries[LITERAL_COUNT..].iter()
    }

    /// Release the dictionary, handing out the learned phrases in code order
    pub fn into_learned(mut self) -> Vec<Pattern> {
        self.entries
            .drain(LITERAL_COUNT..)
            .map(|entry| entry.pattern)
            .collect()
    }

    /// Code the next learned phrase will receive
    fn next_code(&self) -> u8 {
        FIRST_LEARNED_CODE + self.learned_count() as u8
    }

    /// Literal code for a single-byte pattern
    pub(super) fn literal_for(pattern: &Pattern) -> Option<u8> {
        pattern.single_byte().and_then(literal_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals_populated() {
        let dict = Dictionary::new().unwrap();
        for byte in 0..LITERAL_COUNT as u8 {
            let entry = dict.get(byte).unwrap();
            assert_eq!(entry.code, byte);
            assert_eq!(entry.pattern.as_bytes(), &[byte]);
        }
        assert_eq!(dict.learned_count(), 0);
        assert!(dict.get(FIRST_LEARNED_CODE).is_none());
        assert!(dict.get(0xFF).is_none());
    }

    #[test]
    fn test_sequential_insert() {
        let mut dict = Dictionary::new().unwrap();
        let ab = Pattern::literal(b'a').extend(b'b').unwrap();
        let bc = Pattern::literal(b'b').extend(b'c').unwrap();

        assert_eq!(dict.insert_learned(ab.clone()).unwrap(), 0x80);
        assert_eq!(dict.insert_learned(bc.clone()).unwrap(), 0x81);
        assert_eq!(dict.learned_count(), 2);
        assert_eq!(dict.get(0x80).unwrap().pattern, ab);
        assert_eq!(dict.get(0x81).unwrap().pattern, bc);
        assert!(dict.get(0x82).is_none());

        let codes: Vec<u8> = dict.learned().map(|entry| entry.code).collect();
        assert_eq!(codes, vec![0x80, 0x81]);
    }

    #[test]
    fn test_overflow_leaves_dictionary_intact() {
        let mut dict = Dictionary::new().unwrap();
        for i in 0..LEARNED_CAPACITY {
            let pattern = Pattern::literal(0).extend(i as u8).unwrap();
            dict.insert_learned(pattern).unwrap();
        }
        assert!(dict.is_full());
        assert_eq!(dict.get(0xFF).unwrap().code, 0xFF);

        let extra = Pattern::literal(1).extend(1).unwrap();
        let err = dict.insert_learned(extra).unwrap_err();
        assert!(matches!(
            err,
            LzwError::DictionaryOverflow {
                capacity: LEARNED_CAPACITY
            }
        ));
        assert_eq!(dict.learned_count(), LEARNED_CAPACITY);
    }

    #[test]
    fn test_into_learned() {
        let mut dict = Dictionary::new().unwrap();
        let xy = Pattern::literal(b'x').extend(b'y').unwrap();
        dict.insert_learned(xy.clone()).unwrap();

        let learned = dict.into_learned();
        assert_eq!(learned, vec![xy]);
    }

    #[test]
    fn test_literal_for() {
        assert_eq!(Dictionary::literal_for(&Pattern::literal(0x41)), Some(0x41));
        assert_eq!(Dictionary::literal_for(&Pattern::literal(0x80)), None);
        let pair = Pattern::literal(0x41).extend(0x42).unwrap();
        assert_eq!(Dictionary::literal_for(&pair), None);
    }
}
