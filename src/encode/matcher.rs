//! Pattern lookup against the dictionary
//!
//! Two lookups drive the encoder: [`Dictionary::find_code`] answers "has this
//! candidate already been learned?", and [`Dictionary::code_for`] resolves the
//! code of a phrase the encoder already knows is present.

use super::{dictionary::Dictionary, pattern::Pattern};
use crate::{LzwError, Result};

impl Dictionary {
    /// Find the code of a learned phrase matching `pattern` exactly
    ///
    /// Only the learned region is searched; literal codes are never returned.
    /// Returns `None` when no learned phrase matches, including when nothing
    /// has been learned yet.
    pub fn find_code(&self, pattern: &Pattern) -> Option<u8> {
        self.learned()
            .find(|entry| entry.pattern.as_bytes() == pattern.as_bytes())
            .map(|entry| entry.code)
    }

    /// Resolve the code of a pattern that must already be in the dictionary
    ///
    /// Single-byte literals resolve to their own value without a scan. A
    /// pattern absent from both regions is an internal invariant violation
    /// and comes back as [`LzwError::PatternNotFound`].
    pub fn code_for(&self, pattern: &Pattern) -> Result<u8> {
        if let Some(code) = Self::literal_for(pattern) {
            return Ok(code);
        }

        self.find_code(pattern)
            .ok_or(LzwError::PatternNotFound {
                length: pattern.len(),
            })
    }

    /// Whether `pattern` has any code, literal or learned
    pub fn contains(&self, pattern: &Pattern) -> bool {
        Self::literal_for(pattern).is_some() || self.find_code(pattern).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(bytes: &[u8]) -> Pattern {
        let (first, rest) = bytes.split_first().unwrap();
        rest.iter()
            .try_fold(Pattern::literal(*first), |acc, &b| acc.extend(b))
            .unwrap()
    }

    #[test]
    fn test_find_code_empty_learned_region() {
        let dict = Dictionary::new().unwrap();
        assert_eq!(dict.find_code(&pattern(b"th")), None);
        // Literals live outside the learned region
        assert_eq!(dict.find_code(&pattern(b"t")), None);
    }

    #[test]
    fn test_find_code_exact_match() {
        let mut dict = Dictionary::new().unwrap();
        dict.insert_learned(pattern(b"th")).unwrap();
        dict.insert_learned(pattern(b"thi")).unwrap();
        dict.insert_learned(pattern(b"hi")).unwrap();

        assert_eq!(dict.find_code(&pattern(b"th")), Some(0x80));
        assert_eq!(dict.find_code(&pattern(b"thi")), Some(0x81));
        assert_eq!(dict.find_code(&pattern(b"hi")), Some(0x82));
        // Same length, different bytes
        assert_eq!(dict.find_code(&pattern(b"ht")), None);
        // Prefix of a learned phrase
        assert_eq!(dict.find_code(&pattern(b"thin")), None);
    }

    #[test]
    fn test_find_code_differs_only_in_last_byte() {
        let mut dict = Dictionary::new().unwrap();
        dict.insert_learned(pattern(&[0x00, 0x00, 0x56])).unwrap();
        assert_eq!(dict.find_code(&pattern(&[0x00, 0x00, 0x00])), None);
    }

    #[test]
    fn test_code_for_literal_and_learned() {
        let mut dict = Dictionary::new().unwrap();
        dict.insert_learned(pattern(&[0x04, 0x04])).unwrap();

        assert_eq!(dict.code_for(&pattern(&[0x04])).unwrap(), 0x04);
        assert_eq!(dict.code_for(&pattern(&[0x7F])).unwrap(), 0x7F);
        assert_eq!(dict.code_for(&pattern(&[0x04, 0x04])).unwrap(), 0x80);
    }

    #[test]
    fn test_code_for_missing_pattern() {
        let dict = Dictionary::new().unwrap();

        let err = dict.code_for(&pattern(b"abc")).unwrap_err();
        assert!(matches!(err, LzwError::PatternNotFound { length: 3 }));

        // Bytes above the literal range have no code
        let err = dict.code_for(&pattern(&[0x90])).unwrap_err();
        assert!(matches!(err, LzwError::PatternNotFound { length: 1 }));
    }

    #[test]
    fn test_contains() {
        let mut dict = Dictionary::new().unwrap();
        assert!(dict.contains(&pattern(b"a")));
        assert!(!dict.contains(&pattern(b"ab")));
        dict.insert_learned(pattern(b"ab")).unwrap();
        assert!(dict.contains(&pattern(b"ab")));
    }
}
