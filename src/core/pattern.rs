//! Compiled positional pattern
//!
//! A compiled pattern is a fixed-size sequence of per-position rules:
//! - `Some(c)` = the candidate must have exactly `c` here
//! - `None`    = any single character is accepted here
//!
//! Matching is a straight position-by-position scan. There is no pattern
//! syntax, so literal characters never need escaping.

use super::SlotSpec;
use std::fmt;

/// Matchable form of a [`SlotSpec`]
///
/// Only accepts candidates with exactly `len()` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    rules: Box<[Option<char>]>,
    /// Set when every literal is ASCII, enabling the byte-level scan
    ascii: bool,
}

impl CompiledPattern {
    /// Compile a slot specification
    ///
    /// # Examples
    /// ```
    /// use wordslot::core::{CompiledPattern, SlotSpec};
    ///
    /// let spec = SlotSpec::from_raw(&["c", "r", "", "", "e"]).unwrap();
    /// let pattern = CompiledPattern::compile(&spec);
    ///
    /// assert!(pattern.is_match("crane"));
    /// assert!(pattern.is_match("crate"));
    /// assert!(!pattern.is_match("grate"));
    /// assert!(!pattern.is_match("cranes"));
    /// ```
    #[must_use]
    pub fn compile(spec: &SlotSpec) -> Self {
        let rules: Box<[Option<char>]> = spec.slots().iter().map(|s| s.letter()).collect();
        let ascii = rules.iter().flatten().all(char::is_ascii);
        Self { rules, ascii }
    }

    /// Number of characters a candidate must have
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule at a position (`None` = wildcard)
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn rule_at(&self, position: usize) -> Option<char> {
        self.rules[position]
    }

    /// Test a candidate against every position
    ///
    /// Case-sensitive; no normalization is applied to either side.
    #[must_use]
    pub fn is_match(&self, candidate: &str) -> bool {
        if self.ascii && candidate.is_ascii() {
            return self.is_match_ascii(candidate.as_bytes());
        }

        let mut chars = candidate.chars();
        for rule in &self.rules {
            match (rule, chars.next()) {
                (_, None) => return false,
                (Some(expected), Some(actual)) if *expected != actual => return false,
                _ => {}
            }
        }
        // Candidate must not be longer than the pattern
        chars.next().is_none()
    }

    fn is_match_ascii(&self, candidate: &[u8]) -> bool {
        candidate.len() == self.rules.len()
            && self.rules.iter().zip(candidate).all(|(rule, &byte)| {
                rule.is_none_or(|expected| u32::from(expected) == u32::from(byte))
            })
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            match rule {
                Some(ch) => write!(f, "{ch}")?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}
