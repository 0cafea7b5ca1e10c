//! Slot specification
//!
//! A slot is one character position of the target word. It is either pinned
//! to a literal character or left open as a wildcard.

use crate::error::FinderError;
use std::fmt;

/// Characters accepted as wildcards in the compact pattern form
pub const WILDCARDS: [char; 4] = ['_', '.', '?', '*'];

/// A single position of the target word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Matches any single character
    Any,
    /// Must equal this character exactly
    Letter(char),
}

impl Slot {
    /// Parse one raw slot entry
    ///
    /// An empty string is a wildcard, a single character is a literal.
    ///
    /// # Errors
    /// Returns `FinderError::InvalidPattern` for entries of two or more characters.
    pub fn from_raw(position: usize, raw: &str) -> Result<Self, FinderError> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Self::Any),
            (Some(ch), None) => Ok(Self::Letter(ch)),
            (Some(_), Some(_)) => Err(FinderError::invalid_slot(position, raw)),
        }
    }

    /// The pinned letter, if any
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Any => None,
            Self::Letter(ch) => Some(ch),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "_"),
            Self::Letter(ch) => write!(f, "{ch}"),
        }
    }
}

/// Ordered sequence of slots describing the target word
///
/// Always holds at least one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSpec {
    slots: Vec<Slot>,
}

impl SlotSpec {
    /// Build from already-parsed slots
    ///
    /// # Errors
    /// Returns `FinderError::EmptyPattern` if `slots` is empty.
    pub fn new(slots: Vec<Slot>) -> Result<Self, FinderError> {
        if slots.is_empty() {
            return Err(FinderError::EmptyPattern);
        }
        Ok(Self { slots })
    }

    /// Build from raw per-position strings, each a single character or empty
    ///
    /// # Errors
    /// Returns `FinderError::EmptyPattern` for zero entries and
    /// `FinderError::InvalidPattern` for any multi-character entry.
    ///
    /// # Examples
    /// ```
    /// use wordslot::core::{Slot, SlotSpec};
    ///
    /// let spec = SlotSpec::from_raw(&["c", "r", "", "", "e"]).unwrap();
    /// assert_eq!(spec.len(), 5);
    /// assert_eq!(spec.slots()[2], Slot::Any);
    ///
    /// assert!(SlotSpec::from_raw(&["c", "ra"]).is_err());
    /// ```
    pub fn from_raw<S: AsRef<str>>(raw: &[S]) -> Result<Self, FinderError> {
        let slots = raw
            .iter()
            .enumerate()
            .map(|(i, entry)| Slot::from_raw(i, entry.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(slots)
    }

    /// Parse the compact one-string form, e.g. `"cr__e"`
    ///
    /// `_`, `.`, `?` and `*` are wildcards; every other character is a literal.
    /// Whitespace is rejected so that a stray space is not silently a literal.
    ///
    /// # Errors
    /// Returns `FinderError::EmptyPattern` for an empty string and
    /// `FinderError::InvalidPattern` at the first whitespace character.
    ///
    /// # Examples
    /// ```
    /// use wordslot::core::SlotSpec;
    ///
    /// let spec = SlotSpec::parse_compact("cr..e").unwrap();
    /// assert_eq!(spec.to_string(), "cr__e");
    /// ```
    pub fn parse_compact(pattern: &str) -> Result<Self, FinderError> {
        let slots = pattern
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                if WILDCARDS.contains(&ch) {
                    Ok(Slot::Any)
                } else if ch.is_whitespace() {
                    Err(FinderError::invalid_slot(i, ch.to_string()))
                } else {
                    Ok(Slot::Letter(ch))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(slots)
    }

    /// Number of slots (the target word length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no slots (never true once constructed)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of slots pinned to a literal
    #[must_use]
    pub fn literal_count(&self) -> usize {
        self.slots.iter().filter(|s| s.letter().is_some()).count()
    }
}

impl fmt::Display for SlotSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{slot}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_empty_entry_is_wildcard() {
        assert_eq!(Slot::from_raw(0, "").unwrap(), Slot::Any);
    }

    #[test]
    fn raw_single_char_is_literal() {
        assert_eq!(Slot::from_raw(0, "q").unwrap(), Slot::Letter('q'));
        // Multi-byte but single character
        assert_eq!(Slot::from_raw(0, "é").unwrap(), Slot::Letter('é'));
    }

    #[test]
    fn raw_multi_char_rejected_with_position() {
        let err = Slot::from_raw(3, "ab").unwrap_err();
        assert!(matches!(
            err,
            FinderError::InvalidPattern { position: 3, ref slot } if slot == "ab"
        ));
    }

    #[test]
    fn spec_from_raw_builds_slots() {
        let spec = SlotSpec::from_raw(&["c", "r", "", "", "e"]).unwrap();
        assert_eq!(
            spec.slots(),
            &[
                Slot::Letter('c'),
                Slot::Letter('r'),
                Slot::Any,
                Slot::Any,
                Slot::Letter('e'),
            ]
        );
        assert_eq!(spec.literal_count(), 3);
    }

    #[test]
    fn spec_from_raw_empty_rejected() {
        let raw: [&str; 0] = [];
        assert!(matches!(
            SlotSpec::from_raw(&raw),
            Err(FinderError::EmptyPattern)
        ));
    }

    #[test]
    fn spec_from_raw_reports_first_bad_slot() {
        let err = SlotSpec::from_raw(&["a", "", "xyz", "bc"]).unwrap_err();
        assert!(matches!(err, FinderError::InvalidPattern { position: 2, .. }));
    }

    #[test]
    fn compact_all_wildcard_forms() {
        let spec = SlotSpec::parse_compact("_.?*").unwrap();
        assert_eq!(spec.len(), 4);
        assert_eq!(spec.literal_count(), 0);
    }

    #[test]
    fn compact_literals_and_wildcards() {
        let spec = SlotSpec::parse_compact("cr__e").unwrap();
        assert_eq!(spec.slots()[0], Slot::Letter('c'));
        assert_eq!(spec.slots()[2], Slot::Any);
        assert_eq!(spec.to_string(), "cr__e");
    }

    #[test]
    fn compact_empty_rejected() {
        assert!(matches!(
            SlotSpec::parse_compact(""),
            Err(FinderError::EmptyPattern)
        ));
    }

    #[test]
    fn compact_whitespace_rejected() {
        assert!(matches!(
            SlotSpec::parse_compact("cr ne"),
            Err(FinderError::InvalidPattern { position: 2, .. })
        ));
    }

    #[test]
    fn compact_special_characters_are_literals() {
        let spec = SlotSpec::parse_compact("a+b").unwrap();
        assert_eq!(spec.slots()[1], Slot::Letter('+'));
    }
}
