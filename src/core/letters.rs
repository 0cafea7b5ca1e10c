//! Position-free letter constraints
//!
//! Used for both the required-letters set and the excluded-letters set.
//! An empty raw value means "no constraint" and is represented explicitly
//! rather than as an empty string.

use std::collections::BTreeSet;
use std::fmt;

/// A set of letters constraining a word regardless of position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LetterConstraint {
    /// Every word passes
    #[default]
    NoConstraint,
    /// Non-empty set of letters
    Letters(BTreeSet<char>),
}

impl LetterConstraint {
    /// Build from a raw string whose characters form the set
    ///
    /// Repeated characters collapse. An empty string yields `NoConstraint`.
    ///
    /// # Examples
    /// ```
    /// use wordslot::core::LetterConstraint;
    ///
    /// assert!(LetterConstraint::from_raw("").is_unconstrained());
    ///
    /// let letters = LetterConstraint::from_raw("aab");
    /// assert_eq!(letters.len(), 2);
    /// ```
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        Self::from_letters(raw.chars())
    }

    /// Build from any iterator of characters
    pub fn from_letters<I: IntoIterator<Item = char>>(letters: I) -> Self {
        let set: BTreeSet<char> = letters.into_iter().collect();
        if set.is_empty() {
            Self::NoConstraint
        } else {
            Self::Letters(set)
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        matches!(self, Self::NoConstraint)
    }

    /// Number of distinct letters (0 for `NoConstraint`)
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::NoConstraint => 0,
            Self::Letters(set) => set.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        match self {
            Self::NoConstraint => false,
            Self::Letters(set) => set.contains(&letter),
        }
    }

    /// Iterate letters in sorted order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        let set = match self {
            Self::NoConstraint => None,
            Self::Letters(set) => Some(set),
        };
        set.into_iter().flatten().copied()
    }

    /// True if `word` contains every letter (vacuously true when unconstrained)
    #[must_use]
    pub fn all_present_in(&self, word: &str) -> bool {
        match self {
            Self::NoConstraint => true,
            Self::Letters(set) => set.iter().all(|&letter| word.contains(letter)),
        }
    }

    /// True if `word` contains none of the letters (vacuously true when unconstrained)
    #[must_use]
    pub fn none_present_in(&self, word: &str) -> bool {
        match self {
            Self::NoConstraint => true,
            Self::Letters(set) => !word.chars().any(|ch| set.contains(&ch)),
        }
    }

    /// Letters present in both constraints, sorted
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Vec<char> {
        self.letters().filter(|&ch| other.contains(ch)).collect()
    }
}

impl fmt::Display for LetterConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoConstraint => write!(f, "-"),
            Self::Letters(set) => {
                for ch in set {
                    write!(f, "{ch}")?;
                }
                Ok(())
            }
        }
    }
}
