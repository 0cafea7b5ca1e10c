//! Dictionary source
//!
//! An immutable, in-memory word list indexed by word length. Built once
//! (from a file via [`loader`] or from memory via [`Dictionary::from_words`])
//! and then shared read-only by every query.

pub mod loader;

use rustc_hash::{FxHashMap, FxHashSet};

/// Read-only collection of candidate words, indexed by length
///
/// Every entry is a non-empty lowercase ASCII alphabetic string, stored once.
/// Buckets are sorted so iteration order is stable.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    by_length: FxHashMap<usize, Vec<Box<str>>>,
    total: usize,
}

/// Counts from building a dictionary out of raw entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Entries accepted into the dictionary
    pub accepted: usize,
    /// Entries rejected for not being lowercase alphabetic
    pub rejected: usize,
    /// Entries already present
    pub duplicates: usize,
}

/// Check whether a raw entry may be stored
///
/// # Examples
/// ```
/// use wordslot::dictionary::is_valid_entry;
///
/// assert!(is_valid_entry("crane"));
/// assert!(!is_valid_entry("Crane"));
/// assert!(!is_valid_entry("can't"));
/// assert!(!is_valid_entry(""));
/// ```
#[must_use]
pub fn is_valid_entry(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

impl Dictionary {
    /// Build a dictionary from in-memory words, skipping invalid entries
    ///
    /// # Examples
    /// ```
    /// use wordslot::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["crane", "crate", "crane", "Bad!"]);
    /// assert_eq!(dict.len(), 2);
    /// assert_eq!(dict.words_of_length(5).len(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_words_with_report(words).0
    }

    /// Same as [`Dictionary::from_words`], also returning what was skipped
    pub fn from_words_with_report<I, S>(words: I) -> (Self, LoadReport)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = LoadReport::default();
        let mut seen: FxHashSet<Box<str>> = FxHashSet::default();

        for word in words {
            let word = word.as_ref();
            if !is_valid_entry(word) {
                report.rejected += 1;
            } else if seen.contains(word) {
                report.duplicates += 1;
            } else {
                seen.insert(word.into());
            }
        }

        let mut by_length: FxHashMap<usize, Vec<Box<str>>> = FxHashMap::default();
        for word in seen {
            // Entries are ASCII, so byte length is character count
            by_length.entry(word.len()).or_default().push(word);
        }
        for bucket in by_length.values_mut() {
            bucket.sort_unstable();
        }

        report.accepted = by_length.values().map(Vec::len).sum();
        let dict = Self {
            by_length,
            total: report.accepted,
        };
        (dict, report)
    }

    /// Total number of words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// All words with exactly `length` characters, sorted
    ///
    /// Returns an empty slice if there are none.
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[Box<str>] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Check membership of an exact word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words_of_length(word.len())
            .binary_search_by(|probe| (**probe).cmp(word))
            .is_ok()
    }

    /// Iterate over every word (grouped by length, unspecified group order)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.by_length.values().flatten().map(|word| &**word)
    }

    /// `(length, word count)` pairs sorted by length
    #[must_use]
    pub fn length_distribution(&self) -> Vec<(usize, usize)> {
        let mut dist: Vec<(usize, usize)> = self
            .by_length
            .iter()
            .map(|(&len, bucket)| (len, bucket.len()))
            .collect();
        dist.sort_unstable();
        dist
    }
}
