//! Query entry point
//!
//! Composes the pipeline:
//! `filter_excluded(excluded, filter_required(required, match(compile(slots), dictionary)))`

use super::WordSet;
use super::filters::{filter_excluded, filter_required};
use super::matcher::match_dictionary;
use crate::core::{CompiledPattern, LetterConstraint, SlotSpec};
use crate::dictionary::Dictionary;
use crate::error::FinderError;
use std::fmt;
use tracing::debug;

/// A validated search request
///
/// Built fresh for each search and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    slots: SlotSpec,
    required: LetterConstraint,
    excluded: LetterConstraint,
}

impl Query {
    #[must_use]
    pub const fn new(
        slots: SlotSpec,
        required: LetterConstraint,
        excluded: LetterConstraint,
    ) -> Self {
        Self {
            slots,
            required,
            excluded,
        }
    }

    /// Build from the three raw inputs supplied by a hosting shell
    ///
    /// - `positional`: one entry per slot, each a single character or empty
    /// - `excluded`: characters that must not appear (empty = no constraint)
    /// - `unbound`: characters that must appear somewhere (empty = no constraint)
    ///
    /// # Errors
    /// Returns `FinderError::EmptyPattern` or `FinderError::InvalidPattern`
    /// for a malformed positional specification.
    pub fn from_raw<S: AsRef<str>>(
        positional: &[S],
        excluded: &str,
        unbound: &str,
    ) -> Result<Self, FinderError> {
        Ok(Self::new(
            SlotSpec::from_raw(positional)?,
            LetterConstraint::from_raw(unbound),
            LetterConstraint::from_raw(excluded),
        ))
    }

    #[must_use]
    pub const fn slots(&self) -> &SlotSpec {
        &self.slots
    }

    #[must_use]
    pub const fn required(&self) -> &LetterConstraint {
        &self.required
    }

    #[must_use]
    pub const fn excluded(&self) -> &LetterConstraint {
        &self.excluded
    }

    /// Letters that are both required and excluded
    ///
    /// Such a query is still run; it just cannot match any word.
    #[must_use]
    pub fn conflicting_letters(&self) -> Vec<char> {
        self.required.intersection(&self.excluded)
    }

    /// Run the full pipeline against a dictionary
    ///
    /// Pure and deterministic: the same query over the same dictionary
    /// always yields the same set.
    ///
    /// # Examples
    /// ```
    /// use wordslot::dictionary::Dictionary;
    /// use wordslot::finder::Query;
    ///
    /// let dict = Dictionary::from_words(["crane", "crate", "grate", "plane"]);
    /// let query = Query::from_raw(&["", "", "", "", ""], "", "g").unwrap();
    ///
    /// let matches = query.run(&dict);
    /// assert_eq!(matches.sorted(), vec!["grate"]);
    /// ```
    #[must_use]
    pub fn run<'a>(&self, dictionary: &'a Dictionary) -> Matches<'a> {
        let pattern = CompiledPattern::compile(&self.slots);

        let positional = match_dictionary(&pattern, dictionary);
        let positional_count = positional.len();

        let with_required = filter_required(&self.required, positional);
        let required_count = with_required.len();

        let words = filter_excluded(&self.excluded, with_required);

        debug!(
            pattern = %pattern,
            positional = positional_count,
            required = required_count,
            result = words.len(),
            "query stages"
        );

        Matches { words }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} +{} -{}", self.slots, self.required, self.excluded)
    }
}

/// Run a search straight from raw shell inputs
///
/// # Errors
/// Returns the pattern errors of [`Query::from_raw`]; the search itself cannot fail.
///
/// # Examples
/// ```
/// use wordslot::dictionary::Dictionary;
/// use wordslot::finder::search;
///
/// let dict = Dictionary::from_words(["crane", "crate", "grate", "plane"]);
/// let matches = search(&dict, &["c", "r", "", "", "e"], "", "").unwrap();
/// assert_eq!(matches.sorted(), vec!["crane", "crate"]);
/// ```
pub fn search<'a, S: AsRef<str>>(
    dictionary: &'a Dictionary,
    positional: &[S],
    excluded: &str,
    unbound: &str,
) -> Result<Matches<'a>, FinderError> {
    Ok(Query::from_raw(positional, excluded, unbound)?.run(dictionary))
}

/// Result set of a query
///
/// Unordered and duplicate-free. Borrows its words from the dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches<'a> {
    words: WordSet<'a>,
}

impl<'a> Matches<'a> {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.words.iter().copied()
    }

    /// Words in lexicographic order
    #[must_use]
    pub fn sorted(&self) -> Vec<&'a str> {
        let mut words: Vec<&'a str> = self.iter().collect();
        words.sort_unstable();
        words
    }

    /// The underlying set
    #[must_use]
    pub fn into_set(self) -> WordSet<'a> {
        self.words
    }
}
