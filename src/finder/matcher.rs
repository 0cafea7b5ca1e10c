//! Positional matching
//!
//! First pipeline stage: reduce the dictionary to words whose length and
//! pinned positions agree with the compiled pattern.

use super::WordSet;
use crate::core::CompiledPattern;
use crate::dictionary::Dictionary;

/// Match a pattern against an arbitrary iterable of words
///
/// Words of a different character count are rejected by the pattern itself.
/// The result is a set, so duplicate input words collapse.
///
/// # Examples
/// ```
/// use wordslot::core::{CompiledPattern, SlotSpec};
/// use wordslot::finder::match_words;
///
/// let pattern = CompiledPattern::compile(&SlotSpec::parse_compact("_at").unwrap());
/// let found = match_words(&pattern, ["cat", "hat", "cart", "cat"]);
/// assert_eq!(found.len(), 2);
/// ```
pub fn match_words<'a, I>(pattern: &CompiledPattern, words: I) -> WordSet<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    words
        .into_iter()
        .filter(|word| pattern.is_match(word))
        .collect()
}

/// Match a pattern against a dictionary
///
/// Only the length bucket for `pattern.len()` is scanned; every other word
/// is skipped without testing.
#[must_use]
pub fn match_dictionary<'a>(pattern: &CompiledPattern, dictionary: &'a Dictionary) -> WordSet<'a> {
    let bucket = dictionary.words_of_length(pattern.len());
    match_words(pattern, bucket.iter().map(|word| &**word))
}
