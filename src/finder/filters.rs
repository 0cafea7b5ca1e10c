//! Letter filters
//!
//! Second and third pipeline stages. Both are pure set filters, so they
//! commute and either may run first.

use super::WordSet;
use crate::core::LetterConstraint;

/// Keep words containing every required letter, at any position
///
/// `NoConstraint` returns the input unchanged. Requiring more distinct
/// letters than a word has characters simply leaves nothing.
///
/// # Examples
/// ```
/// use wordslot::core::LetterConstraint;
/// use wordslot::finder::{WordSet, filter_required};
///
/// let words: WordSet = ["crane", "grate", "plane"].into_iter().collect();
/// let kept = filter_required(&LetterConstraint::from_raw("g"), words);
/// assert_eq!(kept.len(), 1);
/// assert!(kept.contains("grate"));
/// ```
#[must_use]
pub fn filter_required<'a>(required: &LetterConstraint, mut words: WordSet<'a>) -> WordSet<'a> {
    if required.is_unconstrained() {
        return words;
    }
    words.retain(|word| required.all_present_in(word));
    words
}

/// Keep words containing none of the excluded letters
///
/// `NoConstraint` returns the input unchanged.
#[must_use]
pub fn filter_excluded<'a>(excluded: &LetterConstraint, mut words: WordSet<'a>) -> WordSet<'a> {
    if excluded.is_unconstrained() {
        return words;
    }
    words.retain(|word| excluded.none_present_in(word));
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&'static str]) -> WordSet<'static> {
        list.iter().copied().collect()
    }

    #[test]
    fn required_empty_is_identity() {
        let input = words(&["crane", "plane", "xyz"]);
        let out = filter_required(&LetterConstraint::NoConstraint, input.clone());
        assert_eq!(out, input);
    }

    #[test]
    fn excluded_empty_is_identity() {
        let input = words(&["crane", "plane", "xyz"]);
        let out = filter_excluded(&LetterConstraint::NoConstraint, input.clone());
        assert_eq!(out, input);
    }

    #[test]
    fn required_keeps_words_with_all_letters() {
        let out = filter_required(
            &LetterConstraint::from_raw("pn"),
            words(&["crane", "plane", "pines", "nope"]),
        );
        assert_eq!(out, words(&["plane", "pines", "nope"]));
    }

    #[test]
    fn required_repeated_letter_needs_one_occurrence() {
        let out = filter_required(&LetterConstraint::from_raw("ee"), words(&["geese", "crane"]));
        assert_eq!(out, words(&["geese", "crane"]));
    }

    #[test]
    fn required_more_letters_than_length_is_empty() {
        let out = filter_required(&LetterConstraint::from_raw("abc"), words(&["ab", "ba", "cc"]));
        assert!(out.is_empty());
    }

    #[test]
    fn excluded_drops_words_with_any_letter() {
        let out = filter_excluded(
            &LetterConstraint::from_raw("ay"),
            words(&["crane", "tryst", "bloke", "piety"]),
        );
        assert_eq!(out, words(&["bloke"]));
    }

    #[test]
    fn filters_commute() {
        let input = words(&["crane", "crate", "grate", "plane", "trace"]);
        let required = LetterConstraint::from_raw("t");
        let excluded = LetterConstraint::from_raw("g");

        let a = filter_excluded(&excluded, filter_required(&required, input.clone()));
        let b = filter_required(&required, filter_excluded(&excluded, input));
        assert_eq!(a, b);
        assert_eq!(a, words(&["crate", "trace"]));
    }

    #[test]
    fn overlapping_constraints_leave_nothing_with_that_letter() {
        let input = words(&["crane", "plane", "block"]);
        let both = LetterConstraint::from_raw("a");
        let out = filter_excluded(&both, filter_required(&both, input));
        assert!(out.is_empty());
    }
}
