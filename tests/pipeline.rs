//! End-to-end behavior of the search pipeline over in-memory word lists

use proptest::prelude::*;
use wordslot::FinderError;
use wordslot::core::{CompiledPattern, LetterConstraint, Slot, SlotSpec};
use wordslot::dictionary::Dictionary;
use wordslot::finder::{
    Query, WordSet, filter_excluded, filter_required, match_dictionary, search,
};

fn sample() -> Dictionary {
    Dictionary::from_words(["crane", "crate", "grate", "plane"])
}

const FIVE_WILD: [&str; 5] = ["", "", "", "", ""];

#[test]
fn pinned_first_two_and_last() {
    let dict = sample();
    let matches = search(&dict, &["c", "r", "", "", "e"], "", "").unwrap();
    assert_eq!(matches.sorted(), vec!["crane", "crate"]);
}

#[test]
fn required_letter_with_open_slots() {
    let dict = sample();
    let matches = search(&dict, &FIVE_WILD, "", "g").unwrap();
    assert_eq!(matches.sorted(), vec!["grate"]);
}

#[test]
fn excluded_letter_shared_by_every_word() {
    let dict = sample();
    let matches = search(&dict, &FIVE_WILD, "a", "").unwrap();
    assert!(matches.is_empty());
}

#[test]
fn pattern_length_absent_from_dictionary() {
    let dict = sample();
    let matches = search(&dict, &["", "", "", ""], "", "").unwrap();
    assert!(matches.is_empty());
}

#[test]
fn more_required_letters_than_word_length() {
    let dict = Dictionary::from_words(["ab", "bc", "ca", "cab"]);
    let matches = search(&dict, &["", ""], "", "abc").unwrap();
    assert!(matches.is_empty());
}

#[test]
fn empty_pattern_is_an_error() {
    let dict = sample();
    let raw: [&str; 0] = [];
    assert!(matches!(
        search(&dict, &raw, "", ""),
        Err(FinderError::EmptyPattern)
    ));
}

#[test]
fn multi_character_slot_is_an_error() {
    let dict = sample();
    assert!(matches!(
        search(&dict, &["cr", "", "", ""], "", ""),
        Err(FinderError::InvalidPattern { position: 0, .. })
    ));
}

#[test]
fn dictionary_shared_across_threads() {
    let dict = sample();
    std::thread::scope(|scope| {
        let handles: Vec<_> = ["c", "g", "p"]
            .into_iter()
            .map(|first| {
                let dict = &dict;
                scope.spawn(move || search(dict, &[first, "", "", "", ""], "", "").unwrap().len())
            })
            .collect();
        let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(counts, vec![2, 1, 1]);
    });
}

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-f]{1,6}"
}

fn slot_strategy() -> impl Strategy<Value = Vec<Option<char>>> {
    prop::collection::vec(prop::option::of(prop::char::range('a', 'f')), 1..=6)
}

fn letters_strategy() -> impl Strategy<Value = String> {
    "[a-f]{0,3}"
}

fn build_query(slots: &[Option<char>], required: &str, excluded: &str) -> Query {
    let slots = slots
        .iter()
        .map(|s| s.map_or(Slot::Any, Slot::Letter))
        .collect();
    Query::new(
        SlotSpec::new(slots).unwrap(),
        LetterConstraint::from_raw(required),
        LetterConstraint::from_raw(excluded),
    )
}

proptest! {
    #[test]
    fn results_satisfy_every_constraint(
        words in prop::collection::vec(word_strategy(), 0..60),
        slots in slot_strategy(),
        required in letters_strategy(),
        excluded in letters_strategy(),
    ) {
        let dict = Dictionary::from_words(&words);
        let query = build_query(&slots, &required, &excluded);

        for word in query.run(&dict).iter() {
            prop_assert_eq!(word.chars().count(), slots.len());
            for (slot, ch) in slots.iter().zip(word.chars()) {
                if let Some(expected) = slot {
                    prop_assert_eq!(*expected, ch);
                }
            }
            for r in required.chars() {
                prop_assert!(word.contains(r));
            }
            for x in excluded.chars() {
                prop_assert!(!word.contains(x));
            }
        }
    }

    #[test]
    fn results_are_complete(
        words in prop::collection::vec(word_strategy(), 0..60),
        slots in slot_strategy(),
        required in letters_strategy(),
        excluded in letters_strategy(),
    ) {
        let dict = Dictionary::from_words(&words);
        let query = build_query(&slots, &required, &excluded);
        let matches = query.run(&dict);

        for word in dict.iter() {
            let expected = word.chars().count() == slots.len()
                && slots.iter().zip(word.chars()).all(|(s, ch)| s.is_none_or(|e| e == ch))
                && required.chars().all(|r| word.contains(r))
                && !excluded.chars().any(|x| word.contains(x));
            prop_assert_eq!(matches.contains(word), expected);
        }
    }

    #[test]
    fn running_twice_gives_same_result(
        words in prop::collection::vec(word_strategy(), 0..60),
        slots in slot_strategy(),
        required in letters_strategy(),
        excluded in letters_strategy(),
    ) {
        let dict = Dictionary::from_words(&words);
        let query = build_query(&slots, &required, &excluded);
        prop_assert_eq!(query.run(&dict), query.run(&dict));
    }

    #[test]
    fn adding_required_letter_never_grows_result(
        words in prop::collection::vec(word_strategy(), 0..60),
        slots in slot_strategy(),
        required in letters_strategy(),
        extra in prop::char::range('a', 'f'),
    ) {
        let dict = Dictionary::from_words(&words);
        let base = build_query(&slots, &required, "").run(&dict);
        let narrowed = build_query(&slots, &format!("{required}{extra}"), "").run(&dict);

        prop_assert!(narrowed.len() <= base.len());
        for word in narrowed.iter() {
            prop_assert!(base.contains(word));
        }
    }

    #[test]
    fn adding_excluded_letter_never_grows_result(
        words in prop::collection::vec(word_strategy(), 0..60),
        slots in slot_strategy(),
        excluded in letters_strategy(),
        extra in prop::char::range('a', 'f'),
    ) {
        let dict = Dictionary::from_words(&words);
        let base = build_query(&slots, "", &excluded).run(&dict);
        let narrowed = build_query(&slots, "", &format!("{excluded}{extra}")).run(&dict);

        prop_assert!(narrowed.len() <= base.len());
        for word in narrowed.iter() {
            prop_assert!(base.contains(word));
        }
    }

    #[test]
    fn empty_constraints_are_identity(
        words in prop::collection::vec(word_strategy(), 0..60),
    ) {
        let set: WordSet = words.iter().map(String::as_str).collect();
        prop_assert_eq!(filter_required(&LetterConstraint::NoConstraint, set.clone()), set.clone());
        prop_assert_eq!(filter_excluded(&LetterConstraint::NoConstraint, set.clone()), set);
    }

    #[test]
    fn filter_order_does_not_matter(
        words in prop::collection::vec(word_strategy(), 0..60),
        slots in slot_strategy(),
        required in letters_strategy(),
        excluded in letters_strategy(),
    ) {
        let dict = Dictionary::from_words(&words);
        let spec = build_query(&slots, "", "").slots().clone();
        let pattern = CompiledPattern::compile(&spec);
        let required = LetterConstraint::from_raw(&required);
        let excluded = LetterConstraint::from_raw(&excluded);

        let positional = match_dictionary(&pattern, &dict);
        let a = filter_excluded(&excluded, filter_required(&required, positional.clone()));
        let b = filter_required(&required, filter_excluded(&excluded, positional));
        prop_assert_eq!(a, b);
    }
}
