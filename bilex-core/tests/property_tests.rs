//! Property tests for the lexize result laws

use bilex_core::{BilingualDictionary, Lexemes};
use proptest::prelude::*;
use std::sync::OnceLock;

static DICT: OnceLock<BilingualDictionary> = OnceLock::new();

fn dict() -> &'static BilingualDictionary {
    DICT.get_or_init(|| BilingualDictionary::new().unwrap())
}

fn lexize(dict: &BilingualDictionary, word: &str) -> Lexemes {
    dict.lexize(word.as_bytes()).unwrap()
}

proptest! {
    #[test]
    fn result_has_at_most_two_entries(word in "[a-zäöüß]{1,16}") {
        let dict = dict();
        let lexemes = lexize(dict, &word);
        prop_assert!(lexemes.len() <= 2);
    }

    #[test]
    fn first_entry_is_never_a_variant(word in "[a-zäöüß]{1,16}") {
        let dict = dict();
        let lexemes = lexize(dict, &word);
        if let Some(first) = lexemes.first() {
            prop_assert!(!first.is_variant);
        }
    }

    #[test]
    fn two_entries_means_distinct_stems_and_a_variant(word in "[a-zäöüß]{1,16}") {
        let dict = dict();
        let lexemes = lexize(dict, &word);
        if lexemes.len() == 2 {
            prop_assert_ne!(&lexemes[0].text, &lexemes[1].text);
            prop_assert!(lexemes[1].is_variant);
        }
    }

    #[test]
    fn lexize_is_deterministic(word in "[a-zäöüß]{1,16}") {
        let dict = dict();
        prop_assert_eq!(lexize(dict, &word), lexize(dict, &word));
    }

    #[test]
    fn uppercase_input_is_folded(word in "[a-z]{1,16}") {
        let dict = dict();
        let upper = word.to_uppercase();
        prop_assert_eq!(lexize(dict, &word), lexize(dict, &upper));
    }
}
