//! Per-language stopword lists
//!
//! Lists are loaded once at construction, lowercased, and encoded into the
//! ambient encoding so that membership checks are exact byte comparisons
//! against the already-lowercased input word.

use crate::encoding::AmbientEncoding;
use crate::Language;
use std::collections::HashSet;
use stop_words::LANGUAGE;
use tracing::warn;

/// A set of words excluded from stemming for one language
#[derive(Debug, Clone)]
pub struct StopList {
    entries: HashSet<Vec<u8>>,
}

impl StopList {
    /// Load the stoplist for a language, keyed in the ambient encoding.
    ///
    /// Entries that cannot be represented in the ambient encoding are skipped:
    /// no ambient-encoded input word could ever match them.
    pub fn load(language: Language, ambient: AmbientEncoding) -> StopList {
        let words = stop_words::get(to_stop_words_language(language));
        let mut entries = HashSet::with_capacity(words.len());
        for word in words {
            let lowered = word.to_lowercase();
            match ambient.encode_strict(&lowered) {
                Ok(bytes) => {
                    entries.insert(bytes);
                }
                Err(_) => {
                    warn!(
                        word = %lowered,
                        language = language.name(),
                        encoding = ambient.name(),
                        "skipping stoplist entry not representable in ambient encoding"
                    );
                }
            }
        }
        StopList { entries }
    }

    /// Empty stoplist
    pub fn empty() -> StopList {
        StopList {
            entries: HashSet::new(),
        }
    }

    /// Exact match against the lowercased, ambient-encoded word
    pub fn contains(&self, word: &[u8]) -> bool {
        self.entries.contains(word)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn to_stop_words_language(language: Language) -> LANGUAGE {
    match language {
        Language::English => LANGUAGE::English,
        Language::German => LANGUAGE::German,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_list_contains_common_words() {
        let list = StopList::load(Language::English, AmbientEncoding::UTF8);
        assert!(!list.is_empty());
        assert!(list.contains(b"the"));
        assert!(list.contains(b"and"));
        assert!(!list.contains(b"dictionary"));
    }

    #[test]
    fn german_list_contains_common_words() {
        let list = StopList::load(Language::German, AmbientEncoding::UTF8);
        assert!(list.contains(b"und"));
        assert!(list.contains(b"der"));
        assert!(!list.contains(b"the"));
    }

    #[test]
    fn entries_are_keyed_in_ambient_encoding() {
        let latin1 = AmbientEncoding::for_label("windows-1252").unwrap();
        let list = StopList::load(Language::German, latin1);
        // "für" is a German stopword; 0xFC is u-umlaut in windows-1252
        assert!(list.contains(b"f\xfcr"));
        assert!(!list.contains("für".as_bytes()));
    }

    #[test]
    fn empty_list_matches_nothing() {
        let list = StopList::empty();
        assert!(list.is_empty());
        assert!(!list.contains(b"the"));
    }
}
