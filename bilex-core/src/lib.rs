//! Bilingual English/German stemming dictionary for full-text search
//!
//! A single lowercased token is run through two independent language
//! pipelines — stoplist filter, Snowball stem, with encoding bridging around
//! the stemmer where needed — and the two results are merged into at most
//! two lexemes. When both languages produce distinct stems the second is
//! tagged as a variant, meaning a query should accept either stem rather
//! than require both.
//!
//! ```
//! use bilex_core::BilingualDictionary;
//!
//! let dict = BilingualDictionary::new().unwrap();
//! let lexemes = dict.lexize(b"running").unwrap();
//! assert_eq!(lexemes[0].text, "run");
//! ```

#![warn(missing_docs)]

pub mod dictionary;
pub mod encoding;
pub mod error;
pub mod lexeme;
pub mod pipeline;
pub mod stemmer;
pub mod stoplist;

// Re-export key types
pub use dictionary::{BilingualDictionary, DictionaryBuilder};
pub use encoding::AmbientEncoding;
pub use error::{InitError, LexizeError};
pub use lexeme::{query_expression, Lexeme, Lexemes};

/// The two fixed dictionary languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// English, the primary pipeline
    English,
    /// German, the secondary pipeline
    German,
}

impl Language {
    /// Lowercase language name, as used for stemmer lookup
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::German => "german",
        }
    }

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_names() {
        assert_eq!(Language::English.name(), "english");
        assert_eq!(Language::German.code(), "de");
    }

    #[test]
    fn dictionary_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BilingualDictionary>();
    }
}
