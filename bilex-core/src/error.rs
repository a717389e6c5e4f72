//! Error types for dictionary construction and lexize calls
//!
//! Construction failures abort setup entirely; call-time failures abort the
//! offending call and leave the dictionary usable.

use thiserror::Error;

/// Construction-time errors (fatal, non-retryable)
#[derive(Error, Debug)]
pub enum InitError {
    /// A `Language` or `StopWords` parameter was supplied; the pair is fixed
    #[error("unexpected {name} parameter; the bilingual dictionary is fixed to English and German")]
    FixedLanguagePair {
        /// The disallowed parameter name as the caller spelled it
        name: String,
    },

    /// A parameter this dictionary does not know about
    #[error("unrecognized dictionary parameter: \"{name}\"")]
    UnrecognizedParameter {
        /// The offending parameter name
        name: String,
    },

    /// The ambient-encoding label did not resolve to a known encoding
    #[error("unknown encoding label: \"{label}\"")]
    UnknownEncoding {
        /// The label as given to the builder
        label: String,
    },

    /// No stemmer module matched the language under the negotiated encoding
    #[error("no stemmer available for language \"{language}\" and encoding \"{encoding}\"")]
    StemmerUnavailable {
        /// The language that could not be resolved
        language: String,
        /// Name of the negotiated ambient encoding
        encoding: &'static str,
    },
}

/// Call-time errors (fatal to the single `lexize` call only)
#[derive(Error, Debug)]
pub enum LexizeError {
    /// The input contained a byte sequence invalid in the source encoding
    #[error("input is not valid {encoding}")]
    MalformedInput {
        /// Name of the encoding the bytes were expected to be in
        encoding: &'static str,
    },

    /// A character could not be mapped into the target encoding
    #[error("cannot represent \"{text}\" in {encoding}")]
    Unmappable {
        /// The text that failed to convert
        text: String,
        /// Name of the encoding it could not be mapped into
        encoding: &'static str,
    },
}

/// Result type for construction
pub type InitResult<T> = std::result::Result<T, InitError>;

/// Result type for lexize calls
pub type LexizeResult<T> = std::result::Result<T, LexizeError>;
