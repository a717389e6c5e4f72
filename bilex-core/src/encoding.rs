//! Recoding bridge between the ambient encoding and stemmer encodings
//!
//! The ambient encoding is whatever byte encoding the surrounding system
//! hands words in (negotiated once at construction, UTF-8 unless the host
//! says otherwise). Stemmer modules declare the encoding they require; the
//! bridge converts between the two only when they differ. All conversions
//! are strict: malformed or unmappable input fails the call instead of being
//! replaced or dropped.

use crate::error::{LexizeError, LexizeResult};
use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;

/// The byte encoding of the surrounding system
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AmbientEncoding(&'static Encoding);

impl AmbientEncoding {
    /// UTF-8, the default ambient encoding
    pub const UTF8: AmbientEncoding = AmbientEncoding(UTF_8);

    /// Resolve a WHATWG encoding label such as `"windows-1252"`
    pub fn for_label(label: &str) -> Option<AmbientEncoding> {
        Encoding::for_label(label.as_bytes()).map(AmbientEncoding)
    }

    /// Canonical name of the encoding
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Whether this is UTF-8
    pub fn is_utf8(&self) -> bool {
        self.0 == UTF_8
    }

    pub(crate) fn encoding(&self) -> &'static Encoding {
        self.0
    }

    /// Decode ambient bytes to text, failing on any malformed sequence
    pub(crate) fn decode_strict<'a>(&self, bytes: &'a [u8]) -> LexizeResult<Cow<'a, str>> {
        if self.is_utf8() {
            return std::str::from_utf8(bytes)
                .map(Cow::Borrowed)
                .map_err(|_| LexizeError::MalformedInput {
                    encoding: self.name(),
                });
        }
        let (decoded, had_errors) = self.0.decode_without_bom_handling(bytes);
        if had_errors {
            return Err(LexizeError::MalformedInput {
                encoding: self.name(),
            });
        }
        Ok(decoded)
    }

    /// Encode text into ambient bytes, failing on any unmappable character
    pub(crate) fn encode_strict(&self, text: &str) -> LexizeResult<Vec<u8>> {
        if self.is_utf8() {
            return Ok(text.as_bytes().to_vec());
        }
        let (encoded, _, had_errors) = self.0.encode(text);
        if had_errors {
            return Err(LexizeError::Unmappable {
                text: text.to_string(),
                encoding: self.name(),
            });
        }
        Ok(encoded.into_owned())
    }

    /// Lowercase a word held in ambient bytes, staying in ambient bytes.
    ///
    /// Lowercasing is defined on characters, so non-UTF-8 input makes a round
    /// trip through the decoder; this is also where malformed input surfaces.
    pub fn lowercase(&self, raw: &[u8]) -> LexizeResult<Vec<u8>> {
        let decoded = self.decode_strict(raw)?;
        let lowered = decoded.to_lowercase();
        self.encode_strict(&lowered)
    }
}

impl std::fmt::Debug for AmbientEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AmbientEncoding").field(&self.name()).finish()
    }
}

/// Encoding a stemmer module requires its input and output in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformEncoding {
    /// Works with any ambient encoding, bytes pass through untranslated
    Agnostic,
    /// Requires exactly this encoding
    Fixed(&'static Encoding),
}

impl TransformEncoding {
    /// Whether a module with this requirement accepts ambient bytes directly
    pub fn accepts(&self, ambient: AmbientEncoding) -> bool {
        match self {
            TransformEncoding::Agnostic => true,
            TransformEncoding::Fixed(enc) => *enc == ambient.encoding(),
        }
    }
}
