//! Stemmer modules and the registry they are resolved from
//!
//! A stemming transform is an opaque capability: bytes in, root form out, in
//! the encoding the module declares. The registry is a fixed table; modules
//! are resolved once at construction and never swapped afterwards.

use crate::encoding::{AmbientEncoding, TransformEncoding};
use crate::error::{InitError, InitResult, LexizeError, LexizeResult};
use rust_stemmers::{Algorithm, Stemmer};
use tracing::debug;

/// A language-specific stemming transform.
///
/// The returned slice borrows the transform's internal scratch buffer and is
/// invalidated by the next `stem` call on the same instance; callers copy it
/// out before releasing the transform.
pub trait StemmingTransform: Send {
    /// Reduce a lowercased word, given in the module's declared encoding, to
    /// its root form in the same encoding.
    fn stem(&mut self, word: &[u8]) -> LexizeResult<&[u8]>;
}

/// Snowball stemmer with a reused output buffer
pub struct SnowballTransform {
    stemmer: Stemmer,
    scratch: Vec<u8>,
}

impl SnowballTransform {
    /// Create a transform for one Snowball algorithm
    pub fn new(algorithm: Algorithm) -> SnowballTransform {
        SnowballTransform {
            stemmer: Stemmer::create(algorithm),
            scratch: Vec::new(),
        }
    }
}

impl StemmingTransform for SnowballTransform {
    fn stem(&mut self, word: &[u8]) -> LexizeResult<&[u8]> {
        let text = std::str::from_utf8(word)
            .map_err(|_| LexizeError::MalformedInput { encoding: "UTF-8" })?;
        let stemmed = self.stemmer.stem(text);
        self.scratch.clear();
        self.scratch.extend_from_slice(stemmed.as_bytes());
        Ok(&self.scratch)
    }
}

/// One entry in the stemmer registry
pub struct StemmerModule {
    /// Language name the module serves
    pub name: &'static str,
    /// Encoding the module requires
    pub encoding: TransformEncoding,
    /// Factory for a fresh transform instance
    pub create: fn() -> Box<dyn StemmingTransform>,
}

fn create_english() -> Box<dyn StemmingTransform> {
    Box::new(SnowballTransform::new(Algorithm::English))
}

fn create_german() -> Box<dyn StemmingTransform> {
    Box::new(SnowballTransform::new(Algorithm::German))
}

/// Registry of available stemmer modules, fixed for the process lifetime
pub static STEMMER_MODULES: &[StemmerModule] = &[
    StemmerModule {
        name: "english",
        encoding: TransformEncoding::Fixed(&encoding_rs::UTF_8_INIT),
        create: create_english,
    },
    StemmerModule {
        name: "german",
        encoding: TransformEncoding::Fixed(&encoding_rs::UTF_8_INIT),
        create: create_german,
    },
];

/// Resolve a stemmer for `language` under the negotiated ambient encoding.
///
/// Two-phase lookup: first a module that accepts the ambient encoding
/// directly (or is encoding-agnostic), with no recoding; failing that, a
/// UTF-8 module that the pipeline recodes around. Returns the transform and
/// whether recoding is needed.
pub fn locate_stemmer(
    language: &str,
    ambient: AmbientEncoding,
) -> InitResult<(Box<dyn StemmingTransform>, bool)> {
    for module in STEMMER_MODULES {
        if module.name.eq_ignore_ascii_case(language) && module.encoding.accepts(ambient) {
            debug!(language, encoding = ambient.name(), "stemmer matched ambient encoding");
            return Ok(((module.create)(), false));
        }
    }

    for module in STEMMER_MODULES {
        if module.name.eq_ignore_ascii_case(language)
            && module.encoding == TransformEncoding::Fixed(encoding_rs::UTF_8)
        {
            debug!(language, encoding = ambient.name(), "falling back to UTF-8 stemmer with recode");
            return Ok(((module.create)(), true));
        }
    }

    Err(InitError::StemmerUnavailable {
        language: language.to_string(),
        encoding: ambient.name(),
    })
}
