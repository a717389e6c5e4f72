//! The bilingual dictionary: two pipelines and the merge rules

use crate::encoding::AmbientEncoding;
use crate::error::{InitError, InitResult, LexizeResult};
use crate::lexeme::{Lexeme, Lexemes};
use crate::pipeline::LanguagePipeline;
use crate::Language;
use tracing::debug;

/// Text-normalization dictionary running every word through an English and a
/// German stemming pipeline.
///
/// The language pair is fixed: English is the primary pipeline and wins
/// tie-breaks, German is the secondary one. Constructed once, then read-only;
/// safe to share across threads.
pub struct BilingualDictionary {
    ambient: AmbientEncoding,
    primary: LanguagePipeline,
    secondary: LanguagePipeline,
}

impl BilingualDictionary {
    /// Construct with the default UTF-8 ambient encoding and no parameters
    pub fn new() -> InitResult<BilingualDictionary> {
        DictionaryBuilder::new().build()
    }

    /// Construct from host-supplied dictionary parameters.
    ///
    /// No parameter is recognized; any entry fails construction with an error
    /// naming it. Parameter values are accepted for interface compatibility
    /// but never inspected.
    pub fn initialize<I, K, V>(parameters: I) -> InitResult<BilingualDictionary>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut builder = DictionaryBuilder::new();
        for (name, value) in parameters {
            builder = builder.parameter(name.as_ref(), value.as_ref());
        }
        builder.build()
    }

    /// Start building a dictionary
    pub fn builder() -> DictionaryBuilder {
        DictionaryBuilder::new()
    }

    /// The negotiated ambient encoding
    pub fn ambient_encoding_name(&self) -> &'static str {
        self.ambient.name()
    }

    /// Normalize one word, given as bytes in the ambient encoding.
    ///
    /// Returns 0, 1, or 2 lexemes. With two entries the second is a variant
    /// of the first; identical stems collapse to a single non-variant entry.
    /// A failed call leaves the dictionary valid for subsequent calls.
    pub fn lexize(&self, raw: &[u8]) -> LexizeResult<Lexemes> {
        let mut result = Lexemes::new();

        let word = self.ambient.lowercase(raw)?;
        if word.is_empty() {
            return Ok(result);
        }

        let first = self.primary.run(&word)?;
        let second = self.secondary.run(&word)?;

        match (first, second) {
            (Some(r0), Some(r1)) => {
                // If the stems are equal keep one entry, with the primary's
                // non-variant status; otherwise the secondary is a variant.
                if r0 == r1 {
                    result.push(self.lexeme(r0, false)?);
                } else {
                    result.push(self.lexeme(r0, false)?);
                    result.push(self.lexeme(r1, true)?);
                }
            }
            (Some(r0), None) => result.push(self.lexeme(r0, false)?),
            (None, Some(r1)) => result.push(self.lexeme(r1, false)?),
            (None, None) => {}
        }

        Ok(result)
    }

    /// Convenience over [`lexize`](Self::lexize) for callers holding text:
    /// encodes the word into the ambient encoding first.
    pub fn lexize_str(&self, word: &str) -> LexizeResult<Lexemes> {
        if self.ambient.is_utf8() {
            return self.lexize(word.as_bytes());
        }
        let raw = self.ambient.encode_strict(word)?;
        self.lexize(&raw)
    }

    fn lexeme(&self, bytes: Vec<u8>, is_variant: bool) -> LexizeResult<Lexeme> {
        let text = self.ambient.decode_strict(&bytes)?.into_owned();
        Ok(Lexeme { text, is_variant })
    }
}

impl std::fmt::Debug for BilingualDictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BilingualDictionary")
            .field("ambient", &self.ambient)
            .field("primary", &self.primary)
            .field("secondary", &self.secondary)
            .finish()
    }
}

/// Builder carrying the host-negotiated encoding and any pass-through
/// dictionary parameters
pub struct DictionaryBuilder {
    ambient: InitResult<AmbientEncoding>,
    parameters: Vec<(String, String)>,
}

impl DictionaryBuilder {
    /// New builder with the UTF-8 ambient encoding
    pub fn new() -> DictionaryBuilder {
        DictionaryBuilder {
            ambient: Ok(AmbientEncoding::UTF8),
            parameters: Vec::new(),
        }
    }

    /// Negotiate the ambient encoding from a WHATWG label.
    ///
    /// An unknown label surfaces at `build` time so the builder chain stays
    /// fluent.
    pub fn encoding(mut self, label: &str) -> DictionaryBuilder {
        self.ambient = AmbientEncoding::for_label(label).ok_or_else(|| InitError::UnknownEncoding {
            label: label.to_string(),
        });
        self
    }

    /// Add a host-supplied dictionary parameter (rejected at `build` time)
    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> DictionaryBuilder {
        self.parameters.push((name.into(), value.into()));
        self
    }

    /// Validate parameters, resolve both stemmers, and load both stoplists.
    ///
    /// Fails without returning a partially-constructed dictionary.
    pub fn build(self) -> InitResult<BilingualDictionary> {
        let ambient = self.ambient?;

        // no parameter is recognized; construction aborts on the first one
        if let Some((name, _)) = self.parameters.first() {
            if name.eq_ignore_ascii_case("stopwords") || name.eq_ignore_ascii_case("language") {
                return Err(InitError::FixedLanguagePair { name: name.clone() });
            }
            return Err(InitError::UnrecognizedParameter { name: name.clone() });
        }

        let primary = LanguagePipeline::new(Language::English, ambient)?;
        let secondary = LanguagePipeline::new(Language::German, ambient)?;
        debug!(
            encoding = ambient.name(),
            primary_recode = primary.needs_recode(),
            secondary_recode = secondary.needs_recode(),
            "bilingual dictionary constructed"
        );

        Ok(BilingualDictionary {
            ambient,
            primary,
            secondary,
        })
    }
}

impl Default for DictionaryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_parameter_is_rejected() {
        let err = BilingualDictionary::initialize([("Language", "french")]).unwrap_err();
        assert!(matches!(err, InitError::FixedLanguagePair { ref name } if name == "Language"));
    }

    #[test]
    fn stopwords_parameter_is_rejected() {
        let err = BilingualDictionary::initialize([("StopWords", "custom")]).unwrap_err();
        assert!(matches!(err, InitError::FixedLanguagePair { ref name } if name == "StopWords"));
    }

    #[test]
    fn unknown_parameter_is_rejected_by_name() {
        let err = BilingualDictionary::initialize([("Dialect", "bavarian")]).unwrap_err();
        assert!(matches!(err, InitError::UnrecognizedParameter { ref name } if name == "Dialect"));
    }

    #[test]
    fn no_parameters_builds() {
        let dict = BilingualDictionary::new().unwrap();
        assert_eq!(dict.ambient_encoding_name(), "UTF-8");
    }

    #[test]
    fn unknown_encoding_label_fails_at_build() {
        let err = BilingualDictionary::builder()
            .encoding("klingon-8")
            .build()
            .unwrap_err();
        assert!(matches!(err, InitError::UnknownEncoding { ref label } if label == "klingon-8"));
    }
}
