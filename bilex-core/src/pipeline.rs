//! Single-language pipeline: stoplist, recode, stem, recode back

use crate::encoding::AmbientEncoding;
use crate::error::{InitResult, LexizeResult};
use crate::stemmer::{locate_stemmer, StemmingTransform};
use crate::stoplist::StopList;
use crate::Language;
use parking_lot::Mutex;
use std::borrow::Cow;

/// One language's normalization pipeline.
///
/// Immutable after construction apart from the transform's scratch state,
/// which is guarded by a mutex so a shared dictionary can be called from
/// multiple threads.
pub struct LanguagePipeline {
    language: Language,
    stoplist: StopList,
    transform: Mutex<Box<dyn StemmingTransform>>,
    needs_recode: bool,
    ambient: AmbientEncoding,
}

impl LanguagePipeline {
    /// Resolve the stemmer and load the stoplist for `language`
    pub fn new(language: Language, ambient: AmbientEncoding) -> InitResult<LanguagePipeline> {
        let (transform, needs_recode) = locate_stemmer(language.name(), ambient)?;
        let stoplist = StopList::load(language, ambient);
        Ok(LanguagePipeline {
            language,
            stoplist,
            transform: Mutex::new(transform),
            needs_recode,
            ambient,
        })
    }

    /// The language this pipeline serves
    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether the transform runs in a different encoding than the ambient one
    pub fn needs_recode(&self) -> bool {
        self.needs_recode
    }

    /// Run one lowercased, ambient-encoded word through the pipeline.
    ///
    /// `None` means the word is stopped for this language; the other pipeline
    /// is unaffected. An empty stem result is propagated as an empty word.
    pub fn run(&self, word: &[u8]) -> LexizeResult<Option<Vec<u8>>> {
        if self.stoplist.contains(word) {
            return Ok(None);
        }

        let encoded = self.to_transform_encoding(word)?;
        let stemmed = {
            let mut transform = self.transform.lock();
            // copy out of the transform's scratch buffer before unlocking
            transform.stem(&encoded)?.to_vec()
        };
        let result = self.from_transform_encoding(stemmed)?;
        Ok(Some(result))
    }

    fn to_transform_encoding<'a>(&self, word: &'a [u8]) -> LexizeResult<Cow<'a, [u8]>> {
        if !self.needs_recode {
            return Ok(Cow::Borrowed(word));
        }
        let text = self.ambient.decode_strict(word)?;
        Ok(Cow::Owned(text.into_owned().into_bytes()))
    }

    fn from_transform_encoding(&self, stemmed: Vec<u8>) -> LexizeResult<Vec<u8>> {
        if !self.needs_recode {
            return Ok(stemmed);
        }
        let text = String::from_utf8(stemmed)
            .map_err(|_| crate::error::LexizeError::MalformedInput { encoding: "UTF-8" })?;
        self.ambient.encode_strict(&text)
    }
}

impl std::fmt::Debug for LanguagePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguagePipeline")
            .field("language", &self.language)
            .field("stoplist_len", &self.stoplist.len())
            .field("needs_recode", &self.needs_recode)
            .field("ambient", &self.ambient)
            .finish()
    }
}
