use kasane_core::dictionary::{Dictionary, DictionaryMetadata, LookupResult};
use kasane_core::preprocess::{DefaultPreprocessor, Preprocessor};

use crate::dictionary::Lexicon;

/// Japanese dictionary facade: normalizes lookup keys and adapts the lexicon
/// to the core `Dictionary` trait.
pub struct JapaneseDictionary {
    lexicon: Lexicon,
    preprocessor: DefaultPreprocessor,
}

impl JapaneseDictionary {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            preprocessor: DefaultPreprocessor,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl Dictionary for JapaneseDictionary {
    fn search(&self, key: &str) -> Option<LookupResult> {
        let key = self.preprocessor.normalize(key);
        let entry = self.lexicon.search(&key)?;

        Some(LookupResult {
            term: entry.headword().to_string(),
            readings: entry.kana.clone(),
            meanings: entry.meaning.texts(),
        })
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "kasane".to_string(),
            language: "ja".to_string(),
            entry_count: self.lexicon.entry_count(),
        }
    }
}
