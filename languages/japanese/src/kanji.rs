use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use kasane_core::dictionary::LoadError;

/// Returns true for characters in the Han script blocks
pub fn is_kanji(ch: char) -> bool {
    matches!(ch,
        '\u{4E00}'..='\u{9FFF}'        // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}'      // Extension A
        | '\u{F900}'..='\u{FAFF}'      // Compatibility Ideographs
        | '\u{20000}'..='\u{2A6DF}'    // Extension B
    )
}

#[derive(Debug, Deserialize)]
struct RawKanji {
    kanji: String,
    meaning: String,
}

/// Per-character gloss provider for the kanji appearing in a headword
#[derive(Debug, Default)]
pub struct KanjiMeanings {
    meanings: HashMap<char, String>,
}

impl KanjiMeanings {
    /// Create empty kanji gloss database
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON array of `{kanji, meaning}` records. Records whose
    /// `kanji` field is not a single character are dropped with a warning.
    pub fn from_str(json: &str) -> Result<Self, LoadError> {
        let raw: Vec<RawKanji> = serde_json::from_str(json)?;

        let mut meanings = HashMap::with_capacity(raw.len());
        for record in raw {
            let mut chars = record.kanji.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => {
                    meanings.insert(ch, record.meaning);
                }
                _ => {
                    tracing::warn!("ignoring kanji gloss for {:?}: not a single character", record.kanji);
                }
            }
        }

        Ok(Self { meanings })
    }

    /// Load the gloss database from a file path
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        tracing::info!("loading kanji glosses from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_str(&json)
    }

    pub fn get(&self, ch: char) -> Option<&str> {
        self.meanings.get(&ch).map(String::as_str)
    }

    /// Glosses for every kanji character of `word`, in word order
    pub fn glosses_for(&self, word: &str) -> Vec<(char, &str)> {
        word.chars()
            .filter(|ch| is_kanji(*ch))
            .filter_map(|ch| self.get(ch).map(|gloss| (ch, gloss)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.meanings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meanings.is_empty()
    }
}
