use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Meaning payload of one entry. The source data carries either a single
/// gloss string or a list of them; both shapes survive into the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Meaning {
    One(String),
    Many(Vec<String>),
}

impl Meaning {
    pub fn empty() -> Self {
        Meaning::Many(Vec::new())
    }

    /// All gloss strings, in source order
    pub fn texts(&self) -> Vec<String> {
        match self {
            Meaning::One(text) => vec![text.clone()],
            Meaning::Many(texts) => texts.clone(),
        }
    }

    pub fn rendered(&self) -> String {
        match self {
            Meaning::One(text) => text.clone(),
            Meaning::Many(texts) => texts.join("; "),
        }
    }

    /// Char count of the rendered text; the disambiguation metric
    pub fn rendered_len(&self) -> usize {
        self.rendered().chars().count()
    }
}

/// One dictionary record. Identity is the record's position in the loaded
/// sequence; entries are never mutated after the index is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub kanji: Vec<String>,
    pub kana: Vec<String>,
    pub meaning: Meaning,
}

impl Entry {
    /// Entries carrying both spellings and readings are canonical headwords
    /// rather than fragments.
    pub fn is_complete(&self) -> bool {
        !self.kanji.is_empty() && !self.kana.is_empty()
    }

    pub fn headword(&self) -> &str {
        self.kanji
            .first()
            .or_else(|| self.kana.first())
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Inverted index over the loaded entries: one bucket of entry positions per
/// kanji spelling and one per kana reading, in original entry order with
/// duplicates preserved.
#[derive(Debug, Default)]
pub struct Lexicon {
    entries: Vec<Entry>,
    kanji_index: HashMap<String, Vec<usize>>,
    kana_index: HashMap<String, Vec<usize>>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(entries: Vec<Entry>) -> Self {
        let mut kanji_index: HashMap<String, Vec<usize>> = HashMap::new();
        let mut kana_index: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            for kanji in &entry.kanji {
                kanji_index.entry(kanji.clone()).or_default().push(idx);
            }
            for kana in &entry.kana {
                kana_index.entry(kana.clone()).or_default().push(idx);
            }
        }

        Self {
            entries,
            kanji_index,
            kana_index,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Entry> {
        self.entries.get(idx)
    }

    /// Resolve a key to the best-matching entry. Kanji buckets take priority
    /// over kana buckets: a spelling match is more specific than a reading
    /// match even when both exist.
    pub fn search(&self, key: &str) -> Option<&Entry> {
        if let Some(bucket) = self.kanji_index.get(key) {
            if let Some(entry) = self.best_match(bucket) {
                return Some(entry);
            }
        }

        self.kana_index
            .get(key)
            .and_then(|bucket| self.best_match(bucket))
    }

    /// Resolve a bucket of candidate positions to one entry: complete
    /// entries first, then the shortest rendered meaning, then original
    /// entry order.
    fn best_match(&self, bucket: &[usize]) -> Option<&Entry> {
        if bucket.len() == 1 {
            return self.entries.get(bucket[0]);
        }

        bucket
            .iter()
            .filter_map(|&idx| self.entries.get(idx).map(|entry| (idx, entry)))
            .min_by_key(|&(idx, entry)| (!entry.is_complete(), entry.meaning.rendered_len(), idx))
            .map(|(_, entry)| entry)
    }
}
