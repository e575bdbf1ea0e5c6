use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use kasane_core::dictionary::{EntryError, EntryPolicy, LoadError};

use crate::dictionary::{Entry, Lexicon, Meaning};

/// Raw record as it appears in the dataset. Form fields stay untyped here so
/// malformed records surface as `EntryError` instead of failing the whole
/// parse.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    kanji: Option<Value>,
    #[serde(default)]
    kana: Option<Value>,
    #[serde(default)]
    meaning: Option<Value>,
}

pub struct LexiconLoader;

impl LexiconLoader {
    /// Parse a JSON array of `{kanji, kana, meaning}` records and build the
    /// index. `policy` decides whether a malformed record aborts the load or
    /// is dropped (logged, never silent).
    pub fn from_str(json: &str, policy: EntryPolicy) -> Result<Lexicon, LoadError> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;

        let mut entries = Vec::with_capacity(raw.len());
        for (index, record) in raw.into_iter().enumerate() {
            match convert(index, record) {
                Ok(entry) => entries.push(entry),
                Err(err) => match policy {
                    EntryPolicy::Abort => return Err(err.into()),
                    EntryPolicy::Skip => {
                        tracing::warn!("skipping malformed dictionary record: {err}");
                    }
                },
            }
        }

        let lexicon = Lexicon::build(entries);
        tracing::info!("indexed {} dictionary entries", lexicon.entry_count());
        Ok(lexicon)
    }

    /// Load the dataset from a file path
    pub fn from_file(path: &Path, policy: EntryPolicy) -> Result<Lexicon, LoadError> {
        tracing::info!("loading dictionary from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_str(&json, policy)
    }
}

fn convert(index: usize, record: RawEntry) -> Result<Entry, EntryError> {
    Ok(Entry {
        kanji: forms(record.kanji, index, "kanji")?,
        kana: forms(record.kana, index, "kana")?,
        meaning: meaning(record.meaning, index),
    })
}

fn forms(value: Option<Value>, index: usize, field: &'static str) -> Result<Vec<String>, EntryError> {
    let items = match value {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(EntryError::MalformedForms { index, field }),
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(text) => Ok(text),
            _ => Err(EntryError::MalformedForms { index, field }),
        })
        .collect()
}

// A bad meaning payload degrades to an empty one; only malformed form
// fields fail an entry.
fn meaning(value: Option<Value>, index: usize) -> Meaning {
    match value {
        Some(Value::String(text)) => Meaning::One(text),
        Some(Value::Array(items)) => Meaning::Many(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text),
                    _ => None,
                })
                .collect(),
        ),
        None | Some(Value::Null) => Meaning::empty(),
        Some(other) => {
            tracing::warn!("entry {index}: unsupported meaning payload {other}, dropping");
            Meaning::empty()
        }
    }
}
