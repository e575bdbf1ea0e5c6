use serde::Serialize;

/// Dictionary lookup operations
pub trait Dictionary: Send + Sync {
    /// Resolve a key to the single best-matching entry, if any
    fn search(&self, key: &str) -> Option<LookupResult>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

/// Best-match payload handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    pub term: String,
    pub readings: Vec<String>,
    pub meanings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Entry(#[from] EntryError),
}

/// Malformed dictionary record found while building an index
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("entry {index}: field `{field}` must be an array of strings")]
    MalformedForms { index: usize, field: &'static str },
}

/// What to do with a malformed record during a load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryPolicy {
    /// Fail the whole load on the first malformed record
    #[default]
    Abort,
    /// Drop the record and keep loading; every drop is logged
    Skip,
}
