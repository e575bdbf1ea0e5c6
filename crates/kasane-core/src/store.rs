use std::sync::{Arc, RwLock};

use crate::dictionary::{Dictionary, LookupResult};

/// Owned dictionary handle with an explicit load/reset lifecycle.
///
/// A reload builds the new index off to the side and swaps the `Arc` in one
/// write; readers holding a clone keep a consistent snapshot and never see a
/// partially-populated index.
#[derive(Default)]
pub struct DictionaryStore {
    inner: RwLock<Option<Arc<dyn Dictionary>>>,
}

impl DictionaryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Replace the current dictionary with a fully built one
    pub fn load(&self, dictionary: Arc<dyn Dictionary>) {
        let mut slot = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(dictionary);
    }

    /// Discard the entries and both indices together
    pub fn clear(&self) {
        let mut slot = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }

    /// Current snapshot, if a dictionary has been loaded
    pub fn get(&self) -> Option<Arc<dyn Dictionary>> {
        let slot = self.inner.read().unwrap_or_else(|e| e.into_inner());
        slot.clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.get().is_some()
    }

    /// Search the current snapshot; an unloaded store yields not-found
    pub fn search(&self, key: &str) -> Option<LookupResult> {
        self.get()?.search(key)
    }
}
