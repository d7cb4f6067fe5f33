//! Key-value storage seam for the word list.
//!
//! The whole list lives under a single key as one JSON array. Every
//! operation receives the store handle explicitly.

use crate::error::{Result, VocabError};
use crate::types::WordEntry;
use std::cell::RefCell;
use std::collections::HashMap;

/// Key the word list is stored under.
pub const STORAGE_KEY: &str = "english_words";

/// Whole-value key-value store.
pub trait WordStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-process store, isolated per instance.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the full list. A missing key is an empty list.
pub fn load_words<S: WordStore + ?Sized>(store: &S) -> Result<Vec<WordEntry>> {
    match store.get(STORAGE_KEY)? {
        Some(raw) => serde_json::from_str(&raw).map_err(VocabError::CorruptStore),
        None => Ok(Vec::new()),
    }
}

/// Replace the full list.
pub fn save_words<S: WordStore + ?Sized>(store: &S, words: &[WordEntry]) -> Result<()> {
    let raw = serde_json::to_string(words).map_err(|e| VocabError::Storage(e.to_string()))?;
    tracing::debug!(count = words.len(), "saving word list");
    store.set(STORAGE_KEY, &raw)
}
