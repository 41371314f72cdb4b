// src/repositories/memory_record_store.rs
//
// Process-local RecordStore. Nothing survives a restart.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use crate::error::AppResult;
use crate::repositories::record_store::RecordStore;

#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn insert(&self, key: &str, value: &str) -> AppResult<Option<String>> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.insert(key.to_string(), value.to_string()))
    }

    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn remove(&self, key: &str) -> AppResult<Option<String>> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.remove(key))
    }

    fn values(&self) -> AppResult<Vec<String>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.values().cloned().collect())
    }

    fn len(&self) -> AppResult<usize> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.len())
    }
}
