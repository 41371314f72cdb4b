// src/repositories/record_store.rs
//
// Durable ordered map: string key -> opaque serialized value

use crate::error::AppResult;

/// Key-value persistence for serialized records.
///
/// Each call is atomic on its own. Callers that need a read-modify-write
/// sequence must serialize it themselves.
pub trait RecordStore: Send + Sync {
    /// Store `value` under `key`, returning the value it replaced
    fn insert(&self, key: &str, value: &str) -> AppResult<Option<String>>;

    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Remove `key`, returning the value it held
    fn remove(&self, key: &str) -> AppResult<Option<String>>;

    /// All stored values. Order is an implementation detail.
    fn values(&self) -> AppResult<Vec<String>>;

    fn len(&self) -> AppResult<usize>;

    fn is_empty(&self) -> AppResult<bool> {
        Ok(self.len()? == 0)
    }
}
