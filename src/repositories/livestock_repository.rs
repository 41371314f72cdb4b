// src/repositories/livestock_repository.rs
//
// Livestock persistence on top of a RecordStore

use std::sync::Arc;

use crate::domain::Livestock;
use crate::error::AppResult;
use crate::repositories::record_store::RecordStore;

pub trait LivestockRepository: Send + Sync {
    /// Insert or overwrite the record under its id
    fn save(&self, livestock: &Livestock) -> AppResult<()>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<Livestock>>;
    fn list_all(&self) -> AppResult<Vec<Livestock>>;
    /// Remove the record, returning it as it was stored
    fn remove(&self, id: &str) -> AppResult<Option<Livestock>>;
    fn exists(&self, id: &str) -> AppResult<bool>;
}

/// Stores each record as JSON, keyed by its id
pub struct StoreLivestockRepository {
    store: Arc<dyn RecordStore>,
}

impl StoreLivestockRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    fn decode(value: &str) -> AppResult<Livestock> {
        Ok(serde_json::from_str(value)?)
    }
}

impl LivestockRepository for StoreLivestockRepository {
    fn save(&self, livestock: &Livestock) -> AppResult<()> {
        let value = serde_json::to_string(livestock)?;
        self.store.insert(&livestock.id, &value)?;
        Ok(())
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<Livestock>> {
        self.store
            .get(id)?
            .map(|value| Self::decode(&value))
            .transpose()
    }

    fn list_all(&self) -> AppResult<Vec<Livestock>> {
        self.store
            .values()?
            .iter()
            .map(|value| Self::decode(value))
            .collect()
    }

    fn remove(&self, id: &str) -> AppResult<Option<Livestock>> {
        self.store
            .remove(id)?
            .map(|value| Self::decode(&value))
            .transpose()
    }

    fn exists(&self, id: &str) -> AppResult<bool> {
        Ok(self.store.get(id)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LivestockPayload, Principal};
    use crate::error::AppError;
    use crate::repositories::memory_record_store::InMemoryRecordStore;

    fn record(id: &str, name: &str) -> Livestock {
        let payload = LivestockPayload {
            species: "goat".to_string(),
            name: name.to_string(),
            sex: "M".to_string(),
            coatcolour: "black".to_string(),
            brand: "G".to_string(),
            breed: "Boer".to_string(),
            dob: "2021-03-14".to_string(),
            marking: "white blaze".to_string(),
            tag_no: "G-7".to_string(),
        };
        Livestock::create(id.to_string(), payload, Principal::new("farmer"), 42)
    }

    #[test]
    fn test_save_and_get_round_trip() {
        let repo = StoreLivestockRepository::new(Arc::new(InMemoryRecordStore::new()));
        let billy = record("id-1", "Billy");

        repo.save(&billy).unwrap();

        assert_eq!(repo.get_by_id("id-1").unwrap(), Some(billy));
        assert!(repo.exists("id-1").unwrap());
        assert!(!repo.exists("id-2").unwrap());
    }

    #[test]
    fn test_remove_returns_stored_record() {
        let repo = StoreLivestockRepository::new(Arc::new(InMemoryRecordStore::new()));
        let billy = record("id-1", "Billy");
        repo.save(&billy).unwrap();

        assert_eq!(repo.remove("id-1").unwrap(), Some(billy));
        assert_eq!(repo.remove("id-1").unwrap(), None);
        assert!(repo.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_value_is_an_error() {
        let store = Arc::new(InMemoryRecordStore::new());
        store.insert("bad", "not json").unwrap();
        let repo = StoreLivestockRepository::new(store);

        assert!(matches!(repo.get_by_id("bad"), Err(AppError::Serialization(_))));
        assert!(matches!(repo.list_all(), Err(AppError::Serialization(_))));
    }
}
