// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO event emission

pub mod livestock_repository;
pub mod memory_record_store;
pub mod record_store;
pub mod sqlite;

pub use livestock_repository::{LivestockRepository, StoreLivestockRepository};
pub use memory_record_store::InMemoryRecordStore;
pub use record_store::RecordStore;
pub use sqlite::SqliteRecordStore;
