// src/lib.rs
// Livestock Registry - durable record keeping for livestock entries
//
// Architecture:
// - Domain-centric: record shape and invariants live in `domain`
// - Repositories are dumb mappers over a durable key-value store
// - One service owns every mutation and runs them one at a time
// - Collaborators (clock, caller identity, id source) are injected
// - Application layer: DTOs, commands and the JSON-lines dispatcher

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod logger;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_livestock, validate_payload, DomainError, Livestock, LivestockPayload, Principal,
    Timestamp, ValidationPolicy,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{DomainEvent, EventBus, LivestockCreated, LivestockDeleted, LivestockUpdated};

// ============================================================================
// PUBLIC API - Database & Repositories
// ============================================================================

pub use db::{create_connection_pool, create_memory_pool, initialize_database, ConnectionPool};

pub use repositories::{
    InMemoryRecordStore, LivestockRepository, RecordStore, SqliteRecordStore,
    StoreLivestockRepository,
};

// ============================================================================
// PUBLIC API - Collaborators & Services
// ============================================================================

pub use infrastructure::{
    Clock, IdGenerator, IdentitySource, StaticIdentity, SystemClock, UuidGenerator,
};

pub use services::LivestockService;

// ============================================================================
// PUBLIC API - Configuration & Application Layer
// ============================================================================

pub use config::{CliConfig, RegistryConfig};

pub use application::AppState;
pub use application::commands;
pub use application::dto;
