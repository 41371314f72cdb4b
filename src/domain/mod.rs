// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod livestock;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use livestock::{
    validate_livestock, validate_payload, Livestock, LivestockPayload, Principal, Timestamp,
    ValidationPolicy,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Field '{field}' is required and cannot be empty")]
    MissingField { field: &'static str },

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
