use std::str::FromStr;

use super::entity::{Livestock, LivestockPayload};
use crate::domain::{DomainError, DomainResult};

/// How strictly payloads are checked before they reach the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Every descriptive field must contain a non-blank value
    #[default]
    Strict,
    /// Any string is accepted, including the empty string
    Permissive,
}

impl FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(ValidationPolicy::Strict),
            "permissive" | "lenient" => Ok(ValidationPolicy::Permissive),
            other => Err(format!(
                "unknown validation policy '{}' (expected 'strict' or 'permissive')",
                other
            )),
        }
    }
}

impl std::fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationPolicy::Strict => write!(f, "strict"),
            ValidationPolicy::Permissive => write!(f, "permissive"),
        }
    }
}

/// Validates a create/update payload under the given policy.
/// Reports the first blank field in declaration order.
pub fn validate_payload(payload: &LivestockPayload, policy: ValidationPolicy) -> DomainResult<()> {
    if policy == ValidationPolicy::Permissive {
        return Ok(());
    }

    for (field, value) in payload.fields() {
        if value.trim().is_empty() {
            return Err(DomainError::MissingField { field });
        }
    }

    Ok(())
}

/// Validates the system-assigned part of a record
pub fn validate_livestock(livestock: &Livestock) -> DomainResult<()> {
    if livestock.id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Livestock id cannot be empty".to_string(),
        ));
    }

    if let Some(updated_at) = livestock.updated_at {
        if updated_at < livestock.created_at {
            return Err(DomainError::InvariantViolation(format!(
                "Update time {} precedes creation time {}",
                updated_at, livestock.created_at
            )));
        }
    }

    Ok(())
}

/// Invariants that must hold true for a Livestock record:
///
/// 1. Identity (id) is immutable and unique in the store
/// 2. Owner is set once at creation
/// 3. Created timestamp never changes
/// 4. Updated timestamp is absent until the first update
/// 5. All nine descriptive fields are always present
