// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Principal, Timestamp};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// LIVESTOCK EVENTS
// ============================================================================

/// Emitted after a new record is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivestockCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub livestock_id: String,
    pub name: String,
    pub owner: Principal,
}

impl LivestockCreated {
    pub fn new(livestock_id: String, name: String, owner: Principal) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            livestock_id,
            name,
            owner,
        }
    }
}

impl DomainEvent for LivestockCreated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "LivestockCreated" }
}

/// Emitted after a record's descriptive fields are replaced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivestockUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub livestock_id: String,
    pub updated_at: Timestamp,
}

impl LivestockUpdated {
    pub fn new(livestock_id: String, updated_at: Timestamp) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            livestock_id,
            updated_at,
        }
    }
}

impl DomainEvent for LivestockUpdated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "LivestockUpdated" }
}

/// Emitted after a record is removed from the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivestockDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub livestock_id: String,
}

impl LivestockDeleted {
    pub fn new(livestock_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            livestock_id,
        }
    }
}

impl DomainEvent for LivestockDeleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "LivestockDeleted" }
}
