pub mod entity;
pub mod invariants;

pub use entity::{Livestock, LivestockPayload, Principal, Timestamp};
pub use invariants::{validate_livestock, validate_payload, ValidationPolicy};
