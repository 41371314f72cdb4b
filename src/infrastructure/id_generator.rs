// src/infrastructure/id_generator.rs

#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::error::AppResult;

/// Produces record identifiers
#[cfg_attr(test, automock)]
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> AppResult<String>;
}

/// Random UUID v4 identifiers in hyphenated form
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> AppResult<String> {
        Ok(Uuid::new_v4().to_string())
    }
}
