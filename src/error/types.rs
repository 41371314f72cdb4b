// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{entity} with {key}={value} not found")]
    NotFound {
        entity: &'static str,
        key: &'static str,
        value: String,
    },

    #[error("Identifier generation failed: {0}")]
    Generation(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    pub fn livestock_not_found(id: impl Into<String>) -> Self {
        AppError::NotFound {
            entity: "Livestock",
            key: "id",
            value: id.into(),
        }
    }

    pub fn livestock_name_not_found(name: impl AsRef<str>) -> Self {
        AppError::NotFound {
            entity: "Livestock",
            key: "name",
            value: format!("\"{}\"", name.as_ref()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages_carry_the_key() {
        assert_eq!(
            AppError::livestock_not_found("abc").to_string(),
            "Livestock with id=abc not found"
        );
        assert_eq!(
            AppError::livestock_name_not_found("Bessie").to_string(),
            "Livestock with name=\"Bessie\" not found"
        );
    }

    #[test]
    fn test_domain_error_is_reported_as_validation() {
        let err = AppError::from(DomainError::MissingField { field: "dob" });
        assert_eq!(
            err.to_string(),
            "Validation error: Field 'dob' is required and cannot be empty"
        );
        assert!(!err.is_not_found());
    }
}
