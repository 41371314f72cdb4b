// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → client-facing responses
// - Provides consistent error format for callers
// - Never exposes storage internals
// - Logs errors for debugging

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response on the RPC surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Referenced id or name does not exist
    NotFound,

    /// Payload failed validation
    Validation,

    /// Identifier could not be generated
    Generation,

    /// Database/persistence error
    Database,

    /// Malformed request, unknown method or bad params
    InvalidRequest,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound { .. } => Self::new(ErrorType::NotFound, error.to_string(), None),

            AppError::Domain(domain_error) => Self::new(
                ErrorType::Validation,
                "Payload validation failed".to_string(),
                Some(domain_error.to_string()),
            ),

            AppError::Generation(reason) => Self::new(
                ErrorType::Generation,
                "Could not assign an identifier".to_string(),
                Some(reason),
            ),

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self::new(
                    ErrorType::Database,
                    "Database operation failed".to_string(),
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);
                Self::new(
                    ErrorType::Database,
                    "Database connection failed".to_string(),
                    None,
                )
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::new(
                    ErrorType::Internal,
                    "Stored record could not be read".to_string(),
                    None,
                )
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::new(
                    ErrorType::Internal,
                    "File system operation failed".to_string(),
                    Some(io_error.to_string()),
                )
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self::new(ErrorType::Internal, message, None)
            }
        }
    }

    /// Create invalid request error
    pub fn invalid_request(message: String) -> Self {
        Self::new(ErrorType::InvalidRequest, message, None)
    }

    fn new(error_type: ErrorType, message: String, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message,
            details,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}
