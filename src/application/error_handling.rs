// src/application/error_handling.rs
//
// Error classification for callers of the use cases
//
// ARCHITECTURE:
// - Maps internal errors → caller-friendly responses
// - Validation messages pass through unmodified
// - Never exposes persistence details
// - Logs internal errors for debugging

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
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
    /// Input rejected by entity validation
    Validation,

    /// Resource not found
    NotFound,

    /// Resource already exists
    Conflict,

    /// Caller cancelled the operation
    Cancelled,

    /// Persistence or other unexpected failure
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Domain(domain_error) => {
                Self::validation(domain_error.message().to_string())
            }

            AppError::NotFound => Self::failure(ErrorType::NotFound, "Resource not found", None),

            AppError::Conflict(message) => Self::failure(
                ErrorType::Conflict,
                "Resource already exists",
                Some(message),
            ),

            AppError::Cancelled => {
                Self::failure(ErrorType::Cancelled, "Operation cancelled", None)
            }

            AppError::Persistence(message) => {
                log::error!("Persistence error: {}", message);
                Self::failure(
                    ErrorType::Internal,
                    "Persistence operation failed",
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::failure(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self::failure(ErrorType::Internal, "Internal error", None)
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }

    fn failure(error_type: ErrorType, message: &str, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.to_string(),
            details,
        }
    }
}
