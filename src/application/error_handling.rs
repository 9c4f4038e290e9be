// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for UI
// - Never exposes internal implementation details
// - Logs errors for debugging

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Chapter, section, page, verse or bookmark outside the corpus
    NotFound,

    /// Malformed input
    Validation,

    /// Transport control used in the wrong playback state
    InvalidState,

    /// Corpus invariant violation
    DomainError,

    /// Database/persistence error
    Database,

    /// Audio player error
    Playback,

    /// File system error
    FileSystem,

    /// Other/unknown error
    Internal,
}

/// What every command returns
pub type CommandResult<T> = Result<T, ErrorResponse>;

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound(what) => {
                Self::new(ErrorType::NotFound, format!("{} not found", what), None)
            }

            AppError::InvalidArgument(message) => Self::new(ErrorType::Validation, message, None),

            AppError::InvalidState(message) => Self::new(ErrorType::InvalidState, message, None),

            AppError::Domain(domain_error) => Self::new(
                ErrorType::DomainError,
                "Corpus validation failed",
                Some(domain_error.to_string()),
            ),

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self::new(
                    ErrorType::Database,
                    "Database operation failed",
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);
                Self::new(ErrorType::Database, "Database connection failed", None)
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::new(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::new(
                    ErrorType::FileSystem,
                    "File system operation failed",
                    Some(io_error.to_string()),
                )
            }

            AppError::Playback(message) => {
                log::warn!("Playback error: {}", message);
                Self::new(ErrorType::Playback, "Audio player error", Some(message))
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self::new(ErrorType::Internal, message, None)
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self::new(ErrorType::Validation, message, None)
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self::new(ErrorType::NotFound, format!("{} not found", resource), None)
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{} ({})", self.message, details),
            None => f.write_str(&self.message),
        }
    }
}
