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

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A chapter, section, page, verse or bookmark outside the corpus
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed request rejected before any side effect
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport operation issued in a state that does not allow it
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Playback failure: {0}")]
    Playback(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::Other(format!("UUID error: {}", err))
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::Other(format!("Date parse error: {}", err))
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
    fn test_serializes_as_display_string() {
        let err = AppError::NotFound("chapter 115".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Not found: chapter 115\"");
    }

    #[test]
    fn test_domain_error_converts() {
        let err: AppError = DomainError::InvariantViolation("gap".to_string()).into();
        assert!(matches!(err, AppError::Domain(_)));
    }
}
