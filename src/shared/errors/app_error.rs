use serde::Serialize;
use thiserror::Error;

use super::constraints;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Failure classes surfaced to callers of the lifecycle core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Conflict,
    BadRequest,
    Internal,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Conflict(_) => ErrorKind::Conflict,
            AppError::BadRequest(_) => ErrorKind::BadRequest,
            AppError::DatabaseError(_)
            | AppError::SerializationError(_)
            | AppError::InternalError(_) => ErrorKind::Internal,
        }
    }

    /// Human readable message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(m)
            | AppError::Conflict(m)
            | AppError::BadRequest(m)
            | AppError::DatabaseError(m)
            | AppError::SerializationError(m)
            | AppError::InternalError(m) => m,
        }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        match err {
            Error::NotFound => AppError::NotFound("Record not found in database".to_string()),
            Error::DatabaseError(kind, info) => {
                if let Some(message) = info.constraint_name().and_then(constraints::conflict_message)
                {
                    return AppError::Conflict(message.to_string());
                }
                match kind {
                    DatabaseErrorKind::UniqueViolation => {
                        AppError::Conflict(format!("Duplicate record: {}", info.message()))
                    }
                    DatabaseErrorKind::SerializationFailure => AppError::Conflict(format!(
                        "Concurrent update detected, transaction aborted: {}",
                        info.message()
                    )),
                    _ => AppError::DatabaseError(info.message().to_string()),
                }
            }
            _ => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::DatabaseError(format!("Database pool error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Blocking task failed: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
