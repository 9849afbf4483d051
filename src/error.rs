//! Stable error codes for HTTP clients.

use rusqlite::ErrorCode;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Db(String),

    #[error("Error in {op}: {message}")]
    NotFound { op: &'static str, message: String },

    #[error("Error in {op}: {message}")]
    ConstraintViolation { op: &'static str, message: String },

    #[error("Error in {op}: {message}")]
    Unavailable { op: &'static str, message: String },

    #[error("Error in {op}: {message}")]
    OperationFailed { op: &'static str, message: String },
}

impl AppError {
    /// Wrap a store failure raised inside the named operation, keeping its
    /// text and classifying it by SQLite result code.
    pub fn in_op(op: &'static str, e: rusqlite::Error) -> Self {
        let message = e.to_string();
        log::warn!("{} failed: {}", op, message);
        match &e {
            rusqlite::Error::QueryReturnedNoRows => Self::NotFound { op, message },
            rusqlite::Error::SqliteFailure(err, _) => match err.code {
                ErrorCode::ConstraintViolation => Self::ConstraintViolation { op, message },
                ErrorCode::CannotOpen
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::SystemIoFailure
                | ErrorCode::NotADatabase
                | ErrorCode::PermissionDenied
                | ErrorCode::ReadOnly => Self::Unavailable { op, message },
                _ => Self::OperationFailed { op, message },
            },
            _ => Self::OperationFailed { op, message },
        }
    }

    /// `map_err` adapter for [`AppError::in_op`].
    pub fn op(op: &'static str) -> impl Fn(rusqlite::Error) -> Self {
        move |e| Self::in_op(op, e)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Db(_) => "DB_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::ConstraintViolation { .. } => "CONSTRAINT_VIOLATION",
            Self::Unavailable { .. } => "DB_UNAVAILABLE",
            Self::OperationFailed { .. } => "OPERATION_FAILED",
        }
    }

    pub fn to_serde(&self) -> AppErrorDto {
        AppErrorDto {
            code: self.code().to_string(),
            message: self.to_string(),
            details: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AppErrorDto {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
