//! Unified application error type.
//! The store, the CLI handlers and the helpers all return AppError so that
//! failures reach `main` through a single path.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Caller errors
    // ---------------------------
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{kind} '{name}' already exists")]
    Duplicate { kind: String, name: String },

    #[error("{kind} with id={id} not found")]
    NotFound { kind: String, id: i64 },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for errors the user can fix by changing the input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::Duplicate { .. } | AppError::NotFound { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
