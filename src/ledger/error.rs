//! Errors surfaced by the stock ledger.

use rusqlite::ErrorCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Store unavailable at {path:?}: {source}")]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Schema mismatch: {0}. Re-initialize the database with a forced reset.")]
    SchemaMismatch(String),

    #[error("Store error: {0}")]
    Store(#[source] rusqlite::Error),
}

pub type LedgerResult<T> = Result<T, LedgerError>;

impl LedgerError {
    /// Classifies a SQLite error raised while working on the database at `path`.
    pub fn from_sqlite(path: &std::path::Path, err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => {
                LedgerError::ConstraintViolation(err.to_string())
            }
            Some(
                ErrorCode::CannotOpen
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::NotADatabase
                | ErrorCode::PermissionDenied
                | ErrorCode::ReadOnly,
            ) => LedgerError::StoreUnavailable {
                path: path.to_path_buf(),
                source: err,
            },
            _ => LedgerError::Store(err),
        }
    }
}
