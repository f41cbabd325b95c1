use sqlx::error::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("constraint violated: {0}")]
    Constraint(String),
    #[error("unexpected database error: {0}")]
    Unexpected(String),
}

impl RepositoryError {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint(message.into())
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Maps a write failure onto the taxonomy, naming the violated rule on conflicts.
    pub fn from_write(err: sqlx::Error, conflict_message: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::conflict(conflict_message);
            }
            if is_foreign_key_failure(&**db_err) {
                return Self::constraint(db_err.message().to_string());
            }
        }
        Self::unexpected(err.to_string())
    }
}

/// SQLite reports `ON DELETE RESTRICT` as `SQLITE_CONSTRAINT_TRIGGER` (1811) rather than 787.
fn is_foreign_key_failure(db_err: &dyn DatabaseError) -> bool {
    db_err.is_foreign_key_violation()
        || db_err.code().as_deref() == Some("1811")
        || db_err.message().contains("FOREIGN KEY constraint failed")
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound,
            other => Self::unexpected(other.to_string()),
        }
    }
}
