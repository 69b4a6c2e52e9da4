//! Translation of storage errors into [`AppError`].

use postboard_common::AppError;
use sea_orm::{DbErr, SqlErr};

/// Classify a storage error.
///
/// Unique and primary-key violations become [`AppError::Conflict`],
/// foreign-key violations become [`AppError::InvalidReference`]. Everything
/// else, including NOT NULL and CHECK violations, stays a database error.
pub fn map_db_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => AppError::Conflict(msg),
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => AppError::InvalidReference(msg),
        _ => AppError::Database(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_error_is_database_error() {
        let err = map_db_err(DbErr::Custom("connection reset".to_string()));
        assert!(matches!(err, AppError::Database(msg) if msg.contains("connection reset")));
    }

    #[test]
    fn test_record_not_inserted_is_database_error() {
        let err = map_db_err(DbErr::RecordNotInserted);
        assert!(err.is_server_error());
        assert!(!err.is_constraint_violation());
    }
}
