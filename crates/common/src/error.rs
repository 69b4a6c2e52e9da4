//! Error types for postboard.

use thiserror::Error;

/// Application result type.
pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
///
/// Integrity rules (unique email, composite follower key, foreign keys,
/// media kind domain) are enforced by the storage engine. The repositories
/// only classify what the engine reports into the variants below.
#[derive(Debug, Error)]
pub enum AppError {
    // === Lookup Errors ===
    #[error("User not found: {0}")]
    UserNotFound(i32),

    #[error("Post not found: {0}")]
    PostNotFound(i32),

    #[error("Comment not found: {0}")]
    CommentNotFound(i32),

    // === Integrity Errors ===
    /// A unique or primary-key constraint rejected the row.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A foreign-key constraint rejected the row.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    // === Server Errors ===
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::PostNotFound(_) => "POST_NOT_FOUND",
            Self::CommentNotFound(_) => "COMMENT_NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::InvalidReference(_) => "INVALID_REFERENCE",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Returns whether this error should be logged at error level.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Config(_))
    }

    /// Returns whether the storage engine rejected the row for integrity reasons.
    #[must_use]
    pub const fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::Conflict(_) | Self::InvalidReference(_))
    }
}

// === From implementations ===

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::UserNotFound(1).error_code(), "USER_NOT_FOUND");
        assert_eq!(AppError::PostNotFound(1).error_code(), "POST_NOT_FOUND");
        assert_eq!(
            AppError::InvalidReference("fk".to_string()).error_code(),
            "INVALID_REFERENCE"
        );
        assert_eq!(AppError::Conflict("dup".to_string()).error_code(), "CONFLICT");
    }

    #[test]
    fn test_server_error_classification() {
        assert!(AppError::Database("boom".to_string()).is_server_error());
        assert!(AppError::Config("missing".to_string()).is_server_error());
        assert!(!AppError::Conflict("dup".to_string()).is_server_error());
        assert!(!AppError::CommentNotFound(3).is_server_error());
    }

    #[test]
    fn test_constraint_violation() {
        assert!(AppError::Conflict("email".to_string()).is_constraint_violation());
        assert!(AppError::InvalidReference("user_id".to_string()).is_constraint_violation());
        assert!(!AppError::Database("io".to_string()).is_constraint_violation());
    }

    #[test]
    fn test_display() {
        let err = AppError::UserNotFound(42);
        assert_eq!(err.to_string(), "User not found: 42");
    }
}
