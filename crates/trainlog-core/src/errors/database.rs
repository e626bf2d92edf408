// ABOUTME: Structured error types for session store operations
// ABOUTME: Separates an unreachable store from a failed query so callers can report either
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use super::{AppError, ErrorCode};

/// Errors raised by a storage backend
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// The store could not be reached (closed pool, timeout, I/O)
    #[error("Session store unavailable: {context}")]
    Unavailable {
        /// What was being attempted
        context: String,
    },

    /// The store answered but the query failed
    #[error("Query failed: {context}")]
    QueryError {
        /// What was being attempted
        context: String,
    },

    /// A foreign key or uniqueness rule rejected the write
    #[error("Constraint violation: {context}")]
    ConstraintViolation {
        /// What was being attempted
        context: String,
    },

    /// A stored value could not be decoded into a domain type
    #[error("Invalid stored data in {field}: {reason}")]
    InvalidData {
        /// Column being decoded
        field: &'static str,
        /// Decoding failure
        reason: String,
    },

    /// Schema setup failed
    #[error("Migration failed: {context}")]
    MigrationError {
        /// Statement being applied
        context: String,
    },
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        let code = match &error {
            DatabaseError::Unavailable { .. } => ErrorCode::StoreUnavailable,
            DatabaseError::ConstraintViolation { .. } => ErrorCode::InvalidInput,
            DatabaseError::QueryError { .. }
            | DatabaseError::InvalidData { .. }
            | DatabaseError::MigrationError { .. } => ErrorCode::DatabaseError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

#[cfg(feature = "database-errors")]
impl DatabaseError {
    /// Classify a `sqlx` failure, keeping `context` for the log line
    #[must_use]
    pub fn from_sqlx(error: &sqlx::Error, context: &str) -> Self {
        let context = format!("{context}: {error}");
        match error {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::Unavailable { context }
            }
            sqlx::Error::Database(db_error)
                if db_error.is_foreign_key_violation() || db_error.is_unique_violation() =>
            {
                Self::ConstraintViolation { context }
            }
            _ => Self::QueryError { context },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_maps_to_store_unavailable() {
        let error: AppError = DatabaseError::Unavailable {
            context: "pool closed".to_owned(),
        }
        .into();
        assert_eq!(error.code, ErrorCode::StoreUnavailable);
        assert_eq!(error.http_status(), 503);
    }

    #[test]
    fn test_query_error_maps_to_database_error() {
        let error: AppError = DatabaseError::QueryError {
            context: "bad column".to_owned(),
        }
        .into();
        assert_eq!(error.code, ErrorCode::DatabaseError);
        assert!(error.message.contains("bad column"));
    }
}
