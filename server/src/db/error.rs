//! Database error types
//!
//! Wraps sqlx failures so repositories can use `?` and the managers can turn
//! any store failure into `TodoError::Store` at the operation boundary.

use thiserror::Error;
use todo_core::TodoError;

#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Connection or pool error
    #[error("database connection failed: {0}")]
    Connection(String),

    /// Constraint violation (check, foreign key, ...)
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// A stored value could not be decoded into its domain type
    #[error("data type error: {0}")]
    TypeError(String),

    /// Migration error
    #[error("migration failed: {0}")]
    Migration(String),

    /// Query execution error
    #[error("query error: {0}")]
    Query(String),
}

impl DatabaseError {
    pub fn type_error(msg: impl Into<String>) -> Self {
        DatabaseError::TypeError(msg.into())
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, DatabaseError::ConstraintViolation(_))
    }
}

/// Result type for database operations
pub type DbResult<T> = Result<T, DatabaseError>;

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                if db_err.is_foreign_key_violation() || db_err.is_check_violation() {
                    DatabaseError::ConstraintViolation(db_err.message().to_string())
                } else {
                    DatabaseError::Query(db_err.message().to_string())
                }
            }
            sqlx::Error::ColumnDecode { index, source } => {
                DatabaseError::TypeError(format!("error decoding column {index}: {source}"))
            }
            sqlx::Error::Decode(source) => DatabaseError::TypeError(format!("decode error: {source}")),
            sqlx::Error::Configuration(msg) => {
                DatabaseError::Connection(format!("configuration error: {msg}"))
            }
            sqlx::Error::Io(err) => DatabaseError::Connection(format!("IO error: {err}")),
            sqlx::Error::PoolTimedOut => {
                DatabaseError::Connection("connection pool timed out".to_string())
            }
            sqlx::Error::PoolClosed => DatabaseError::Connection("connection pool is closed".to_string()),
            sqlx::Error::Migrate(err) => DatabaseError::Migration(err.to_string()),
            err => DatabaseError::Query(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DatabaseError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DatabaseError::Migration(err.to_string())
    }
}

/// The only place a store failure is logged; the HTTP layer renders it
/// without the detail.
impl From<DatabaseError> for TodoError {
    fn from(err: DatabaseError) -> Self {
        if err.is_constraint_violation() {
            tracing::warn!(error = %err, "store rejected a write");
        } else {
            tracing::error!(error = %err, "store operation failed");
        }
        TodoError::Store(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_closed_maps_to_connection_error() {
        let err: DatabaseError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, DatabaseError::Connection(_)));
        assert!(!err.is_constraint_violation());
    }

    #[test]
    fn row_not_found_maps_to_query_error() {
        let err: DatabaseError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DatabaseError::Query(_)));
    }

    #[tokio::test]
    async fn check_constraint_maps_to_constraint_violation() {
        let conn = crate::db::DatabaseConnection::in_memory().await.unwrap();
        let now = chrono::Utc::now();
        let err: DatabaseError = sqlx::query(
            "INSERT INTO lists (id, title, created_at, updated_at) VALUES (?, '', ?, ?)",
        )
        .bind(uuid::Uuid::new_v4())
        .bind(now)
        .bind(now)
        .execute(conn.pool())
        .await
        .unwrap_err()
        .into();
        assert!(err.is_constraint_violation(), "{err}");
    }

    #[test]
    fn constraint_violation_still_becomes_store_error() {
        let err = DatabaseError::ConstraintViolation("CHECK constraint failed: title".to_string());
        assert!(err.is_constraint_violation());
        match TodoError::from(err) {
            TodoError::Store(msg) => assert!(msg.starts_with("constraint violation")),
            other => panic!("expected store error, got {other:?}"),
        }
    }

    #[test]
    fn database_error_becomes_store_error() {
        let err: TodoError = DatabaseError::type_error("bad priority").into();
        match err {
            TodoError::Store(msg) => assert!(msg.contains("bad priority")),
            other => panic!("expected store error, got {other:?}"),
        }
    }
}
